use crate::errors::{PortalError, PortalResult};
use crate::sheets::SheetStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for the Google store, used by the integration tests.
/// Unknown spreadsheet IDs behave like an unshared sheet upstream.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<HashMap<String, Vec<Vec<String>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, spreadsheet_id: &str, rows: Vec<Vec<String>>) -> Self {
        self.tables
            .lock()
            .unwrap()
            .insert(spreadsheet_id.to_string(), rows);
        self
    }

    /// Snapshot of a table, for asserting on appended rows.
    pub fn rows(&self, spreadsheet_id: &str) -> Vec<Vec<String>> {
        self.tables
            .lock()
            .unwrap()
            .get(spreadsheet_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl SheetStore for InMemoryStore {
    async fn read_rows(&self, spreadsheet_id: &str) -> PortalResult<Vec<Vec<String>>> {
        self.tables
            .lock()
            .unwrap()
            .get(spreadsheet_id)
            .cloned()
            .ok_or_else(|| {
                PortalError::Upstream(format!("spreadsheet {spreadsheet_id} not found"))
            })
    }

    async fn append_row(&self, spreadsheet_id: &str, row: Vec<String>) -> PortalResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let table = tables.get_mut(spreadsheet_id).ok_or_else(|| {
            PortalError::Upstream(format!("spreadsheet {spreadsheet_id} not found"))
        })?;
        table.push(row);
        Ok(())
    }
}
