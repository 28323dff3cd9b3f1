use crate::errors::{PortalError, PortalResult};

/// In-memory snapshot of one sheet: a header row plus data rows, exactly as
/// the store returned them. Rows may be ragged (trailing blank cells are not
/// padded by the Sheets API); `cell` treats anything past the end as empty.
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(mut values: Vec<Vec<String>>) -> PortalResult<Self> {
        if values.is_empty() {
            return Err(PortalError::EmptyTable);
        }
        let header = values.remove(0);
        Ok(Self {
            header,
            rows: values,
        })
    }

    /// Reports every missing column in one error, so the administrator can
    /// fix the sheet in a single pass.
    pub fn require_columns(&self, required: &[&str]) -> PortalResult<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PortalError::MissingColumns { columns: missing })
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h.trim() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell by row index and column name; "" for absent columns or short rows.
    pub fn cell<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.column_index(name)
            .and_then(|idx| row.get(idx))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}
