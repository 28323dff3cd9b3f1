//! Spreadsheet-backed storage. The portal holds no durable state of its own;
//! both tables live in an external Google Sheets store and are read wholesale
//! per session.

pub mod google;
pub mod memory;

use crate::errors::PortalResult;
use async_trait::async_trait;

/// Whole-sheet access: read every row, append whole rows. No incremental
/// updates, no transactions; appends are independent and additive.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// All rows of the spreadsheet's first sheet, header included.
    async fn read_rows(&self, spreadsheet_id: &str) -> PortalResult<Vec<Vec<String>>>;

    /// Appends one row after the last non-empty row.
    async fn append_row(&self, spreadsheet_id: &str, row: Vec<String>) -> PortalResult<()>;
}
