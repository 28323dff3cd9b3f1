use crate::errors::PortalResult;
use crate::model::table::Table;
use serde::Serialize;

/// Columns every members sheet must carry. The credential column (`PIN` or
/// `PIN_Hash`) is resolved separately since exactly one of the two is
/// expected per deployment.
pub const MEMBER_COLUMNS: [&str; 8] = [
    "MemberID",
    "MemberName",
    "Email",
    "LeaveYear",
    "AnnualAllowance",
    "LeaveTaken",
    "LeaveBalance",
    "LastUpdated",
];

pub const COL_PIN: &str = "PIN";
pub const COL_PIN_HASH: &str = "PIN_Hash";
pub const COL_NOTES: &str = "Notes";

/// Credential stored on a member row, tagged once at load time so the
/// verifier never has to re-inspect which columns the sheet carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Credential {
    Plaintext(String),
    Hashed(String),
    /// Row carries neither a PIN nor a PIN hash. Such rows can never
    /// authenticate.
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub member_id: String,
    pub member_name: String,
    pub email: String,
    pub leave_year: String,
    pub annual_allowance: f64,
    pub leave_taken: f64,
    /// Stored as-is from the sheet. Intentionally never recomputed from
    /// allowance minus taken; the sheet is the source of truth.
    pub leave_balance: f64,
    pub last_updated: String,
    pub notes: String,
    #[serde(skip)]
    pub credential: Credential,
}

/// Leave fields are numeric in well-kept sheets, but blank or stray cells do
/// turn up. A default substitutes rather than failing the whole load.
fn leave_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

impl Member {
    /// Loads the whole members sheet, validating the schema up front and
    /// resolving each row's credential. A non-blank hash wins over a
    /// leftover plaintext PIN mid-migration.
    pub fn from_table(table: &Table) -> PortalResult<Vec<Member>> {
        table.require_columns(&MEMBER_COLUMNS)?;

        let has_hash_col = table.has_column(COL_PIN_HASH);
        let has_pin_col = table.has_column(COL_PIN);

        let members = table
            .rows()
            .iter()
            .map(|row| {
                let hash = table.cell(row, COL_PIN_HASH).trim();
                let pin = table.cell(row, COL_PIN).trim();

                let credential = if has_hash_col && !hash.is_empty() {
                    Credential::Hashed(hash.to_string())
                } else if has_pin_col && !pin.is_empty() {
                    Credential::Plaintext(pin.to_string())
                } else {
                    Credential::Missing
                };

                Member {
                    member_id: table.cell(row, "MemberID").trim().to_string(),
                    member_name: table.cell(row, "MemberName").trim().to_string(),
                    email: table.cell(row, "Email").trim().to_string(),
                    leave_year: table.cell(row, "LeaveYear").trim().to_string(),
                    annual_allowance: leave_number(table.cell(row, "AnnualAllowance")),
                    leave_taken: leave_number(table.cell(row, "LeaveTaken")),
                    leave_balance: leave_number(table.cell(row, "LeaveBalance")),
                    last_updated: table.cell(row, "LastUpdated").trim().to_string(),
                    notes: table.cell(row, COL_NOTES).trim().to_string(),
                    credential,
                }
            })
            .collect();

        Ok(members)
    }
}
