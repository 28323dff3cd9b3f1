use crate::errors::{PortalError, PortalResult};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,

    /// Spreadsheet holding one row per member.
    pub members_sheet_id: String,
    /// Append-only spreadsheet of member update requests.
    pub requests_sheet_id: String,

    /// Path to the Google service-account JSON key file.
    pub service_account_path: PathBuf,

    /// Shared salt for PIN hashing. Must match the salt used by `hash_pins`.
    pub pin_salt: String,
}

fn required(name: &str) -> PortalResult<String> {
    env::var(name).map_err(|_| PortalError::Config(format!("{name} must be set")))
}

impl Config {
    pub fn from_env() -> PortalResult<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            members_sheet_id: required("MEMBERS_SHEET_ID")?,
            requests_sheet_id: required("REQUESTS_SHEET_ID")?,
            service_account_path: PathBuf::from(required("GOOGLE_SERVICE_ACCOUNT_PATH")?),
            pin_salt: required("PIN_SALT")?,
        })
    }
}
