//! Unified application error type.
//! All modules (model, auth, sheets, pinhash, api) return PortalError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Data shape
    // ---------------------------
    #[error("Sheet is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Records without a usable PIN: {}", rows.join(", "))]
    RowsWithoutPin { rows: Vec<String> },

    #[error("Sheet has no header row")]
    EmptyTable,

    // ---------------------------
    // Authentication
    // ---------------------------
    // One variant for every rejection reason so responses cannot leak
    // which part of the credential was wrong.
    #[error("Invalid email or PIN")]
    AuthFailed,

    // ---------------------------
    // Upstream store
    // ---------------------------
    #[error("Upstream store error: {0}")]
    Upstream(String),

    // ---------------------------
    // IO / CSV
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type PortalResult<T> = Result<T, PortalError>;
