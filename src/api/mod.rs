pub mod balance;
pub mod request;

use crate::config::Config;
use crate::errors::{PortalError, PortalResult};
use crate::model::member::Member;
use crate::model::table::Table;
use crate::sheets::SheetStore;
use actix_web::HttpResponse;
use serde_json::json;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SheetStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn SheetStore>) -> Self {
        Self { config, store }
    }
}

/// Loads the members sheet wholesale and resolves it into member records.
/// Every session starts here; nothing is cached between requests.
pub async fn load_members(state: &AppState) -> PortalResult<Vec<Member>> {
    let rows = state.store.read_rows(&state.config.members_sheet_id).await?;
    let table = Table::new(rows)?;
    Member::from_table(&table)
}

/// Maps the error taxonomy onto HTTP responses. Authentication failures are
/// deliberately uniform; data-shape and upstream problems carry their full
/// message so the administrator can act on them.
pub fn error_response(err: &PortalError) -> HttpResponse {
    match err {
        PortalError::AuthFailed => HttpResponse::Unauthorized().json(json!({
            "error": err.to_string()
        })),
        PortalError::MissingColumns { .. } | PortalError::EmptyTable => {
            HttpResponse::InternalServerError().json(json!({
                "error": err.to_string()
            }))
        }
        PortalError::Upstream(_) => HttpResponse::BadGateway().json(json!({
            "error": err.to_string()
        })),
        _ => HttpResponse::InternalServerError().json(json!({
            "error": "Internal Server Error"
        })),
    }
}
