use crate::api::{error_response, load_members, AppState};
use crate::auth::verify::find_member;
use crate::model::request::{UpdateRequest, STATUS_NEW};
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

#[derive(Deserialize)]
pub struct SubmitReq {
    pub email: String,
    pub pin: String,
    pub request_type: String,
    pub message: String,
}

/// POST /portal/request — authenticate, then append one row to the requests
/// sheet. Credentials are resubmitted with every request; the portal keeps no
/// session state between calls.
#[instrument(name = "portal_request", skip(state, body), fields(email = %body.email))]
pub async fn submit_request(
    state: web::Data<AppState>,
    body: web::Json<SubmitReq>,
) -> impl Responder {
    // 1. Basic validation
    if body.email.trim().is_empty() || body.pin.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Email and PIN are required"
        }));
    }
    if body.request_type.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Request type is required"
        }));
    }

    // 2. Authenticate against a fresh member snapshot
    let members = match load_members(&state).await {
        Ok(members) => members,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load members sheet");
            return error_response(&e);
        }
    };

    let member = match find_member(&members, &body.email, &body.pin, &state.config.pin_salt) {
        Ok(member) => member,
        Err(e) => {
            info!("Request rejected: authentication failed");
            return error_response(&e);
        }
    };

    // 3. Append exactly one row, Status defaulted to New
    let request = UpdateRequest::new(member, &body.request_type, &body.message);
    if let Err(e) = state
        .store
        .append_row(&state.config.requests_sheet_id, request.into_row())
        .await
    {
        tracing::error!(error = %e, member_id = %member.member_id, "Failed to append request row");
        return error_response(&e);
    }

    info!(member_id = %member.member_id, request_type = %body.request_type, "Request submitted");

    HttpResponse::Ok().json(json!({
        "message": "Request received",
        "status": STATUS_NEW
    }))
}
