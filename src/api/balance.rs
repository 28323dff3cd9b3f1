use crate::api::{error_response, load_members, AppState};
use crate::auth::verify::find_member;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

#[derive(Deserialize)]
pub struct BalanceReq {
    pub email: String,
    pub pin: String,
}

#[derive(Serialize)]
pub struct BalanceResponse {
    pub member_id: String,
    pub member_name: String,
    pub leave_year: String,
    pub annual_allowance: f64,
    pub leave_taken: f64,
    pub leave_balance: f64,
    pub last_updated: String,
    pub notes: String,
}

/// POST /portal/balance — authenticate and return the member's leave fields.
#[instrument(name = "portal_balance", skip(state, body), fields(email = %body.email))]
pub async fn view_balance(
    state: web::Data<AppState>,
    body: web::Json<BalanceReq>,
) -> impl Responder {
    // 1. Basic validation
    if body.email.trim().is_empty() || body.pin.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Email and PIN are required"
        }));
    }

    // 2. Fresh snapshot of the members sheet for this session
    let members = match load_members(&state).await {
        Ok(members) => members,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load members sheet");
            return error_response(&e);
        }
    };

    // 3. Credential check
    let member = match find_member(&members, &body.email, &body.pin, &state.config.pin_salt) {
        Ok(member) => member,
        Err(e) => {
            info!("Login rejected");
            return error_response(&e);
        }
    };

    info!(member_id = %member.member_id, "Login successful");

    HttpResponse::Ok().json(BalanceResponse {
        member_id: member.member_id.clone(),
        member_name: member.member_name.clone(),
        leave_year: member.leave_year.clone(),
        annual_allowance: member.annual_allowance,
        leave_taken: member.leave_taken,
        leave_balance: member.leave_balance,
        last_updated: member.last_updated.clone(),
        notes: member.notes.clone(),
    })
}
