use crate::api::{balance, request};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/portal")
            .service(web::resource("/balance").route(web::post().to(balance::view_balance)))
            .service(web::resource("/request").route(web::post().to(request::submit_request))),
    );
}
