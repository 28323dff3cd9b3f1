use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{get, App, HttpServer, Responder};
use dotenvy::dotenv;
use std::sync::Arc;

use dojo_portal::api::AppState;
use dojo_portal::config::Config;
use dojo_portal::routes;
use dojo_portal::sheets::google::GoogleSheets;

use tracing::info;
use tracing_appender::rolling;

#[get("/")]
async fn index() -> impl Responder {
    "Dojo Member Portal"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Config problems are fatal before we bind anything.
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let store = Arc::new(GoogleSheets::from_key_file(&config.service_account_path)?);

    let server_addr = config.server_addr.clone();
    let state = Data::new(AppState::new(config, store));

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(state.clone())
            .service(index)
            .configure(routes::configure)
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
