use actix_cors::Cors;
use actix_web::{App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod service;

use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    tracing::info!("Starting CircularFund scoring service on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            // Frontend and backend call from arbitrary origins; no credentials involved
            .wrap(Cors::permissive())
            .app_data(api::error::json_config())
            .app_data(api::error::query_config())
            .configure(api::health::configure)
            .configure(api::screening::configure)
            .configure(api::carbon::configure)
            .configure(api::evidence::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
