//! Service identity and liveness endpoints

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ServiceIdentity {
    pub service: String,
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Service identity endpoint
///
/// Returns the service name and running status; used by the platform gateway
/// as a cheap reachability check.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = ServiceIdentity)
    ),
    tag = "health"
)]
#[get("/")]
pub async fn identity() -> impl Responder {
    HttpResponse::Ok().json(ServiceIdentity {
        service: "CircularFund AI Scoring".to_string(),
        status: "running".to_string(),
    })
}

/// Liveness probe endpoint
///
/// Always returns 200 OK if the service is running.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health/live")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Configure health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(identity).service(liveness);
}
