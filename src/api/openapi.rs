//! OpenAPI specification endpoints

use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CircularFund AI Scoring",
        description = "Heuristic scoring and validation for UMKM sustainability claims"
    ),
    paths(
        crate::api::health::identity,
        crate::api::health::liveness,
        crate::api::screening::validate_submission,
        crate::api::carbon::estimate_carbon,
        crate::api::evidence::analyze_evidence,
    ),
    components(schemas(
        crate::model::SubmissionClaim,
        crate::model::ScreeningResult,
        crate::model::CarbonClaim,
        crate::model::CarbonValidationResult,
        crate::api::carbon::EstimateCarbonResponse,
        crate::api::health::ServiceIdentity,
        crate::api::health::HealthStatus,
        crate::service::evidence::EvidenceAnalysis,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
