//! REST API endpoint for evidence analysis (stub)

use actix_web::{post, web, HttpResponse, Responder};

use crate::service;

/// Analyze evidence files
///
/// OCR and document detection are not implemented; the endpoint accepts a
/// list of file URLs and returns a fixed placeholder payload.
#[utoipa::path(
    post,
    path = "/analyze-evidence",
    request_body = Vec<String>,
    responses(
        (status = 200, description = "Analysis stub", body = crate::service::evidence::EvidenceAnalysis),
        (status = 400, description = "Malformed request body")
    ),
    tag = "evidence"
)]
#[post("/analyze-evidence")]
pub async fn analyze_evidence(file_urls: web::Json<Vec<String>>) -> impl Responder {
    HttpResponse::Ok().json(service::analyze_evidence(&file_urls))
}

/// Configure evidence routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_evidence);
}
