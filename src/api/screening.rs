//! REST API endpoint for submission screening

use actix_web::{post, web, HttpResponse, Responder};

use crate::model::SubmissionClaim;
use crate::service;

/// Screen a sustainability submission
///
/// Applies cross-field heuristic checks and returns a validity verdict with
/// confidence, flags, suggestions and per-category score adjustments.
#[utoipa::path(
    post,
    path = "/validate",
    request_body = SubmissionClaim,
    responses(
        (status = 200, description = "Submission screened", body = crate::model::ScreeningResult),
        (status = 400, description = "Malformed submission body")
    ),
    tag = "scoring"
)]
#[post("/validate")]
pub async fn validate_submission(claim: web::Json<SubmissionClaim>) -> impl Responder {
    let result = service::screen(&claim);
    HttpResponse::Ok().json(result)
}

/// Configure screening routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_submission);
}
