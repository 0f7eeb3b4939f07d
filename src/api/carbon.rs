//! REST API endpoint for carbon claim validation

use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::CarbonClaim;
use crate::service;

/// Query parameters for carbon claim validation
#[derive(Debug, Deserialize, IntoParams)]
pub struct EstimateCarbonParams {
    /// Claimed CO2 reduction in kg per year
    pub carbon_reduction_kg: f64,
    /// Calculation method (waste_diverted, energy_saved, transport_reduced, other)
    pub calculation_method: String,
    /// Business sector
    pub sector: String,
    /// Business scale (small/medium/large)
    pub business_scale: String,
    /// Number of uploaded evidence files
    pub evidence_count: u32,
    /// Free-text explanation of the calculation
    pub details: Option<String>,
}

/// Validation result plus the echoed claim parameters
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimateCarbonResponse {
    pub is_valid: bool,
    pub confidence: f64,
    pub flags: Vec<String>,
    pub suggestions: Vec<String>,
    pub adjusted_score: Option<f64>,
    #[serde(rename = "estimatedCO2Kg")]
    pub estimated_co2_kg: f64,
    pub methodology: String,
}

/// Validate a carbon reduction claim against sector benchmarks
#[utoipa::path(
    post,
    path = "/estimate-carbon",
    params(EstimateCarbonParams),
    responses(
        (status = 200, description = "Claim validated", body = EstimateCarbonResponse),
        (status = 400, description = "Malformed or missing parameters")
    ),
    tag = "scoring"
)]
#[post("/estimate-carbon")]
pub async fn estimate_carbon(params: web::Query<EstimateCarbonParams>) -> impl Responder {
    let params = params.into_inner();
    let claim = CarbonClaim {
        carbon_reduction_kg: params.carbon_reduction_kg,
        calculation_method: params.calculation_method.clone(),
        sector: params.sector,
        business_scale: params.business_scale,
        evidence_count: params.evidence_count,
        details: params.details,
    };

    let result = service::validate_carbon_claim(&claim);

    HttpResponse::Ok().json(EstimateCarbonResponse {
        is_valid: result.is_valid,
        confidence: result.confidence,
        flags: result.flags,
        suggestions: result.suggestions,
        adjusted_score: result.adjusted_score,
        estimated_co2_kg: params.carbon_reduction_kg,
        methodology: params.calculation_method,
    })
}

/// Configure carbon estimation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(estimate_carbon);
}
