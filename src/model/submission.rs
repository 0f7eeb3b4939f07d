use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A general sustainability submission as reported by an UMKM.
///
/// Every field is optional: absence means the claim was not made, which is
/// different from claiming zero.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionClaim {
    pub resource_reduction_percentage: Option<f64>,
    pub resource_reduction_details: Option<String>,
    pub reuse_frequency: Option<String>,
    pub reuse_details: Option<String>,
    pub recycle_type: Option<String>,
    pub recycle_details: Option<String>,
    pub product_lifespan_years: Option<f64>,
    pub product_repairability: Option<bool>,
    pub product_details: Option<String>,
    pub process_efficiency_improvement: Option<f64>,
    pub process_details: Option<String>,
    /// Self-assessed documentation level (e.g. "minimal", "partial", "complete")
    pub documentation_level: Option<String>,
    pub traceability_system: Option<bool>,
    pub carbon_reduction_kg: Option<f64>,
    pub carbon_calculation_method: Option<String>,
    pub local_employees: Option<i64>,
    pub income_stability: Option<String>,
    /// Identifiers of uploaded evidence files
    pub evidence_files: Option<Vec<String>>,
}

/// Verdict of the submission screener.
///
/// `flags` and `suggestions` keep the order in which the checks fired;
/// callers display them in sequence.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub is_valid: bool,
    /// Heuristic trust score, clamped to [0, 1]
    pub confidence: f64,
    pub flags: Vec<String>,
    pub suggestions: Vec<String>,
    /// Per-category score deltas applied as a side effect of screening
    pub adjusted_scores: HashMap<String, f64>,
}
