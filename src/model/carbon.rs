use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A carbon-reduction claim to validate against sector benchmarks.
///
/// `sector`, `business_scale` and `calculation_method` stay open strings:
/// unknown values are flagged and substituted with defaults by the validator,
/// never rejected at the parsing layer.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CarbonClaim {
    /// Claimed CO2 reduction in kg per year
    pub carbon_reduction_kg: f64,
    /// Calculation method (waste_diverted, energy_saved, transport_reduced, other)
    pub calculation_method: String,
    /// Business sector (Fashion, F&B, Kerajinan, Pertanian, Manufaktur)
    pub sector: String,
    /// Business scale (small, medium, large)
    pub business_scale: String,
    /// Number of uploaded evidence files
    pub evidence_count: u32,
    /// Free-text explanation of how the reduction was calculated
    pub details: Option<String>,
}

/// Verdict of the carbon claim validator.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarbonValidationResult {
    pub is_valid: bool,
    /// Heuristic trust score in [0, 1], rounded to 2 decimal places
    pub confidence: f64,
    pub flags: Vec<String>,
    pub suggestions: Vec<String>,
    /// Score penalty, set only for large claims with insufficient evidence
    pub adjusted_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_camel_case_with_null_adjusted_score() {
        let result = CarbonValidationResult {
            is_valid: true,
            confidence: 0.73,
            flags: vec![],
            suggestions: vec!["Tambahkan bukti".to_string()],
            adjusted_score: None,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isValid"], true);
        assert_eq!(value["confidence"], 0.73);
        // Key stays present as null when no penalty applies
        assert!(value["adjustedScore"].is_null());
        assert_eq!(value["suggestions"][0], "Tambahkan bukti");
    }

    #[test]
    fn test_unknown_method_and_scale_still_deserialize() {
        let json = r#"{
            "carbon_reduction_kg": 500.0,
            "calculation_method": "solar_magic",
            "sector": "Teknologi",
            "business_scale": "huge",
            "evidence_count": 2
        }"#;

        let claim: CarbonClaim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.calculation_method, "solar_magic");
        assert_eq!(claim.business_scale, "huge");
        assert_eq!(claim.details, None);
    }
}
