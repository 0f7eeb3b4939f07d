//! Cross-field heuristic screening of a full sustainability submission
//!
//! Simpler sibling of the carbon validator: a fixed sequence of checks over
//! the whole submission, each adding flags/suggestions against one running
//! confidence score.

use std::collections::HashMap;

use crate::model::{ScreeningResult, SubmissionClaim};

/// Base confidence before any check fires
const BASE_CONFIDENCE: f64 = 0.85;

/// Screen a submission for anomalies and missing support.
///
/// Pure and deterministic; check order is fixed and determines the order of
/// flags and suggestions in the result.
pub fn screen(claim: &SubmissionClaim) -> ScreeningResult {
    let mut flags = Vec::new();
    let mut suggestions = Vec::new();
    let mut adjusted_scores = HashMap::new();
    let mut confidence = BASE_CONFIDENCE;

    // Anomaly detection
    if claim.carbon_reduction_kg.is_some_and(|kg| kg > 5000.0) {
        flags.push("Unusually high carbon reduction claim".to_string());
        confidence -= 0.15;
        if claim.carbon_calculation_method.is_none() {
            suggestions.push("Provide detailed calculation method for carbon reduction".to_string());
        }
    }

    if claim
        .resource_reduction_percentage
        .is_some_and(|pct| pct > 50.0)
    {
        flags.push("Very high resource reduction percentage".to_string());
        confidence -= 0.1;
        if claim.resource_reduction_details.is_none() {
            suggestions.push("Add baseline data and measurement methodology".to_string());
        }
    }

    // Evidence consistency check: only fires when files were actually attached
    if claim
        .evidence_files
        .as_ref()
        .is_some_and(|files| !files.is_empty() && files.len() < 3)
    {
        suggestions.push("More evidence files recommended for higher confidence".to_string());
        confidence -= 0.05;
    }

    // Cross-validation
    if claim.traceability_system == Some(true)
        && claim.documentation_level.as_deref() == Some("minimal")
    {
        flags.push("Traceability system claimed but minimal documentation".to_string());
        adjusted_scores.insert("transparency".to_string(), -2.0);
    }

    if claim
        .process_efficiency_improvement
        .is_some_and(|pct| pct > 30.0)
        && claim.process_details.is_none()
    {
        suggestions.push("High efficiency improvement needs detailed explanation".to_string());
        adjusted_scores.insert("processEfficiency".to_string(), -3.0);
    }

    let is_valid = flags.len() < 3 && confidence > 0.5;

    tracing::debug!(
        confidence = confidence,
        is_valid = is_valid,
        flag_count = flags.len(),
        "Screened submission"
    );

    ScreeningResult {
        is_valid,
        confidence: confidence.clamp(0.0, 1.0),
        flags,
        suggestions,
        adjusted_scores,
    }
}
