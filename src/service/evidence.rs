//! Evidence file analysis (stub)
//!
//! OCR and document detection for uploaded evidence are not implemented;
//! this returns the fixed placeholder payload the frontend expects.

use serde::Serialize;
use utoipa::ToSchema;

/// Placeholder result of evidence analysis
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceAnalysis {
    pub extracted_text: Vec<String>,
    pub detected_documents: Vec<String>,
    pub confidence: f64,
}

/// Analyze uploaded evidence files.
///
/// Performs no work on the URLs; always returns the fixed stub shape.
pub fn analyze_evidence(file_urls: &[String]) -> EvidenceAnalysis {
    tracing::debug!(file_count = file_urls.len(), "Evidence analysis requested (stub)");

    EvidenceAnalysis {
        extracted_text: Vec::new(),
        detected_documents: Vec::new(),
        confidence: 0.8,
    }
}
