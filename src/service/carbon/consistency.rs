//! Cross-check between the declared calculation method and the explanation

/// Outcome of the method/details consistency check
#[derive(Debug, Clone)]
pub struct MethodConsistency {
    pub is_consistent: bool,
    pub message: String,
    pub suggestion: String,
}

impl MethodConsistency {
    fn consistent() -> Self {
        Self {
            is_consistent: true,
            message: String::new(),
            suggestion: String::new(),
        }
    }

    fn inconsistent(message: &str, suggestion: &str) -> Self {
        Self {
            is_consistent: false,
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// Check whether the details text plausibly matches the declared method.
///
/// Each known method has a small vocabulary the explanation should mention
/// (case-insensitive substring match). `other` and unrecognized methods pass
/// unconditionally; a missing explanation fails for the three specific methods.
pub fn validate_method_consistency(method: &str, details: Option<&str>) -> MethodConsistency {
    let details_lower = details.map(str::to_lowercase);
    let mentions =
        |terms: &[&str]| -> bool {
            details_lower
                .as_deref()
                .is_some_and(|d| terms.iter().any(|t| d.contains(t)))
        };

    match method {
        "waste_diverted" => {
            if mentions(&["sampah", "waste"]) {
                MethodConsistency::consistent()
            } else {
                MethodConsistency::inconsistent(
                    "Metode \"waste_diverted\" tidak konsisten dengan penjelasan",
                    "Jelaskan berapa kg sampah yang didaur ulang dan bagaimana menghitung CO2",
                )
            }
        }
        "energy_saved" => {
            if mentions(&["listrik", "energy", "kwh"]) {
                MethodConsistency::consistent()
            } else {
                MethodConsistency::inconsistent(
                    "Metode \"energy_saved\" tidak konsisten dengan penjelasan",
                    "Jelaskan berapa kWh listrik yang dihemat dan bagaimana menghitung CO2",
                )
            }
        }
        "transport_reduced" => {
            if mentions(&["transport", "jarak", "km"]) {
                MethodConsistency::consistent()
            } else {
                MethodConsistency::inconsistent(
                    "Metode \"transport_reduced\" tidak konsisten dengan penjelasan",
                    "Jelaskan berapa km transportasi yang dikurangi dan bagaimana menghitung CO2",
                )
            }
        }
        _ => MethodConsistency::consistent(),
    }
}
