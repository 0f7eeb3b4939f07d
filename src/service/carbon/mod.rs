//! Carbon claim validation against industry benchmarks
//!
//! A fixed, ordered pipeline of threshold rules over a running confidence
//! score. Rule order is part of the contract: it determines the order of
//! flags and suggestions in the result.

pub mod benchmarks;
pub mod consistency;
pub mod details;

use crate::model::{CarbonClaim, CarbonValidationResult};

use self::benchmarks::{
    benchmark_for, method_factor, scale_known, sector_known, DEFAULT_SCALE, DEFAULT_SECTOR,
};
use self::consistency::validate_method_consistency;
use self::details::analyze_details;

/// Base confidence before any rule fires
const BASE_CONFIDENCE: f64 = 0.7;

/// Below this confidence the claim is rejected outright
const CONFIDENCE_FLOOR: f64 = 0.4;

/// Validate a carbon-reduction claim.
///
/// Never fails: unknown sectors, scales and methods are flagged and
/// substituted with defaults. The returned confidence is clamped to [0, 1]
/// and rounded to 2 decimal places.
pub fn validate_carbon_claim(claim: &CarbonClaim) -> CarbonValidationResult {
    let mut flags = Vec::new();
    let mut suggestions = Vec::new();
    let mut confidence = BASE_CONFIDENCE;
    let mut is_valid = true;
    let mut adjusted_score = None;

    // 1. Resolve sector against the benchmark table
    let sector = if sector_known(&claim.sector) {
        claim.sector.as_str()
    } else {
        flags.push(format!(
            "Sektor '{}' tidak ditemukan dalam database benchmark",
            claim.sector
        ));
        confidence -= 0.2;
        DEFAULT_SECTOR
    };

    // 2. Resolve business scale
    let scale = if scale_known(&claim.business_scale) {
        claim.business_scale.as_str()
    } else {
        flags.push("Skala bisnis tidak valid".to_string());
        confidence -= 0.1;
        DEFAULT_SCALE
    };

    // 3. Benchmark for the resolved pair
    let benchmark = benchmark_for(sector, scale);
    let carbon_kg = claim.carbon_reduction_kg;

    // 4. Claim below the realistic minimum
    if carbon_kg < benchmark.min {
        flags.push(format!(
            "Klaim pengurangan karbon terlalu rendah untuk sektor {} \
             skala {}. Minimum realistis: {} kg/tahun",
            sector, scale, benchmark.min
        ));
        confidence -= 0.1;
    }

    // 5. Claim above the realistic maximum: the only rule that forces
    //    invalidity directly
    if carbon_kg > benchmark.max {
        flags.push(format!(
            "⚠️ PERINGATAN: Klaim pengurangan karbon sangat tinggi! \
             Maksimum realistis untuk {} skala {}: {} kg/tahun",
            sector, scale, benchmark.max
        ));
        confidence -= 0.3;
        is_valid = false;
        suggestions.push(
            "Verifikasi ulang perhitungan Anda. Jika benar, sertakan bukti \
             dokumentasi yang sangat detail (invoice, meteran, sertifikat)"
                .to_string(),
        );
    }

    // 6. Outlier relative to the typical value
    let typical = benchmark.typical;
    if carbon_kg > typical * 3.0 {
        flags.push(format!(
            "Klaim {:.0} kg jauh di atas rata-rata ({:.0} kg) untuk bisnis serupa",
            carbon_kg, typical
        ));
        confidence -= 0.15;
        suggestions.push(
            "Klaim Anda 3x lebih tinggi dari rata-rata. Pastikan perhitungan \
             sudah benar dan sertakan bukti yang kuat"
                .to_string(),
        );
    }

    // 7. Calculation method must be a known one
    if method_factor(&claim.calculation_method).is_none() {
        flags.push(format!(
            "Metode kalkulasi '{}' tidak dikenali",
            claim.calculation_method
        ));
        confidence -= 0.1;
        suggestions.push(
            "Gunakan metode kalkulasi standar: waste_diverted, energy_saved, \
             atau transport_reduced"
                .to_string(),
        );
    }

    // 8. Evidence sufficiency scales with how far the claim sits above typical
    let min_evidence = calculate_min_evidence(carbon_kg, typical);
    if claim.evidence_count < min_evidence {
        flags.push(format!(
            "Bukti tidak cukup. Untuk klaim {:.0} kg, minimal {} file bukti diperlukan",
            carbon_kg, min_evidence
        ));
        confidence -= 0.2;
        suggestions.push(format!(
            "Upload minimal {} bukti tambahan: invoice pembelian, meteran \
             listrik, timbangan sampah, atau sertifikat",
            min_evidence - claim.evidence_count
        ));

        // High claim with weak evidence costs scoring points too
        if carbon_kg > typical * 2.0 {
            adjusted_score = Some(-3.0);
        }
    }

    // 9. Quality of the free-text explanation
    match claim.details.as_deref() {
        Some(details) => {
            let quality = analyze_details(details);
            tracing::debug!(
                word_count = quality.word_count,
                key_term_count = quality.key_term_count,
                confidence_boost = quality.confidence_boost,
                "Analyzed claim details"
            );
            confidence += quality.confidence_boost;

            if quality.is_vague {
                suggestions.push(
                    "Penjelasan terlalu singkat. Tambahkan detail: metode pengukuran, \
                     periode waktu, baseline sebelumnya, dan cara kalkulasi"
                        .to_string(),
                );
            }
        }
        None => {
            flags.push("Tidak ada penjelasan detail".to_string());
            confidence -= 0.1;
            suggestions.push(
                "Tambahkan penjelasan detail tentang bagaimana Anda menghitung \
                 pengurangan karbon"
                    .to_string(),
            );
        }
    }

    // 10. Declared method must match the explanation
    let method_check =
        validate_method_consistency(&claim.calculation_method, claim.details.as_deref());
    if !method_check.is_consistent {
        flags.push(method_check.message);
        confidence -= 0.15;
        suggestions.push(method_check.suggestion);
    }

    // 11. Clamp, 12. floor check (one-way: never re-validates)
    confidence = confidence.clamp(0.0, 1.0);
    if confidence < CONFIDENCE_FLOOR {
        is_valid = false;
    }

    // 13. Valid but weak claims get a composite improvement suggestion
    if is_valid && confidence < 0.7 {
        suggestions.push(
            "Tingkatkan kepercayaan dengan: (1) Upload lebih banyak bukti, \
             (2) Berikan penjelasan detail, (3) Sertakan baseline data"
                .to_string(),
        );
    }

    tracing::debug!(
        sector = sector,
        scale = scale,
        carbon_kg = carbon_kg,
        confidence = confidence,
        is_valid = is_valid,
        flag_count = flags.len(),
        "Validated carbon claim"
    );

    CarbonValidationResult {
        is_valid,
        confidence: round2(confidence),
        flags,
        suggestions,
        adjusted_score,
    }
}

/// Minimum evidence files required, from the claim-to-typical ratio
fn calculate_min_evidence(claim_kg: f64, typical: f64) -> u32 {
    let ratio = claim_kg / typical;

    if ratio < 0.5 {
        1
    } else if ratio < 1.5 {
        2
    } else if ratio < 3.0 {
        4
    } else {
        6
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(
        carbon_kg: f64,
        method: &str,
        sector: &str,
        scale: &str,
        evidence: u32,
        details: Option<&str>,
    ) -> CarbonClaim {
        CarbonClaim {
            carbon_reduction_kg: carbon_kg,
            calculation_method: method.to_string(),
            sector: sector.to_string(),
            business_scale: scale.to_string(),
            evidence_count: evidence,
            details: details.map(str::to_string),
        }
    }

    #[test]
    fn test_realistic_claim() {
        let result = validate_carbon_claim(&claim(
            500.0,
            "waste_diverted",
            "Fashion",
            "small",
            3,
            Some(
                "Kami mendaur ulang 250kg sampah kain per tahun. Dengan faktor emisi \
                 2kg CO2/kg sampah, total pengurangan adalah 500kg CO2.",
            ),
        ));

        assert!(result.is_valid);
        assert!(result.confidence > 0.5);
        assert!(result.flags.is_empty());
        assert_eq!(result.confidence, 0.73);
    }

    #[test]
    fn test_unrealistic_high_claim() {
        let result = validate_carbon_claim(&claim(
            10000.0,
            "waste_diverted",
            "Fashion",
            "small",
            1,
            Some("Banyak sampah didaur ulang"),
        ));

        assert!(!result.is_valid);
        assert!(result.confidence < 0.5);
        assert!(!result.flags.is_empty());
        assert_eq!(result.adjusted_score, Some(-3.0));
    }

    #[test]
    fn test_medium_business_realistic() {
        let result = validate_carbon_claim(&claim(
            2000.0,
            "energy_saved",
            "F&B",
            "medium",
            4,
            Some(
                "Menghemat listrik 4000 kWh per tahun dengan panel surya. \
                 Faktor emisi 0.5 kg CO2/kWh = 2000 kg CO2.",
            ),
        ));

        assert!(result.is_valid);
        assert!(result.confidence > 0.7);
    }

    #[test]
    fn test_insufficient_evidence() {
        let result = validate_carbon_claim(&claim(
            5000.0,
            "waste_diverted",
            "Manufaktur",
            "small",
            1,
            None,
        ));

        assert!(result.flags.iter().any(|f| f.contains("Bukti tidak cukup")));
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn test_method_inconsistency_lowers_confidence() {
        let result = validate_carbon_claim(&claim(
            500.0,
            "energy_saved",
            "Fashion",
            "small",
            3,
            Some("Mendaur ulang sampah kain"),
        ));

        assert!(result.confidence < 0.8);
        assert!(result
            .flags
            .iter()
            .any(|f| f.contains("energy_saved") && f.contains("tidak konsisten")));
    }

    #[test]
    fn test_unknown_sector_and_scale_fall_back() {
        let result = validate_carbon_claim(&claim(
            400.0,
            "waste_diverted",
            "Teknologi",
            "enterprise",
            2,
            Some("Mendaur ulang 200kg sampah plastik per tahun untuk kalkulasi emisi"),
        ));

        // Substituted, flagged, never an error
        assert!(result
            .flags
            .iter()
            .any(|f| f.contains("Sektor 'Teknologi' tidak ditemukan")));
        assert!(result.flags.iter().any(|f| f == "Skala bisnis tidak valid"));
        assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn test_above_maximum_forces_invalid() {
        // Strong evidence and details cannot rescue a claim above the benchmark max
        let result = validate_carbon_claim(&claim(
            2500.0,
            "waste_diverted",
            "Fashion",
            "small",
            6,
            Some(
                "Kami melakukan pengukuran baseline setiap bulan dan mencatat setiap \
                 kg sampah kain yang didaur ulang selama periode satu tahun penuh \
                 dengan metode timbangan digital dan kalkulasi faktor emisi standar.",
            ),
        ));

        assert!(!result.is_valid);
        assert!(result.flags.iter().any(|f| f.contains("PERINGATAN")));
    }

    #[test]
    fn test_confidence_floor_invalidates() {
        // Unknown sector, scale and method, no details, no evidence
        let result = validate_carbon_claim(&claim(300.0, "magic", "Unknown", "huge", 0, None));

        assert!(!result.is_valid);
        assert!(result.confidence < CONFIDENCE_FLOOR);
        assert!(result.confidence >= 0.0);
    }

    #[test]
    fn test_confidence_always_in_range_and_rounded() {
        let inputs = [
            claim(0.0, "other", "Fashion", "small", 0, None),
            claim(1e9, "bogus", "Nope", "nope", 0, None),
            claim(500.0, "waste_diverted", "Fashion", "small", 10, Some("sampah kg tahun")),
        ];

        for input in &inputs {
            let result = validate_carbon_claim(input);
            assert!((0.0..=1.0).contains(&result.confidence));
            let cents = result.confidence * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9, "not 2-decimal: {}", result.confidence);
        }
    }

    #[test]
    fn test_evidence_monotonicity() {
        // Ratio 2.4 for Fashion/small: min_evidence 4, claim above 2x typical
        let short = validate_carbon_claim(&claim(
            1200.0,
            "waste_diverted",
            "Fashion",
            "small",
            1,
            Some("Mendaur ulang sampah kain setiap tahun dengan timbangan kg"),
        ));
        assert!(short.flags.iter().any(|f| f.contains("Bukti tidak cukup")));
        assert_eq!(short.adjusted_score, Some(-3.0));

        let sufficient = validate_carbon_claim(&claim(
            1200.0,
            "waste_diverted",
            "Fashion",
            "small",
            4,
            Some("Mendaur ulang sampah kain setiap tahun dengan timbangan kg"),
        ));
        assert!(!sufficient.flags.iter().any(|f| f.contains("Bukti tidak cukup")));
        assert_eq!(sufficient.adjusted_score, None);
    }

    #[test]
    fn test_determinism() {
        let input = claim(
            800.0,
            "transport_reduced",
            "Pertanian",
            "small",
            2,
            Some("Mengurangi jarak pengiriman 4000 km per tahun"),
        );
        let first = validate_carbon_claim(&input);
        let second = validate_carbon_claim(&input);

        assert_eq!(first.is_valid, second.is_valid);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.flags, second.flags);
        assert_eq!(first.suggestions, second.suggestions);
    }

    #[test]
    fn test_min_evidence_thresholds() {
        assert_eq!(calculate_min_evidence(100.0, 500.0), 1); // ratio 0.2
        assert_eq!(calculate_min_evidence(250.0, 500.0), 2); // ratio 0.5
        assert_eq!(calculate_min_evidence(700.0, 500.0), 2); // ratio 1.4
        assert_eq!(calculate_min_evidence(750.0, 500.0), 4); // ratio 1.5
        assert_eq!(calculate_min_evidence(1400.0, 500.0), 4); // ratio 2.8
        assert_eq!(calculate_min_evidence(1500.0, 500.0), 6); // ratio 3.0
    }

    #[test]
    fn test_low_confidence_valid_claim_gets_composite_suggestion() {
        // Valid but below 0.7: details absent costs 0.1
        let result = validate_carbon_claim(&claim(
            500.0,
            "other",
            "Fashion",
            "small",
            3,
            None,
        ));

        assert!(result.is_valid);
        assert!(result.confidence < 0.7);
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("Tingkatkan kepercayaan")));
    }
}
