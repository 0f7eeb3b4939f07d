//! Free-text quality heuristics for the claim explanation

/// Terms that signal a substantive, measurable explanation.
/// Matched case-insensitively as substrings; submissions are written in
/// Indonesian, so the list mixes Indonesian terms with common units.
const KEY_TERMS: &[&str] = &[
    "baseline",
    "pengukuran",
    "kalkulasi",
    "metode",
    "periode",
    "tahun",
    "bulan",
    "kg",
    "ton",
];

/// Outcome of analyzing the details text
#[derive(Debug, Clone, Copy)]
pub struct DetailQuality {
    /// Too short or too few key terms to be a useful explanation
    pub is_vague: bool,
    /// Additive confidence bonus, capped at 0.15
    pub confidence_boost: f64,
    pub word_count: usize,
    pub key_term_count: usize,
}

/// Score the quality of a free-text explanation.
///
/// Longer texts that name measurement terms (baseline, periods, units) earn a
/// small confidence boost; anything under 20 words or with fewer than 2 key
/// terms is considered vague.
pub fn analyze_details(details: &str) -> DetailQuality {
    let word_count = details.split_whitespace().count();

    let details_lower = details.to_lowercase();
    let key_term_count = KEY_TERMS
        .iter()
        .filter(|term| details_lower.contains(*term))
        .count();

    let is_vague = word_count < 20 || key_term_count < 2;
    let confidence_boost = f64::min(
        0.15,
        (word_count as f64 / 100.0) * 0.1 + (key_term_count as f64 / KEY_TERMS.len() as f64) * 0.05,
    );

    DetailQuality {
        is_vague,
        confidence_boost,
        word_count,
        key_term_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_vague() {
        let quality = analyze_details("Banyak sampah didaur ulang");
        assert!(quality.is_vague);
        assert_eq!(quality.word_count, 4);
        assert_eq!(quality.key_term_count, 0);
    }

    #[test]
    fn test_key_terms_counted_case_insensitively() {
        let quality = analyze_details("Baseline 2023: pengukuran per TAHUN dalam KG");
        assert_eq!(quality.key_term_count, 4);
    }

    #[test]
    fn test_substantive_text_not_vague() {
        let text = "Kami melakukan pengukuran baseline pada awal tahun dengan metode \
                    timbangan digital. Selama periode dua belas bulan kami mencatat \
                    setiap kg sampah yang didaur ulang dan menghitung kalkulasi emisi.";
        let quality = analyze_details(text);
        assert!(!quality.is_vague);
        assert!(quality.word_count >= 20);
        assert!(quality.key_term_count >= 2);
    }

    #[test]
    fn test_boost_is_capped() {
        let long_text = "pengukuran baseline kalkulasi metode periode tahun bulan kg ton "
            .repeat(30);
        let quality = analyze_details(&long_text);
        assert_eq!(quality.confidence_boost, 0.15);
    }

    #[test]
    fn test_boost_formula() {
        // 19 words, 2 key terms: 0.019 + 2/9 * 0.05
        let text = "Kami mendaur ulang 250kg sampah kain per tahun. Dengan faktor emisi \
                    2kg CO2/kg sampah, total pengurangan adalah 500kg CO2.";
        let quality = analyze_details(text);
        assert_eq!(quality.word_count, 19);
        assert_eq!(quality.key_term_count, 2);
        let expected = 0.19 * 0.1 + (2.0 / 9.0) * 0.05;
        assert!((quality.confidence_boost - expected).abs() < 1e-12);
    }
}
