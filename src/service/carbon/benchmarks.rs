//! Industry benchmark and method-factor tables
//!
//! Read-only, process-wide constants. Lookups never fail: unknown sectors and
//! scales fall back to defaults so validation degrades instead of erroring.

/// Expected carbon reduction range for one (sector, scale) pair, kg CO2/year
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub min: f64,
    pub max: f64,
    pub typical: f64,
}

/// Fallback sector for unknown sectors
pub const DEFAULT_SECTOR: &str = "Kerajinan";

/// Fallback scale for unknown scales
pub const DEFAULT_SCALE: &str = "small";

/// Known business scales, in ascending size order
pub const SCALES: &[&str] = &["small", "medium", "large"];

/// Industry benchmarks per sector: [small, medium, large]
const BENCHMARKS: &[(&str, [Benchmark; 3])] = &[
    (
        "Fashion",
        [
            Benchmark { min: 100.0, max: 2000.0, typical: 500.0 },
            Benchmark { min: 500.0, max: 5000.0, typical: 2000.0 },
            Benchmark { min: 2000.0, max: 20000.0, typical: 8000.0 },
        ],
    ),
    (
        "F&B",
        [
            Benchmark { min: 200.0, max: 3000.0, typical: 800.0 },
            Benchmark { min: 1000.0, max: 8000.0, typical: 3000.0 },
            Benchmark { min: 3000.0, max: 30000.0, typical: 12000.0 },
        ],
    ),
    (
        "Kerajinan",
        [
            Benchmark { min: 50.0, max: 1500.0, typical: 400.0 },
            Benchmark { min: 300.0, max: 4000.0, typical: 1500.0 },
            Benchmark { min: 1500.0, max: 15000.0, typical: 6000.0 },
        ],
    ),
    (
        "Pertanian",
        [
            Benchmark { min: 500.0, max: 5000.0, typical: 2000.0 },
            Benchmark { min: 2000.0, max: 15000.0, typical: 6000.0 },
            Benchmark { min: 5000.0, max: 50000.0, typical: 20000.0 },
        ],
    ),
    (
        "Manufaktur",
        [
            Benchmark { min: 1000.0, max: 10000.0, typical: 4000.0 },
            Benchmark { min: 5000.0, max: 30000.0, typical: 12000.0 },
            Benchmark { min: 10000.0, max: 100000.0, typical: 40000.0 },
        ],
    ),
];

/// Unit-conversion factors per calculation method (kg CO2 per unit)
const METHOD_FACTORS: &[(&str, f64)] = &[
    ("waste_diverted", 2.0),   // kg waste = ~2 kg CO2
    ("energy_saved", 0.5),     // kWh = ~0.5 kg CO2
    ("transport_reduced", 0.2), // km = ~0.2 kg CO2
    ("other", 1.0),
];

/// Whether the sector exists in the benchmark table
pub fn sector_known(sector: &str) -> bool {
    BENCHMARKS.iter().any(|(s, _)| *s == sector)
}

/// Whether the scale is one of small/medium/large
pub fn scale_known(scale: &str) -> bool {
    SCALES.contains(&scale)
}

/// Benchmark for a known (sector, scale) pair.
///
/// Callers resolve unknown values to [`DEFAULT_SECTOR`]/[`DEFAULT_SCALE`]
/// before looking up, so this is infallible in practice; unexpected input
/// still lands on the default sector's small-scale entry.
pub fn benchmark_for(sector: &str, scale: &str) -> Benchmark {
    let scale_idx = SCALES.iter().position(|s| *s == scale).unwrap_or(0);
    BENCHMARKS
        .iter()
        .find(|(s, _)| *s == sector)
        .or_else(|| BENCHMARKS.iter().find(|(s, _)| *s == DEFAULT_SECTOR))
        .map(|(_, by_scale)| by_scale[scale_idx])
        .unwrap_or(Benchmark { min: 50.0, max: 1500.0, typical: 400.0 })
}

/// Conversion factor for a calculation method, `None` for unrecognized methods
pub fn method_factor(method: &str) -> Option<f64> {
    METHOD_FACTORS
        .iter()
        .find(|(m, _)| *m == method)
        .map(|(_, f)| *f)
}
