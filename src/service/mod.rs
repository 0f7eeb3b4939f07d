pub mod carbon;
pub mod evidence;
pub mod screening;

pub use carbon::validate_carbon_claim;
pub use evidence::analyze_evidence;
pub use screening::screen;
