pub mod carbon;
pub mod config;
pub mod submission;

pub use carbon::{CarbonClaim, CarbonValidationResult};
pub use config::Config;
pub use submission::{ScreeningResult, SubmissionClaim};
