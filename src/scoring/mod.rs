pub mod config;
pub mod engine;
pub mod validation;
pub mod warranty;

pub use config::*;
pub use engine::{score, score_with_weights, ScoringError};
pub use validation::validate_scoring;
pub use warranty::extract_warranty_years;
