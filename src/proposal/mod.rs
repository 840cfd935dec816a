pub mod types;

pub use types::{Contribution, ScoredResult, VendorResponse};
