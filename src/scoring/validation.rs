use super::config::{ScoringConfig, ScoringWeights};

/// Allowed drift of the weight sum from 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl ScoringWeights {
    /// Check the weights, returning every problem found (not just the first).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("price", self.price),
            ("delivery", self.delivery),
            ("warranty", self.warranty),
        ] {
            if !value.is_finite() {
                errors.push(format!("scoring.weights.{}: must be a finite number", name));
            } else if value < 0.0 {
                errors.push(format!(
                    "scoring.weights.{}: must be non-negative (got {})",
                    name, value
                ));
            }
        }

        // Only meaningful once every weight is a real number
        if errors.is_empty() {
            let sum = self.price + self.delivery + self.warranty;
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                errors.push(format!("scoring.weights: must sum to 1 (got {})", sum));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    match config.weights {
        Some(ref weights) => weights.validate(),
        None => Ok(()),
    }
}
