use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Only the criterion weights are tunable; the normalization rules are fixed.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     price: 0.5
///     delivery: 0.3
///     warranty: 0.2
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Criterion weights (default: price 0.5, delivery 0.3, warranty 0.2)
    #[serde(default)]
    pub weights: Option<ScoringWeights>,
}

impl ScoringConfig {
    /// Weights to score with: the configured ones, or the defaults.
    pub fn effective_weights(&self) -> ScoringWeights {
        self.weights.unwrap_or_default()
    }
}

/// Weight of each criterion in the total score.
///
/// The three weights must be non-negative and sum to 1 so a total stays in
/// the same 0-100 range as the sub-scores. See [`ScoringWeights::validate`].
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringWeights {
    pub price: f64,
    pub delivery: f64,
    pub warranty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            price: 0.50,
            delivery: 0.30,
            warranty: 0.20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.price, 0.5);
        assert_eq!(weights.delivery, 0.3);
        assert_eq!(weights.warranty, 0.2);
    }

    #[test]
    fn test_default_config_uses_default_weights() {
        let config = ScoringConfig::default();
        assert!(config.weights.is_none());
        assert_eq!(config.effective_weights(), ScoringWeights::default());
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig {
            weights: Some(ScoringWeights {
                price: 0.6,
                delivery: 0.2,
                warranty: 0.2,
            }),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_full_scoring_config_parse() {
        let yaml = r#"
weights:
  price: 0.4
  delivery: 0.4
  warranty: 0.2
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let weights = config.effective_weights();
        assert_eq!(weights.price, 0.4);
        assert_eq!(weights.delivery, 0.4);
        assert_eq!(weights.warranty, 0.2);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.weights.is_none());
    }

    #[test]
    fn test_partial_weights_rejected() {
        let yaml = r#"
weights:
  price: 1.0
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_weight_rejected() {
        let yaml = r#"
weights:
  price: 0.5
  delivery: 0.3
  warranty: 0.1
  support: 0.1
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
