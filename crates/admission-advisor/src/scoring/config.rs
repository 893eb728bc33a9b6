use serde::{Deserialize, Serialize};

/// Compatibility cut-offs (percent) for each admission-chance tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub very_high_threshold: f64,
    pub high_threshold: f64,
    pub medium_threshold: f64,
    pub low_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            very_high_threshold: 90.0,
            high_threshold: 75.0,
            medium_threshold: 60.0,
            low_threshold: 45.0,
        }
    }
}
