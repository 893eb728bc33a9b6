use super::config::ScoringConfig;
use super::rules::MAX_SCALED_SCORE;
use serde::{Deserialize, Serialize};

/// Coarse admission-likelihood bucket shown to the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionChance {
    DoesNotMeetMinimum,
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl AdmissionChance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DoesNotMeetMinimum => "does not meet minimum requirements",
            Self::VeryHigh => "very high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very low",
        }
    }
}

/// A violated eligibility condition, kept as data so callers can explain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailedMinimum {
    MissingNativeLanguage,
    MissingForeignLanguage,
    MissingAdditionalSubject,
    BelowMinimum {
        exam_name: String,
        raw_score: f64,
        minimum_percentage: f64,
    },
    NoQualifyingElective,
}

impl FailedMinimum {
    pub fn summary(&self) -> String {
        match self {
            FailedMinimum::MissingNativeLanguage => {
                "missing Georgian language and literature score".to_string()
            }
            FailedMinimum::MissingForeignLanguage => "missing foreign language score".to_string(),
            FailedMinimum::MissingAdditionalSubject => {
                "at least one additional subject score is required".to_string()
            }
            FailedMinimum::BelowMinimum {
                exam_name,
                raw_score,
                minimum_percentage,
            } => format!(
                "below minimum for {exam_name} ({raw_score}% < {minimum_percentage}%)"
            ),
            FailedMinimum::NoQualifyingElective => "no qualifying elective subject".to_string(),
        }
    }
}

/// Competitive score as a share of the best achievable with the same coefficients.
pub(crate) fn compatibility_percent(competitive_score: f64, total_coefficients: f64) -> f64 {
    if total_coefficients <= 0.0 || !total_coefficients.is_finite() {
        return 0.0;
    }

    let percent = competitive_score * 100.0 / (MAX_SCALED_SCORE * total_coefficients);
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub(crate) fn assign_tier(
    compatibility: f64,
    has_failed_minimum: bool,
    config: &ScoringConfig,
) -> AdmissionChance {
    if has_failed_minimum {
        AdmissionChance::DoesNotMeetMinimum
    } else if compatibility >= config.very_high_threshold {
        AdmissionChance::VeryHigh
    } else if compatibility >= config.high_threshold {
        AdmissionChance::High
    } else if compatibility >= config.medium_threshold {
        AdmissionChance::Medium
    } else if compatibility >= config.low_threshold {
        AdmissionChance::Low
    } else {
        AdmissionChance::VeryLow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatibility_is_zero_without_coefficients() {
        assert_eq!(compatibility_percent(540.0, 0.0), 0.0);
        assert_eq!(compatibility_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn compatibility_is_share_of_theoretical_maximum() {
        assert_eq!(compatibility_percent(540.0, 3.0), 90.0);
        assert_eq!(compatibility_percent(600.0, 3.0), 100.0);
        assert_eq!(compatibility_percent(300.0, 3.0), 50.0);
    }

    #[test]
    fn compatibility_stays_within_bounds() {
        assert_eq!(compatibility_percent(10_000.0, 1.0), 100.0);
        assert_eq!(compatibility_percent(-50.0, 1.0), 0.0);
    }

    #[test]
    fn tiers_follow_thresholds_in_order() {
        let config = ScoringConfig::default();
        assert_eq!(assign_tier(95.0, false, &config), AdmissionChance::VeryHigh);
        assert_eq!(assign_tier(90.0, false, &config), AdmissionChance::VeryHigh);
        assert_eq!(assign_tier(89.9, false, &config), AdmissionChance::High);
        assert_eq!(assign_tier(60.0, false, &config), AdmissionChance::Medium);
        assert_eq!(assign_tier(45.0, false, &config), AdmissionChance::Low);
        assert_eq!(assign_tier(44.9, false, &config), AdmissionChance::VeryLow);
    }

    #[test]
    fn failed_minimum_overrides_any_compatibility() {
        let config = ScoringConfig::default();
        assert_eq!(
            assign_tier(99.0, true, &config),
            AdmissionChance::DoesNotMeetMinimum
        );
    }

    #[test]
    fn below_minimum_summary_names_the_exam() {
        let failure = FailedMinimum::BelowMinimum {
            exam_name: "მათემატიკა".to_string(),
            raw_score: 35.0,
            minimum_percentage: 40.0,
        };
        assert_eq!(failure.summary(), "below minimum for მათემატიკა (35% < 40%)");
    }
}
