use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, InstitutionType};
use crate::classifier::Category;
use crate::filter::FilterCriteria;
use crate::scoring::ExamScores;
use crate::FOREIGN_LANGUAGE_EXAM;

/// Filter values a form sends to mean "no constraint".
const UNSET_SENTINELS: &[&str] = &["", "all", "ყველა"];

/// Every key a program slot may use for the foreign-language exam.
pub const FOREIGN_LANGUAGE_VARIANTS: &[&str] = &[
    FOREIGN_LANGUAGE_EXAM,
    "უცხოური ენა (ინგ.)",
    "უცხოური ენა (გერ.)",
    "უცხოური ენა (რუს.)",
    "უცხოური ენა (ფრან.)",
    "უცხოური ენა (გერ.; ინგ.; რუს.; ფრან.)",
    "უცხოური ენა (ინგ.; რუს.; გერ.; ფრან.)",
];

/// Foreign languages an applicant may have sat.
pub const FOREIGN_LANGUAGE_CHOICES: &[&str] = &[
    "ინგლისური ენა",
    "გერმანული ენა",
    "ფრანგული ენა",
    "რუსული ენა",
];

/// Payload accepted by the recommendation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, alias = "uni_type")]
    pub institution_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub teaching_language: Option<String>,
    #[serde(default)]
    pub foreign_language: Option<String>,
    #[serde(default)]
    pub exam_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl RecommendationRequest {
    pub fn criteria(&self) -> Result<FilterCriteria, IntakeError> {
        criteria_from(
            self.city.as_deref(),
            self.institution_type.as_deref(),
            self.category.as_deref(),
            self.teaching_language.as_deref(),
        )
    }

    /// Validated scores with the chosen foreign language copied under every listed variant key.
    pub fn exam_scores(&self) -> Result<ExamScores, IntakeError> {
        self.validated_scores(std::iter::empty())
    }

    /// Like [`Self::exam_scores`], also covering every foreign-language slot `catalog` uses.
    pub fn exam_scores_for_catalog(&self, catalog: &Catalog) -> Result<ExamScores, IntakeError> {
        self.validated_scores(catalog.foreign_language_slots().iter().map(String::as_str))
    }

    fn validated_scores<'a>(
        &self,
        slot_names: impl IntoIterator<Item = &'a str>,
    ) -> Result<ExamScores, IntakeError> {
        for (exam_name, raw_score) in &self.exam_scores {
            if !raw_score.is_finite() || !(0.0..=100.0).contains(raw_score) {
                return Err(IntakeError::ScoreOutOfRange {
                    exam_name: exam_name.clone(),
                    raw_score: *raw_score,
                });
            }
        }

        let mut scores: ExamScores = self.exam_scores.iter().map(|(k, v)| (k, *v)).collect();
        if let Some(language) = unset_to_none(self.foreign_language.as_deref()) {
            expand_foreign_language(&mut scores, language, slot_names);
        }
        Ok(scores)
    }

    pub fn top_n(&self) -> Result<Option<usize>, IntakeError> {
        match self.top_n {
            Some(0) => Err(IntakeError::InvalidTopN),
            other => Ok(other),
        }
    }
}

/// Payload accepted by the required-exams endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredExamsRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, alias = "uni_type")]
    pub institution_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub teaching_language: Option<String>,
}

impl RequiredExamsRequest {
    pub fn criteria(&self) -> Result<FilterCriteria, IntakeError> {
        criteria_from(
            self.city.as_deref(),
            self.institution_type.as_deref(),
            self.category.as_deref(),
            self.teaching_language.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("unknown institution type '{0}'")]
    UnknownInstitutionType(String),
    #[error("unknown program category '{0}'")]
    UnknownCategory(String),
    #[error("score for {exam_name} must be between 0 and 100, got {raw_score}")]
    ScoreOutOfRange { exam_name: String, raw_score: f64 },
    #[error("top_n must be a positive integer")]
    InvalidTopN,
}

fn unset_to_none(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim();
    let unset = UNSET_SENTINELS
        .iter()
        .any(|sentinel| sentinel.eq_ignore_ascii_case(trimmed));
    (!unset).then_some(trimmed)
}

fn criteria_from(
    city: Option<&str>,
    institution_type: Option<&str>,
    category: Option<&str>,
    teaching_language: Option<&str>,
) -> Result<FilterCriteria, IntakeError> {
    let institution_type = unset_to_none(institution_type)
        .map(|raw| {
            InstitutionType::parse(raw)
                .ok_or_else(|| IntakeError::UnknownInstitutionType(raw.to_string()))
        })
        .transpose()?;
    let category = unset_to_none(category)
        .map(|raw| Category::parse(raw).ok_or_else(|| IntakeError::UnknownCategory(raw.to_string())))
        .transpose()?;

    Ok(FilterCriteria {
        city: unset_to_none(city).map(str::to_string),
        institution_type,
        category,
        teaching_language: unset_to_none(teaching_language).map(str::to_string),
    })
}

/// Moves the score of `language` onto the placeholder, its listed variants and `slot_names`.
/// Leaves `scores` untouched when no score was given for `language`.
pub fn expand_foreign_language<'a>(
    scores: &mut ExamScores,
    language: &str,
    slot_names: impl IntoIterator<Item = &'a str>,
) {
    let Some(raw_score) = scores.remove(language) else {
        return;
    };
    for variant in FOREIGN_LANGUAGE_VARIANTS.iter().copied().chain(slot_names) {
        scores.insert(variant, raw_score);
    }
}
