use serde::{Deserialize, Serialize};

use crate::catalog::{InstitutionType, ProgramRecord};
use crate::classifier::Category;

/// Narrowing constraints; `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub institution_type: Option<InstitutionType>,
    pub category: Option<Category>,
    pub teaching_language: Option<String>,
}

impl FilterCriteria {
    /// City, institution type and category compare exactly. Teaching language is a
    /// case-insensitive substring match so bilingual labels still hit.
    pub fn matches(&self, program: &ProgramRecord) -> bool {
        if let Some(city) = &self.city {
            if program.city != *city {
                return false;
            }
        }

        if let Some(kind) = self.institution_type {
            if program.institution_type != kind {
                return false;
            }
        }

        if let Some(category) = self.category {
            if program.category != category {
                return false;
            }
        }

        if let Some(language) = &self.teaching_language {
            let needle = language.to_lowercase();
            if !program.teaching_language.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }
}

/// Returns the programs satisfying every set criterion, preserving input order.
pub fn filter_programs<'a, I>(programs: I, criteria: &FilterCriteria) -> Vec<&'a ProgramRecord>
where
    I: IntoIterator<Item = &'a ProgramRecord>,
{
    programs
        .into_iter()
        .filter(|program| criteria.matches(program))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProgramDraft, PUBLIC_TUITION};

    fn program(code: &str, university_code: u32, name: &str, language: &str, tuition: f64) -> ProgramRecord {
        ProgramDraft {
            program_code: code.to_string(),
            university_code,
            program_name: name.to_string(),
            teaching_language: language.to_string(),
            annual_tuition: tuition,
            ..ProgramDraft::default()
        }
        .into_record()
    }

    fn programs() -> Vec<ProgramRecord> {
        vec![
            program("a", 1, "სამართალი", "ქართული", PUBLIC_TUITION),
            program("b", 114, "ბიზნესის ადმინისტრირება", "ინგლისური ენა", 6000.0),
            program("c", 1, "კომპიუტერული მეცნიერება", "ქართული/ინგლისური", PUBLIC_TUITION),
            program("d", 9, "მედიცინა", "English", 9000.0),
        ]
    }

    fn codes(found: &[&ProgramRecord]) -> Vec<String> {
        found.iter().map(|program| program.program_code.clone()).collect()
    }

    #[test]
    fn unconstrained_criteria_keep_everything() {
        let catalog = programs();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());
        assert_eq!(filter_programs(&catalog, &criteria).len(), catalog.len());
    }

    #[test]
    fn city_and_institution_type_compare_exactly() {
        let catalog = programs();
        let criteria = FilterCriteria {
            city: Some("თბილისი".to_string()),
            institution_type: Some(InstitutionType::Public),
            ..FilterCriteria::default()
        };
        assert_eq!(codes(&filter_programs(&catalog, &criteria)), vec!["a", "c"]);
    }

    #[test]
    fn teaching_language_matches_substrings_case_insensitively() {
        let catalog = programs();
        let criteria = FilterCriteria {
            teaching_language: Some("ინგლისური".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(codes(&filter_programs(&catalog, &criteria)), vec!["b", "c"]);

        let criteria = FilterCriteria {
            teaching_language: Some("english".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(codes(&filter_programs(&catalog, &criteria)), vec!["d"]);
    }

    #[test]
    fn category_filter_can_yield_nothing() {
        let catalog = programs();
        let criteria = FilterCriteria {
            category: Some(Category::Agriculture),
            ..FilterCriteria::default()
        };
        assert!(filter_programs(&catalog, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = programs();
        let criteria = FilterCriteria {
            city: Some("თბილისი".to_string()),
            teaching_language: Some("ქართული".to_string()),
            ..FilterCriteria::default()
        };
        let once = filter_programs(&catalog, &criteria);
        let twice = filter_programs(once.iter().copied(), &criteria);
        assert_eq!(once, twice);
    }
}
