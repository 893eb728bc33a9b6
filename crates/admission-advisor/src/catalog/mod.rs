//! Program catalog ingestion and the immutable in-memory catalog.

mod domain;
mod mapping;
pub(crate) mod normalizer;
mod parser;

pub use domain::{
    ExamSlot, InstitutionType, ProgramDraft, ProgramRecord, MAX_ELECTIVE_SLOTS,
    MAX_MANDATORY_SLOTS, PUBLIC_TUITION,
};
pub use mapping::DEFAULT_CITY;

use crate::classifier::Category;
use crate::scoring::is_foreign_language_exam;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Fatal catalog ingestion failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read program catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid program catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("program catalog is missing required column '{column}'")]
    MissingColumn { column: String },
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let programs = parser::parse_programs(reader)?
            .into_iter()
            .map(ProgramDraft::into_record)
            .collect();
        let catalog = Catalog::from_programs(programs);

        let summary = catalog.summary();
        info!(
            programs = summary.total_programs,
            universities = summary.universities,
            public = summary.public_programs,
            private = summary.private_programs,
            "program catalog loaded"
        );

        Ok(catalog)
    }
}

/// Read-only collection of normalized programs, shared by reference across requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    programs: Vec<ProgramRecord>,
    foreign_language_slots: BTreeSet<String>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn from_programs(programs: Vec<ProgramRecord>) -> Self {
        let foreign_language_slots = programs
            .iter()
            .flat_map(|program| program.mandatory_exams.iter().chain(&program.elective_exams))
            .map(|slot| slot.exam_name.as_str())
            .filter(|name| is_foreign_language_exam(name))
            .map(str::to_string)
            .collect();

        Self {
            programs,
            foreign_language_slots,
            loaded_at: Utc::now(),
        }
    }

    pub fn programs(&self) -> &[ProgramRecord] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Every foreign-language slot name used by some program, annotated or not.
    pub fn foreign_language_slots(&self) -> &BTreeSet<String> {
        &self.foreign_language_slots
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn find(&self, program_code: &str) -> Option<&ProgramRecord> {
        self.programs
            .iter()
            .find(|program| program.program_code == program_code)
    }

    pub fn summary(&self) -> CatalogSummary {
        let universities = self
            .programs
            .iter()
            .map(|program| program.university_code)
            .collect::<HashSet<_>>()
            .len();
        let public_programs = self
            .programs
            .iter()
            .filter(|program| program.institution_type == InstitutionType::Public)
            .count();

        CatalogSummary {
            total_programs: self.programs.len(),
            universities,
            public_programs,
            private_programs: self.programs.len() - public_programs,
            loaded_at: self.loaded_at,
        }
    }

    /// Distinct values present in the catalog for each filterable attribute.
    pub fn filter_options(&self) -> FilterOptions {
        let mut cities = BTreeSet::new();
        let mut institution_types = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut teaching_languages = BTreeSet::new();

        for program in &self.programs {
            cities.insert(program.city.clone());
            institution_types.insert(program.institution_type);
            categories.insert(program.category);
            if !program.teaching_language.is_empty() {
                teaching_languages.insert(program.teaching_language.clone());
            }
        }

        FilterOptions {
            cities: cities.into_iter().collect(),
            institution_types: institution_types.into_iter().collect(),
            categories: categories.into_iter().collect(),
            teaching_languages: teaching_languages.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub total_programs: usize,
    pub universities: usize,
    pub public_programs: usize,
    pub private_programs: usize,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub institution_types: Vec<InstitutionType>,
    pub categories: Vec<Category>,
    pub teaching_languages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV: &str = "program_code,university_code,program_name,teaching_language,annual_tuition,total_places,credits,special_note\n\
0101,1,სამართალი,ქართული,2250,120,240,\n\
0102,114,Business Administration,ინგლისური,5500,40,240,English track\n\
0103,9,ფიზიკა,ქართული,2250,25,240,\n";

    #[test]
    fn loader_derives_summary_counts() {
        let catalog = CatalogLoader::from_reader(Cursor::new(CSV)).expect("catalog loads");
        let summary = catalog.summary();

        assert_eq!(summary.total_programs, 3);
        assert_eq!(summary.universities, 3);
        assert_eq!(summary.public_programs, 2);
        assert_eq!(summary.private_programs, 1);
    }

    #[test]
    fn filter_options_are_distinct_and_sorted() {
        let catalog = CatalogLoader::from_reader(Cursor::new(CSV)).expect("catalog loads");
        let options = catalog.filter_options();

        assert_eq!(options.cities, vec!["ბათუმი", "თბილისი", "ქუთაისი"]);
        assert_eq!(
            options.institution_types,
            vec![InstitutionType::Public, InstitutionType::Private]
        );
        assert_eq!(
            options.categories,
            vec![
                Category::BusinessAndEconomics,
                Category::Law,
                Category::NaturalSciences
            ]
        );
        assert_eq!(options.teaching_languages, vec!["ინგლისური", "ქართული"]);
    }

    #[test]
    fn foreign_language_slots_collect_every_annotation() {
        let program = |mandatory: Vec<ExamSlot>, elective: Vec<ExamSlot>| {
            ProgramDraft {
                program_code: "0201".to_string(),
                mandatory_exams: mandatory,
                elective_exams: elective,
                ..ProgramDraft::default()
            }
            .into_record()
        };
        let catalog = Catalog::from_programs(vec![
            program(
                vec![ExamSlot::new("უცხოური ენა (ინგ.; გერ.)", 1.0, 30.0)],
                vec![ExamSlot::new("მათემატიკა", 1.0, 0.0)],
            ),
            program(
                vec![ExamSlot::new("უცხოური ენა", 1.0, 0.0)],
                vec![ExamSlot::new("უცხოური ენა (ფრან.)", 1.0, 0.0)],
            ),
        ]);

        let slots: Vec<&str> = catalog
            .foreign_language_slots()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(
            slots,
            vec!["უცხოური ენა", "უცხოური ენა (ინგ.; გერ.)", "უცხოური ენა (ფრან.)"]
        );
    }

    #[test]
    fn find_looks_up_by_program_code() {
        let catalog = CatalogLoader::from_reader(Cursor::new(CSV)).expect("catalog loads");
        let program = catalog.find("0102").expect("program present");
        assert_eq!(program.special_note.as_deref(), Some("English track"));
        assert!(catalog.find("9999").is_none());
    }

    #[test]
    fn from_path_propagates_io_errors() {
        match CatalogLoader::from_path("./does-not-exist.csv") {
            Err(CatalogError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
