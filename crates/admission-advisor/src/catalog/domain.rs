use serde::{Deserialize, Serialize};

use super::mapping::city_for_university;
use super::normalizer::{is_data_artifact, normalize_exam_name};
use crate::classifier::{classify, Category};

/// Annual tuition charged by every state-funded program.
pub const PUBLIC_TUITION: f64 = 2250.0;

pub const MAX_MANDATORY_SLOTS: usize = 4;
pub const MAX_ELECTIVE_SLOTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionType {
    Public,
    Private,
}

impl InstitutionType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Public, Self::Private]
    }

    pub fn from_tuition(annual_tuition: f64) -> Self {
        if (annual_tuition - PUBLIC_TUITION).abs() < f64::EPSILON {
            Self::Public
        } else {
            Self::Private
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "სახელმწიფო",
            Self::Private => "კერძო",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(trimmed) || kind.label() == trimmed)
    }
}

/// One exam requirement of a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamSlot {
    pub exam_name: String,
    pub coefficient: f64,
    pub minimum_percentage: f64,
}

impl ExamSlot {
    pub fn new(exam_name: impl AsRef<str>, coefficient: f64, minimum_percentage: f64) -> Self {
        Self {
            exam_name: normalize_exam_name(exam_name.as_ref()),
            coefficient: sanitize(coefficient, f64::MAX),
            minimum_percentage: sanitize(minimum_percentage, 100.0),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.exam_name.is_empty()
    }
}

fn sanitize(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Source-level description of a program before derived attributes are resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgramDraft {
    pub program_code: String,
    pub university_code: u32,
    pub program_name: String,
    pub teaching_language: String,
    pub annual_tuition: f64,
    pub total_places: u32,
    pub credits: u32,
    pub accreditation_status: String,
    pub special_note: Option<String>,
    pub mandatory_exams: Vec<ExamSlot>,
    pub elective_exams: Vec<ExamSlot>,
}

impl ProgramDraft {
    /// Resolves institution type, city, and category and drops inactive slots.
    pub fn into_record(self) -> ProgramRecord {
        let program_name = self.program_name.trim().to_string();
        let institution_type = InstitutionType::from_tuition(self.annual_tuition);
        let city = city_for_university(self.university_code).to_string();
        let category = classify(&program_name, self.university_code);

        let mandatory_exams = self
            .mandatory_exams
            .into_iter()
            .filter(|slot| slot.is_active() && !is_data_artifact(&slot.exam_name))
            .take(MAX_MANDATORY_SLOTS)
            .collect();
        let elective_exams = self
            .elective_exams
            .into_iter()
            .filter(|slot| slot.is_active() && !is_data_artifact(&slot.exam_name))
            .take(MAX_ELECTIVE_SLOTS)
            .collect();

        ProgramRecord {
            program_code: self.program_code.trim().to_string(),
            university_code: self.university_code,
            program_name,
            teaching_language: self.teaching_language.trim().to_string(),
            annual_tuition: self.annual_tuition,
            total_places: self.total_places,
            credits: self.credits,
            accreditation_status: self.accreditation_status.trim().to_string(),
            special_note: self
                .special_note
                .map(|note| note.trim().to_string())
                .filter(|note| !note.is_empty()),
            institution_type,
            city,
            category,
            mandatory_exams,
            elective_exams,
        }
    }
}

/// A normalized catalog entry. Only the catalog holds these and nothing mutates them after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramRecord {
    pub program_code: String,
    pub university_code: u32,
    pub program_name: String,
    pub teaching_language: String,
    pub annual_tuition: f64,
    pub total_places: u32,
    pub credits: u32,
    pub accreditation_status: String,
    pub special_note: Option<String>,
    pub institution_type: InstitutionType,
    pub city: String,
    pub category: Category,
    pub mandatory_exams: Vec<ExamSlot>,
    pub elective_exams: Vec<ExamSlot>,
}
