use serde::Serialize;

use crate::catalog::{InstitutionType, ProgramRecord};
use crate::classifier::Category;
use crate::requirements::RequiredExams;
use crate::scoring::ScoreResult;

/// Display fields of a program carried alongside its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramSummary {
    pub program_code: String,
    pub university_code: u32,
    pub program_name: String,
    pub city: String,
    pub institution_type: InstitutionType,
    pub category: Category,
    pub teaching_language: String,
    pub annual_tuition: f64,
    pub total_places: u32,
    pub credits: u32,
    pub special_note: Option<String>,
}

impl From<&ProgramRecord> for ProgramSummary {
    fn from(program: &ProgramRecord) -> Self {
        Self {
            program_code: program.program_code.clone(),
            university_code: program.university_code,
            program_name: program.program_name.clone(),
            city: program.city.clone(),
            institution_type: program.institution_type,
            category: program.category,
            teaching_language: program.teaching_language.clone(),
            annual_tuition: program.annual_tuition,
            total_places: program.total_places,
            credits: program.credits,
            special_note: program.special_note.clone(),
        }
    }
}

/// One entry of a recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProgram {
    #[serde(flatten)]
    pub program: ProgramSummary,
    #[serde(flatten)]
    pub score: ScoreResult,
    pub admission_chance_label: &'static str,
    pub message: String,
}

impl RankedProgram {
    pub fn new(program: &ProgramRecord, score: ScoreResult) -> Self {
        let message = if score.meets_requirements() {
            format!("{:.1}% compatibility", score.compatibility_percent)
        } else {
            score.rationale()
        };

        Self {
            program: ProgramSummary::from(program),
            admission_chance_label: score.admission_chance.label(),
            score,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationsView {
    pub total_found: usize,
    pub recommendations: Vec<RankedProgram>,
}

/// Form-facing listing of exams for the programs a filter selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredExamsView {
    pub programs_found: usize,
    pub mandatory_exams: Vec<String>,
    pub elective_exams: Vec<String>,
}

impl RequiredExamsView {
    /// Longest elective list a form is expected to render.
    pub const MAX_ELECTIVES_LISTED: usize = 15;

    pub fn new(programs_found: usize, exams: RequiredExams) -> Self {
        Self {
            programs_found,
            mandatory_exams: exams.mandatory_core.into_iter().collect(),
            elective_exams: exams
                .elective
                .into_iter()
                .take(Self::MAX_ELECTIVES_LISTED)
                .collect(),
        }
    }
}
