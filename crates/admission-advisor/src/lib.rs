//! Program catalog matching and admission-chance ranking for standardized exam results.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod filter;
pub mod recommend;
pub mod requirements;
pub mod scoring;
pub mod telemetry;

pub use catalog::{Catalog, CatalogError, CatalogLoader, ExamSlot, InstitutionType, ProgramRecord};
pub use classifier::{classify, Category};
pub use error::AppError;
pub use filter::{filter_programs, FilterCriteria};
pub use recommend::{
    recommend, recommendation_router, RankedProgram, RecommendationRequest,
    RecommendationService, RequiredExamsRequest,
};
pub use requirements::{required_exams, RequiredExams};
pub use scoring::{AdmissionChance, ExamScores, FailedMinimum, ScoreResult, ScoringEngine};

/// Exam every program implicitly requires: Georgian language and literature.
pub const NATIVE_LANGUAGE_EXAM: &str = "ქართული ენა და ლიტერატურა";

/// Generic placeholder for whichever foreign language the applicant sat.
pub const FOREIGN_LANGUAGE_EXAM: &str = "უცხოური ენა";
