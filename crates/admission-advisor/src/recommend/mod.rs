//! Recommendation orchestration: request intake, ranking, and the HTTP endpoints.

pub mod domain;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ProgramSummary, RankedProgram, RecommendationsView, RequiredExamsView};
pub use intake::{
    expand_foreign_language, IntakeError, RecommendationRequest, RequiredExamsRequest,
    FOREIGN_LANGUAGE_CHOICES, FOREIGN_LANGUAGE_VARIANTS,
};
pub use router::recommendation_router;
pub use service::{recommend, RecommendationService};
