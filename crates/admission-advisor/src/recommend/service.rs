use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use super::domain::{RankedProgram, RecommendationsView, RequiredExamsView};
use super::intake::{IntakeError, RecommendationRequest, RequiredExamsRequest};
use crate::catalog::{Catalog, FilterOptions};
use crate::filter::{filter_programs, FilterCriteria};
use crate::requirements::required_exams;
use crate::scoring::{ExamScores, ScoringEngine};

/// Filters, scores and ranks catalog programs. Pure over its inputs.
pub fn recommend(
    catalog: &Catalog,
    engine: &ScoringEngine,
    criteria: &FilterCriteria,
    scores: &ExamScores,
    top_n: usize,
) -> Vec<RankedProgram> {
    let candidates = filter_programs(catalog.programs(), criteria);
    debug!(
        catalog = catalog.len(),
        candidates = candidates.len(),
        "filtered programs for recommendation"
    );

    let mut ranked: Vec<RankedProgram> = candidates
        .into_iter()
        .map(|program| RankedProgram::new(program, engine.score(program, scores)))
        .collect();

    // Stable sort keeps catalog order among exact ties.
    ranked.sort_by(rank_order);
    ranked.truncate(top_n);

    let eligible = ranked
        .iter()
        .filter(|entry| entry.score.meets_requirements())
        .count();
    debug!(returned = ranked.len(), eligible, "ranked recommendations");

    ranked
}

/// Request-level facade over a shared catalog.
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    engine: ScoringEngine,
    default_top_n: usize,
}

impl RecommendationService {
    pub fn new(catalog: Arc<Catalog>, engine: ScoringEngine, default_top_n: usize) -> Self {
        Self {
            catalog,
            engine,
            default_top_n,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationsView, IntakeError> {
        let criteria = request.criteria()?;
        let scores = request.exam_scores_for_catalog(&self.catalog)?;
        let top_n = request.top_n()?.unwrap_or(self.default_top_n);

        let recommendations = recommend(&self.catalog, &self.engine, &criteria, &scores, top_n);
        Ok(RecommendationsView {
            total_found: recommendations.len(),
            recommendations,
        })
    }

    pub fn required_exams(
        &self,
        request: &RequiredExamsRequest,
    ) -> Result<RequiredExamsView, IntakeError> {
        let criteria = request.criteria()?;
        let programs = filter_programs(self.catalog.programs(), &criteria);
        debug!(programs = programs.len(), "aggregating required exams");

        Ok(RequiredExamsView::new(
            programs.len(),
            required_exams(programs),
        ))
    }

    pub fn filter_options(&self) -> FilterOptions {
        self.catalog.filter_options()
    }
}

/// Compatibility then competitive score, both descending.
fn rank_order(left: &RankedProgram, right: &RankedProgram) -> Ordering {
    right
        .score
        .compatibility_percent
        .total_cmp(&left.score.compatibility_percent)
        .then_with(|| {
            right
                .score
                .competitive_score
                .total_cmp(&left.score.competitive_score)
        })
}
