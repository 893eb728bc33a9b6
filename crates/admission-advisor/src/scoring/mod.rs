mod config;
mod policy;
mod rules;
mod scores;

pub use config::ScoringConfig;
pub use policy::{AdmissionChance, FailedMinimum};
pub use rules::{is_foreign_language_exam, scaled_score, MAX_SCALED_SCORE, MIN_SCALED_SCORE};
pub use scores::ExamScores;

use crate::catalog::ProgramRecord;
use serde::{Deserialize, Serialize};

/// Stateless evaluator of one program against one applicant's scores.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, program: &ProgramRecord, scores: &ExamScores) -> ScoreResult {
        let missing = rules::check_participation(scores);
        if !missing.is_empty() {
            return ScoreResult {
                compatibility_percent: 0.0,
                competitive_score: 0.0,
                admission_chance: AdmissionChance::DoesNotMeetMinimum,
                failed_minimums: missing,
                scored_exam_breakdown: Vec::new(),
            };
        }

        let tally = rules::tally_program(program, scores);
        let computed =
            policy::compatibility_percent(tally.competitive_score, tally.total_coefficients);
        let admission_chance =
            policy::assign_tier(computed, !tally.failed_minimums.is_empty(), &self.config);
        let compatibility_percent = if admission_chance == AdmissionChance::DoesNotMeetMinimum {
            0.0
        } else {
            computed
        };

        ScoreResult {
            compatibility_percent,
            competitive_score: tally.competitive_score,
            admission_chance,
            failed_minimums: tally.failed_minimums,
            scored_exam_breakdown: tally.breakdown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Mandatory,
    Elective,
}

/// One exam that contributed to the competitive score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredExam {
    pub exam_name: String,
    pub kind: SlotKind,
    pub raw_score: f64,
    pub scaled_score: f64,
    pub coefficient: f64,
    pub contribution: f64,
}

/// Scoring output for a (program, scores) pair. Recomputed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub compatibility_percent: f64,
    pub competitive_score: f64,
    pub admission_chance: AdmissionChance,
    pub failed_minimums: Vec<FailedMinimum>,
    pub scored_exam_breakdown: Vec<ScoredExam>,
}

impl ScoreResult {
    pub fn meets_requirements(&self) -> bool {
        self.failed_minimums.is_empty()
    }

    /// Human-readable reasons the program is out of reach; empty when eligible.
    pub fn rationale(&self) -> String {
        self.failed_minimums
            .iter()
            .map(FailedMinimum::summary)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
