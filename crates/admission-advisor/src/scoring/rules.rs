use super::policy::FailedMinimum;
use super::scores::ExamScores;
use super::{ScoredExam, SlotKind};
use crate::catalog::normalizer::strip_annotation;
use crate::catalog::{ExamSlot, ProgramRecord};
use crate::{FOREIGN_LANGUAGE_EXAM, NATIVE_LANGUAGE_EXAM};

pub const MIN_SCALED_SCORE: f64 = 100.0;
pub const MAX_SCALED_SCORE: f64 = 200.0;

/// Linear 0..100 -> 100..200 mapping standing in for the national exam's scaled scores.
/// It is an approximation without norm data, not the official equating procedure.
pub fn scaled_score(raw_score: f64) -> f64 {
    if raw_score.is_nan() {
        return MIN_SCALED_SCORE;
    }
    (MIN_SCALED_SCORE + raw_score).clamp(MIN_SCALED_SCORE, MAX_SCALED_SCORE)
}

/// True for the foreign-language placeholder and any annotated variant of it.
pub fn is_foreign_language_exam(exam_name: &str) -> bool {
    strip_annotation(exam_name) == FOREIGN_LANGUAGE_EXAM
}

/// Minimum participation: native language, a foreign language, and one more subject.
pub(crate) fn check_participation(scores: &ExamScores) -> Vec<FailedMinimum> {
    let mut missing = Vec::new();

    if !scores.contains(NATIVE_LANGUAGE_EXAM) {
        missing.push(FailedMinimum::MissingNativeLanguage);
    }

    if !scores.exam_names().any(is_foreign_language_exam) {
        missing.push(FailedMinimum::MissingForeignLanguage);
    }

    let has_additional = scores
        .exam_names()
        .any(|name| name != NATIVE_LANGUAGE_EXAM && !is_foreign_language_exam(name));
    if !has_additional {
        missing.push(FailedMinimum::MissingAdditionalSubject);
    }

    missing
}

/// Running totals for one program.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    pub competitive_score: f64,
    pub total_coefficients: f64,
    pub breakdown: Vec<ScoredExam>,
    pub failed_minimums: Vec<FailedMinimum>,
}

impl Tally {
    fn count(&mut self, exam: ScoredExam) {
        self.competitive_score += exam.contribution;
        self.total_coefficients += exam.coefficient;
        self.breakdown.push(exam);
    }
}

fn scored(slot: &ExamSlot, raw_score: f64, kind: SlotKind) -> ScoredExam {
    let scaled = scaled_score(raw_score);
    ScoredExam {
        exam_name: slot.exam_name.clone(),
        kind,
        raw_score,
        scaled_score: scaled,
        coefficient: slot.coefficient,
        contribution: scaled * slot.coefficient,
    }
}

pub(crate) fn tally_program(program: &ProgramRecord, scores: &ExamScores) -> Tally {
    let mut tally = Tally::default();

    // Every mandatory slot counts, even after a failure, so the breakdown stays complete.
    for slot in program.mandatory_exams.iter().filter(|slot| slot.is_active()) {
        let raw_score = scores.get(&slot.exam_name).unwrap_or(0.0);
        if raw_score < slot.minimum_percentage {
            tally.failed_minimums.push(FailedMinimum::BelowMinimum {
                exam_name: slot.exam_name.clone(),
                raw_score,
                minimum_percentage: slot.minimum_percentage,
            });
        }
        tally.count(scored(slot, raw_score, SlotKind::Mandatory));
    }

    let electives: Vec<&ExamSlot> = program
        .elective_exams
        .iter()
        .filter(|slot| slot.is_active())
        .collect();
    if electives.is_empty() {
        return tally;
    }

    let mut best: Option<ScoredExam> = None;
    for slot in electives {
        let Some(raw_score) = scores.get(&slot.exam_name) else {
            continue;
        };
        if raw_score < slot.minimum_percentage {
            continue;
        }

        let candidate = scored(slot, raw_score, SlotKind::Elective);
        let better = best
            .as_ref()
            .map_or(true, |current| candidate.contribution > current.contribution);
        if better {
            best = Some(candidate);
        }
    }

    match best {
        Some(exam) => tally.count(exam),
        None => tally
            .failed_minimums
            .push(FailedMinimum::NoQualifyingElective),
    }

    tally
}
