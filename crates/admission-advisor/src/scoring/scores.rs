use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::normalizer::normalize_exam_name;

/// Applicant's raw exam percentages keyed by exam name.
///
/// Keys are whitespace-normalized on insert so they line up with catalog slot names.
/// No aliasing happens here: a foreign-language result must already be present under
/// every variant key a program may reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamScores(BTreeMap<String, f64>);

impl ExamScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, exam_name: impl AsRef<str>, raw_score: f64) -> Option<f64> {
        self.0.insert(normalize_exam_name(exam_name.as_ref()), raw_score)
    }

    pub fn remove(&mut self, exam_name: &str) -> Option<f64> {
        self.0.remove(&normalize_exam_name(exam_name))
    }

    pub fn get(&self, exam_name: &str) -> Option<f64> {
        self.0.get(exam_name).copied()
    }

    pub fn contains(&self, exam_name: &str) -> bool {
        self.0.contains_key(exam_name)
    }

    pub fn exam_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for ExamScores {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut scores = Self::new();
        for (exam_name, raw_score) in iter {
            scores.insert(exam_name, raw_score);
        }
        scores
    }
}
