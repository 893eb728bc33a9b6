use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{Catalog, ExamSlot, ProgramDraft, PUBLIC_TUITION};
use crate::recommend::{recommendation_router, RecommendationRequest, RecommendationService};
use crate::scoring::ScoringEngine;
use crate::{FOREIGN_LANGUAGE_EXAM, NATIVE_LANGUAGE_EXAM};

pub(super) const ENGLISH: &str = "ინგლისური ენა";
pub(super) const MATH: &str = "მათემატიკა";
pub(super) const PHYSICS: &str = "ფიზიკა";
pub(super) const HISTORY: &str = "ისტორია";

fn program(
    code: &str,
    university_code: u32,
    name: &str,
    teaching_language: &str,
    annual_tuition: f64,
    mandatory_exams: Vec<ExamSlot>,
    elective_exams: Vec<ExamSlot>,
) -> ProgramDraft {
    ProgramDraft {
        program_code: code.to_string(),
        university_code,
        program_name: name.to_string(),
        teaching_language: teaching_language.to_string(),
        annual_tuition,
        total_places: 50,
        credits: 240,
        mandatory_exams,
        elective_exams,
        ..ProgramDraft::default()
    }
}

/// Four programs: IT in Tbilisi, law in Kutaisi, private business in Batumi, physics in Tbilisi.
pub(super) fn catalog() -> Catalog {
    let drafts = vec![
        program(
            "0101",
            1,
            "კომპიუტერული მეცნიერება",
            "ქართული",
            PUBLIC_TUITION,
            vec![
                ExamSlot::new(NATIVE_LANGUAGE_EXAM, 1.0, 0.0),
                ExamSlot::new("უცხოური ენა (ინგ.)", 1.0, 0.0),
            ],
            vec![ExamSlot::new(MATH, 1.0, 0.0), ExamSlot::new(PHYSICS, 1.0, 0.0)],
        ),
        program(
            "0102",
            9,
            "სამართალი",
            "ქართული",
            PUBLIC_TUITION,
            vec![
                ExamSlot::new(NATIVE_LANGUAGE_EXAM, 2.0, 0.0),
                ExamSlot::new(FOREIGN_LANGUAGE_EXAM, 1.0, 0.0),
            ],
            vec![ExamSlot::new(HISTORY, 1.0, 0.0)],
        ),
        program(
            "0103",
            114,
            "Business Administration",
            "ინგლისური",
            5500.0,
            vec![
                ExamSlot::new(NATIVE_LANGUAGE_EXAM, 1.0, 0.0),
                ExamSlot::new(FOREIGN_LANGUAGE_EXAM, 1.0, 0.0),
            ],
            vec![ExamSlot::new(PHYSICS, 1.0, 0.0)],
        ),
        program(
            "0104",
            1,
            "ფიზიკა",
            "ქართული",
            PUBLIC_TUITION,
            vec![
                ExamSlot::new(NATIVE_LANGUAGE_EXAM, 1.0, 0.0),
                ExamSlot::new(FOREIGN_LANGUAGE_EXAM, 1.0, 0.0),
            ],
            vec![ExamSlot::new(PHYSICS, 1.0, 50.0)],
        ),
    ];

    Catalog::from_programs(drafts.into_iter().map(ProgramDraft::into_record).collect())
}

pub(super) fn build_service() -> RecommendationService {
    RecommendationService::new(Arc::new(catalog()), ScoringEngine::default(), 20)
}

pub(super) fn router() -> axum::Router {
    recommendation_router(Arc::new(build_service()))
}

/// Native 75, English 80, math 85, physics 60.
pub(super) fn request() -> RecommendationRequest {
    RecommendationRequest {
        foreign_language: Some(ENGLISH.to_string()),
        exam_scores: BTreeMap::from([
            (NATIVE_LANGUAGE_EXAM.to_string(), 75.0),
            (ENGLISH.to_string(), 80.0),
            (MATH.to_string(), 85.0),
            (PHYSICS.to_string(), 60.0),
        ]),
        ..RecommendationRequest::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
