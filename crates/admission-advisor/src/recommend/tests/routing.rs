use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::recommend::router::{recommendations_handler, required_exams_handler};
use crate::recommend::{RecommendationRequest, RequiredExamsRequest};
use crate::NATIVE_LANGUAGE_EXAM;

fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn recommendations_handler_returns_ranked_list() {
    let service = Arc::new(build_service());
    let response = recommendations_handler(State(service), axum::Json(request())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total_found"], 4);
    assert_eq!(body["recommendations"][0]["program_code"], "0101");
    assert_eq!(body["recommendations"][0]["admission_chance"], "very_high");
    assert_eq!(body["recommendations"][3]["admission_chance"], "does_not_meet_minimum");
    assert_eq!(
        body["recommendations"][3]["failed_minimums"][0]["kind"],
        "no_qualifying_elective"
    );
}

#[tokio::test]
async fn recommendations_handler_rejects_unknown_category() {
    let service = Arc::new(build_service());
    let request = RecommendationRequest {
        category: Some("alchemy".to_string()),
        ..request()
    };
    let response = recommendations_handler(State(service), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "unknown program category 'alchemy'");
}

#[tokio::test]
async fn required_exams_handler_returns_form_listing() {
    let service = Arc::new(build_service());
    let request = RequiredExamsRequest {
        institution_type: Some("კერძო".to_string()),
        ..RequiredExamsRequest::default()
    };
    let response = required_exams_handler(State(service), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["programs_found"], 1);
    assert_eq!(body["elective_exams"], json!([PHYSICS]));
}

#[tokio::test]
async fn recommendations_route_accepts_form_payloads() {
    let payload = json!({
        "city": "ყველა",
        "uni_type": "ყველა",
        "category": "ყველა",
        "teaching_language": "ყველა",
        "foreign_language": ENGLISH,
        "exam_scores": {
            NATIVE_LANGUAGE_EXAM: 75,
            ENGLISH: 80,
            MATH: 85,
        },
    });

    let response = router()
        .oneshot(post_json("/api/v1/recommendations", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total_found"], 4);
    assert_eq!(body["recommendations"][0]["program_code"], "0101");
}

#[tokio::test]
async fn recommendations_route_rejects_out_of_range_scores() {
    let payload = json!({
        "exam_scores": { MATH: 140 },
    });

    let response = router()
        .oneshot(post_json("/api/v1/recommendations", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn required_exams_route_returns_empty_lists_for_no_match() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/required-exams",
            json!({ "city": "სოფ. გრემი" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["programs_found"], 0);
    assert_eq!(body["elective_exams"], json!([]));
}

#[tokio::test]
async fn filters_route_lists_catalog_values() {
    let response = router()
        .oneshot(Request::get("/api/v1/filters").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["cities"], json!(["ბათუმი", "თბილისი", "ქუთაისი"]));
    assert_eq!(body["institution_types"], json!(["public", "private"]));
    assert_eq!(body["foreign_languages"][0], ENGLISH);
}

#[tokio::test]
async fn catalog_route_reports_summary() {
    let response = router()
        .oneshot(Request::get("/api/v1/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total_programs"], 4);
    assert_eq!(body["universities"], 3);
    assert_eq!(body["private_programs"], 1);
}
