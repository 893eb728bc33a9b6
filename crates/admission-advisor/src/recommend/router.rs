use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::intake::{
    IntakeError, RecommendationRequest, RequiredExamsRequest, FOREIGN_LANGUAGE_CHOICES,
};
use super::service::RecommendationService;

/// Router builder exposing the recommendation, required-exams, and catalog endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommendations_handler))
        .route("/api/v1/required-exams", post(required_exams_handler))
        .route("/api/v1/filters", get(filters_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .with_state(service)
}

fn unprocessable(error: IntakeError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

pub(crate) async fn recommendations_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    match service.recommend(&request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => unprocessable(error),
    }
}

pub(crate) async fn required_exams_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<RequiredExamsRequest>,
) -> Response {
    match service.required_exams(&request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => unprocessable(error),
    }
}

pub(crate) async fn filters_handler(State(service): State<Arc<RecommendationService>>) -> Response {
    let options = service.filter_options();
    let payload = json!({
        "cities": options.cities,
        "institution_types": options.institution_types,
        "categories": options.categories,
        "teaching_languages": options.teaching_languages,
        "foreign_languages": FOREIGN_LANGUAGE_CHOICES,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn catalog_handler(State(service): State<Arc<RecommendationService>>) -> Response {
    let summary = service.catalog().summary();
    (StatusCode::OK, axum::Json(summary)).into_response()
}
