use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Locale, RoleId};
use super::engine::AssessmentSubmission;
use super::service::{AssessmentService, AssessmentServiceError};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionQuery {
    #[serde(default)]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) variant: Option<String>,
}

/// Router builder exposing the question set and scoring endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/results", post(results_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<AssessmentService>>,
    Query(query): Query<QuestionQuery>,
) -> Response {
    let role = RoleId::or_general(query.role);
    let locale = query
        .locale
        .as_deref()
        .map(Locale::from_code)
        .unwrap_or_default();

    match service.questions(&role, locale, query.variant.as_deref()) {
        Ok(set) => (StatusCode::OK, axum::Json(set)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response {
    match service.assess(&submission) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match error {
        AssessmentServiceError::UnknownVariant(_) => StatusCode::BAD_REQUEST,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
