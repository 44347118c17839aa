use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::QuestionCatalog;
use super::domain::Answers;
use super::evaluation::EligibilityEngine;
use super::jurisdictions::JurisdictionDirectory;
use super::sequencer::build_effective_questions;

/// Immutable checker state shared across HTTP requests.
#[derive(Debug)]
pub struct CheckerState {
    directory: JurisdictionDirectory,
    catalog: QuestionCatalog,
}

impl CheckerState {
    pub fn new(directory: JurisdictionDirectory, catalog: QuestionCatalog) -> Self {
        Self { directory, catalog }
    }

    pub fn standard() -> Self {
        Self::new(
            JurisdictionDirectory::standard(),
            QuestionCatalog::standard(),
        )
    }
}

/// Router builder exposing the stateless checker operations: jurisdiction
/// listing, effective-question expansion, and one-shot evaluation.
pub fn checker_router(state: Arc<CheckerState>) -> Router {
    Router::new()
        .route("/api/v1/jurisdictions", get(jurisdictions_handler))
        .route(
            "/api/v1/jurisdictions/:code/questions",
            get(questions_handler),
        )
        .route("/api/v1/eligibility", post(evaluate_handler))
        .with_state(state)
}

pub(crate) async fn jurisdictions_handler(State(state): State<Arc<CheckerState>>) -> Response {
    (StatusCode::OK, axum::Json(state.directory.summaries())).into_response()
}

pub(crate) async fn questions_handler(
    State(state): State<Arc<CheckerState>>,
    Path(code): Path<String>,
) -> Response {
    match state.directory.lookup(&code) {
        Some(policy) => {
            let questions = build_effective_questions(&state.catalog, policy);
            (StatusCode::OK, axum::Json(questions)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unknown jurisdiction code '{code}'"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationRequest {
    pub(crate) jurisdiction: String,
    #[serde(default)]
    pub(crate) answers: Answers,
}

pub(crate) async fn evaluate_handler(
    State(state): State<Arc<CheckerState>>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response {
    match state.directory.lookup(&request.jurisdiction) {
        Some(policy) => {
            let verdict = EligibilityEngine::for_policy(*policy).evaluate(&request.answers);
            (StatusCode::OK, axum::Json(verdict)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unknown jurisdiction code '{}'", request.jurisdiction),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
