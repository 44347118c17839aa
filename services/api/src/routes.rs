use crate::infra::{AppState, PreferenceHandle};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use civic_eligibility::checker::{checker_router, AccessibilityPreferences, CheckerState};
use serde_json::json;
use std::sync::Arc;

/// Mount the checker endpoints together with the service plumbing routes.
pub(crate) fn with_checker_routes(checker: Arc<CheckerState>) -> axum::Router {
    checker_router(checker)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/preferences",
            axum::routing::get(get_preferences_endpoint).put(put_preferences_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn get_preferences_endpoint(
    Extension(preferences): Extension<PreferenceHandle>,
) -> Json<AccessibilityPreferences> {
    Json(preferences.current())
}

/// Replace the stored preferences. Persistence is fire-and-forget: a failed
/// write is logged inside the handle and never fails the request.
pub(crate) async fn put_preferences_endpoint(
    Extension(preferences): Extension<PreferenceHandle>,
    Json(payload): Json<AccessibilityPreferences>,
) -> Json<AccessibilityPreferences> {
    Json(preferences.update(payload))
}
