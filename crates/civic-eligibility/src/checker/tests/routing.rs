use super::common::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn jurisdiction_listing_returns_the_full_table_in_order() {
    let router = standard_router();

    let response = router
        .oneshot(get("/api/v1/jurisdictions"))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let entries = payload.as_array().expect("array payload");
    assert_eq!(entries.len(), 52);
    assert_eq!(entries[0].get("code"), Some(&json!("AL")));
    assert_eq!(
        entries.last().and_then(|entry| entry.get("code")),
        Some(&json!("OTHER"))
    );
}

#[tokio::test]
async fn question_listing_expands_the_duration_question_for_texas() {
    let router = standard_router();

    let response = router
        .oneshot(get("/api/v1/jurisdictions/TX/questions"))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let questions = payload.as_array().expect("array payload");
    assert_eq!(questions.len(), 7);
    assert_eq!(questions[3].get("id"), Some(&json!("residencyDuration")));
    assert_eq!(
        questions[3].get("prompt"),
        Some(&json!("Have you lived in Texas for at least 30 days?"))
    );
}

#[tokio::test]
async fn question_listing_omits_duration_for_zero_day_jurisdictions() {
    let router = standard_router();

    let response = router
        .oneshot(get("/api/v1/jurisdictions/vt/questions"))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let questions = payload.as_array().expect("array payload");
    assert_eq!(questions.len(), 6);
    assert!(questions
        .iter()
        .all(|question| question.get("id") != Some(&json!("residencyDuration"))));
}

#[tokio::test]
async fn question_listing_rejects_unknown_codes() {
    let router = standard_router();

    let response = router
        .oneshot(get("/api/v1/jurisdictions/ZZ/questions"))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("ZZ"));
}

#[tokio::test]
async fn evaluation_endpoint_returns_a_verdict() {
    let router = standard_router();
    let request = post_json(
        "/api/v1/eligibility",
        json!({
            "jurisdiction": "TX",
            "answers": {
                "citizenship": true,
                "age": true,
                "residency": true,
                "residencyProof": true,
                "residencyDuration": true,
                "nameMatch": true,
                "dpoc": "ready",
            },
        }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("status"), Some(&json!("likely_eligible")));
    assert_eq!(
        payload
            .get("actions")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(0)
    );
}

#[tokio::test]
async fn evaluation_endpoint_flags_missing_documentary_proof() {
    let router = standard_router();
    let request = post_json(
        "/api/v1/eligibility",
        json!({
            "jurisdiction": "TX",
            "answers": {
                "citizenship": true,
                "age": true,
                "residency": true,
                "residencyProof": true,
                "residencyDuration": true,
                "nameMatch": true,
                "dpoc": "none",
            },
        }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("status"), Some(&json!("action_required")));
    let actions = payload
        .get("actions")
        .and_then(Value::as_array)
        .expect("actions array");
    assert_eq!(actions.len(), 1);
    assert_eq!(
        actions[0].get("title"),
        Some(&json!("Provide Citizenship Proof"))
    );
}

#[tokio::test]
async fn evaluation_endpoint_rejects_unknown_jurisdictions() {
    let router = standard_router();
    let request = post_json(
        "/api/v1/eligibility",
        json!({ "jurisdiction": "ZZ", "answers": {} }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn evaluation_endpoint_rejects_values_outside_the_declared_enums() {
    let router = standard_router();
    let request = post_json(
        "/api/v1/eligibility",
        json!({
            "jurisdiction": "TX",
            "answers": { "dpoc": "maybe" },
        }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
