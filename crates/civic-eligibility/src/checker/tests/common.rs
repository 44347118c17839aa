use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::checker::catalog::QuestionCatalog;
use crate::checker::domain::{AnswerValue, Answers, DpocStatus, QuestionId};
use crate::checker::evaluation::EligibilityEngine;
use crate::checker::jurisdictions::{JurisdictionDirectory, JurisdictionPolicy};
use crate::checker::router::{checker_router, CheckerState};
use crate::checker::session::SessionController;

pub(super) fn directory() -> JurisdictionDirectory {
    JurisdictionDirectory::standard()
}

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog::standard()
}

pub(super) fn policy(code: &str) -> JurisdictionPolicy {
    *directory()
        .lookup(code)
        .unwrap_or_else(|| panic!("jurisdiction '{code}' missing from the standard table"))
}

pub(super) fn engine(code: &str) -> EligibilityEngine {
    EligibilityEngine::for_policy(policy(code))
}

pub(super) fn answers(pairs: &[(QuestionId, AnswerValue)]) -> Answers {
    pairs.iter().copied().collect()
}

pub(super) fn yes(id: QuestionId) -> (QuestionId, AnswerValue) {
    (id, AnswerValue::Bool(true))
}

pub(super) fn no(id: QuestionId) -> (QuestionId, AnswerValue) {
    (id, AnswerValue::Bool(false))
}

pub(super) fn dpoc(status: DpocStatus) -> (QuestionId, AnswerValue) {
    (QuestionId::Dpoc, AnswerValue::Dpoc(status))
}

/// Fully compliant sheet for a jurisdiction that asks the duration question.
pub(super) fn compliant_answers_with_duration() -> Answers {
    answers(&[
        yes(QuestionId::Citizenship),
        yes(QuestionId::Age),
        yes(QuestionId::Residency),
        yes(QuestionId::ResidencyProof),
        yes(QuestionId::ResidencyDuration),
        yes(QuestionId::NameMatch),
        dpoc(DpocStatus::Ready),
    ])
}

/// Fully compliant sheet for a zero-day jurisdiction (duration never asked).
pub(super) fn compliant_answers_without_duration(status: DpocStatus) -> Answers {
    answers(&[
        yes(QuestionId::Citizenship),
        yes(QuestionId::Age),
        yes(QuestionId::Residency),
        yes(QuestionId::ResidencyProof),
        yes(QuestionId::NameMatch),
        dpoc(status),
    ])
}

pub(super) fn standard_session() -> SessionController {
    SessionController::standard()
}

pub(super) fn standard_router() -> axum::Router {
    checker_router(Arc::new(CheckerState::standard()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
