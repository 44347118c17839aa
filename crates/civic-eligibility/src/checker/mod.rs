//! Civic-registration eligibility checker: jurisdiction rule table, question
//! catalog and sequencing, verdict evaluation, and session orchestration.

pub mod catalog;
pub mod domain;
pub(crate) mod evaluation;
pub mod jurisdictions;
pub mod preferences;
pub mod router;
mod sequencer;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{
    AnswerOption, QuestionCatalog, QuestionTemplate, BRIDGING_DOCUMENTS, CITIZENSHIP_DOCUMENTS,
    RESIDENCY_DOCUMENTS,
};
pub use domain::{
    AnswerValue, Answers, ComplianceGate, DpocStatus, EligibilityStatus, Finding, FindingTone,
    QuestionCategory, QuestionId, RemediationAction, Verdict,
};
pub use evaluation::EligibilityEngine;
pub use jurisdictions::{JurisdictionDirectory, JurisdictionPolicy, JurisdictionSummary};
pub use preferences::{AccessibilityPreferences, PreferenceError, PreferenceStore};
pub use router::{checker_router, CheckerState};
pub use sequencer::{build_effective_questions, EffectiveQuestion};
pub use session::{SessionController, SessionError, SessionStep};
