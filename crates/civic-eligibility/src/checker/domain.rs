use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier for a question template. Closed so the evaluator can be checked
/// exhaustively against every question the catalog can ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    Citizenship,
    Age,
    Residency,
    ResidencyProof,
    Dpoc,
    NameMatch,
    ResidencyDuration,
}

impl QuestionId {
    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionId::Citizenship => "citizenship",
            QuestionId::Age => "age",
            QuestionId::Residency => "residency",
            QuestionId::ResidencyProof => "residencyProof",
            QuestionId::Dpoc => "dpoc",
            QuestionId::NameMatch => "nameMatch",
            QuestionId::ResidencyDuration => "residencyDuration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Citizenship,
    Age,
    Residency,
    DocumentaryProof,
    NameMatch,
}

impl QuestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionCategory::Citizenship => "Citizenship",
            QuestionCategory::Age => "Age",
            QuestionCategory::Residency => "Residency",
            QuestionCategory::DocumentaryProof => "Documentary Proof",
            QuestionCategory::NameMatch => "Name Match",
        }
    }
}

/// Answer states for the documentary-proof-of-citizenship question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DpocStatus {
    Ready,
    Available,
    #[serde(rename = "none")]
    Missing,
}

impl DpocStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            DpocStatus::Ready => "ready",
            DpocStatus::Available => "available",
            DpocStatus::Missing => "none",
        }
    }
}

/// Value selected for a question. Boolean questions and the three-way
/// documentary-proof question share one answer sheet, so the value is a
/// tagged union rather than loose JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Dpoc(DpocStatus),
}

/// Answer sheet collected across a session. Recording overwrites any earlier
/// value for the same question; a missing key stays distinct from an explicit
/// "no".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers(BTreeMap<QuestionId, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn record(&mut self, id: QuestionId, value: AnswerValue) {
        self.0.insert(id, value);
    }

    pub fn get(&self, id: QuestionId) -> Option<AnswerValue> {
        self.0.get(&id).copied()
    }

    /// The answer for `id` when it was recorded as a boolean; `None` for
    /// unanswered questions and for non-boolean values.
    pub fn bool_answer(&self, id: QuestionId) -> Option<bool> {
        match self.get(id) {
            Some(AnswerValue::Bool(value)) => Some(value),
            _ => None,
        }
    }

    pub fn dpoc_answer(&self) -> Option<DpocStatus> {
        match self.get(QuestionId::Dpoc) {
            Some(AnswerValue::Dpoc(status)) => Some(status),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Overall eligibility classification derived from one answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    LikelyEligible,
    ActionRequired,
    Ineligible,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::LikelyEligible => "Likely Eligible",
            EligibilityStatus::ActionRequired => "Action Required",
            EligibilityStatus::Ineligible => "Ineligible",
        }
    }
}

/// Which requirement a finding speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceGate {
    Citizenship,
    Age,
    Residency,
    ResidencyDuration,
    NameMatch,
    DocumentaryProof,
}

/// How strongly a finding bears on the outcome. `Blocking` findings only
/// appear on ineligible verdicts; `Advisory` findings never carry an action
/// and never flip the status on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingTone {
    Confirmed,
    Advisory,
    ActionNeeded,
    Blocking,
}

impl FindingTone {
    pub const fn label(self) -> &'static str {
        match self {
            FindingTone::Confirmed => "Confirmed",
            FindingTone::Advisory => "Advisory",
            FindingTone::ActionNeeded => "Action Needed",
            FindingTone::Blocking => "Blocking",
        }
    }
}

/// One line of the compliance checklist, with any example documents that
/// satisfy the requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub gate: ComplianceGate,
    pub tone: FindingTone,
    pub title: &'static str,
    pub detail: String,
    pub documents: Vec<&'static str>,
}

/// A concrete follow-up the registrant must complete before registering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemediationAction {
    pub title: &'static str,
    pub description: String,
}

/// Structured outcome of one evaluation: a status plus ordered findings and
/// remediation actions. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: EligibilityStatus,
    pub findings: Vec<Finding>,
    pub actions: Vec<RemediationAction>,
}

impl Verdict {
    pub fn summary(&self) -> String {
        match self.status {
            EligibilityStatus::LikelyEligible => "likely eligible to register".to_string(),
            EligibilityStatus::ActionRequired => format!(
                "action required before registering ({} open item(s))",
                self.actions.len()
            ),
            EligibilityStatus::Ineligible => self
                .findings
                .first()
                .map(|finding| format!("ineligible: {}", finding.title))
                .unwrap_or_else(|| "ineligible".to_string()),
        }
    }
}
