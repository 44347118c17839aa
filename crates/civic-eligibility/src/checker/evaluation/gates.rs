use super::super::domain::{
    AnswerValue, Answers, ComplianceGate, EligibilityStatus, Finding, FindingTone, QuestionId,
    Verdict,
};
use super::super::jurisdictions::JurisdictionPolicy;

/// Requirements that end the questionnaire outright when failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HardGate {
    Citizenship,
    Age,
}

/// Disqualification table: the listed answer to the listed question jumps the
/// session straight to the verdict. New hard gates extend this table rather
/// than adding branches.
pub(crate) const HARD_GATES: [(QuestionId, bool, HardGate); 2] = [
    (QuestionId::Citizenship, false, HardGate::Citizenship),
    (QuestionId::Age, false, HardGate::Age),
];

/// True when a just-recorded answer trips a hard gate.
pub(crate) fn is_disqualifying(id: QuestionId, value: AnswerValue) -> bool {
    HARD_GATES
        .iter()
        .any(|(gate_id, disqualifier, _)| *gate_id == id && value == AnswerValue::Bool(*disqualifier))
}

/// Apply the hard gates in table order. Anything other than an explicit "yes"
/// fails the gate, so an unanswered gate question is also disqualifying.
pub(crate) fn apply_hard_gates(policy: &JurisdictionPolicy, answers: &Answers) -> Option<Verdict> {
    for (id, _, gate) in HARD_GATES {
        if answers.bool_answer(id) != Some(true) {
            return Some(terminal_verdict(policy, gate));
        }
    }
    None
}

/// Hard-gate verdicts carry exactly one finding and no actions.
fn terminal_verdict(policy: &JurisdictionPolicy, gate: HardGate) -> Verdict {
    let finding = match gate {
        HardGate::Citizenship => Finding {
            gate: ComplianceGate::Citizenship,
            tone: FindingTone::Blocking,
            title: "Citizenship Requirement",
            detail: "Federal law restricts civic registration to citizens. Non-citizens are not \
                     eligible to register."
                .to_string(),
            documents: Vec::new(),
        },
        HardGate::Age => Finding {
            gate: ComplianceGate::Age,
            tone: FindingTone::Blocking,
            title: "Age Requirement",
            detail: format!(
                "You must be at least 18 years old on or before election day. You may be able to \
                 pre-register depending on local {} rules.",
                policy.name
            ),
            documents: Vec::new(),
        },
    };

    Verdict {
        status: EligibilityStatus::Ineligible,
        findings: vec![finding],
        actions: Vec::new(),
    }
}
