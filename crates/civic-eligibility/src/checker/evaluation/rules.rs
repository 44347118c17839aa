use super::super::catalog::{BRIDGING_DOCUMENTS, CITIZENSHIP_DOCUMENTS, RESIDENCY_DOCUMENTS};
use super::super::domain::{
    Answers, ComplianceGate, DpocStatus, Finding, FindingTone, QuestionId, RemediationAction,
};
use super::super::jurisdictions::JurisdictionPolicy;

/// Signals the soft gates feed forward into verdict aggregation.
pub(crate) struct SoftSignals {
    pub residency_duration_met: bool,
}

/// Accumulate soft-gate findings and actions in the fixed display order:
/// residency/proof, residency duration, name match, documentary proof.
/// Each gate fires independently; all may fire, none may fire.
pub(crate) fn accumulate(
    policy: &JurisdictionPolicy,
    answers: &Answers,
) -> (Vec<Finding>, Vec<RemediationAction>, SoftSignals) {
    let mut findings = Vec::new();
    let mut actions = Vec::new();

    let is_resident = answers.bool_answer(QuestionId::Residency) == Some(true);
    let has_residency_proof = answers.bool_answer(QuestionId::ResidencyProof) == Some(true);
    if !is_resident || !has_residency_proof {
        findings.push(Finding {
            gate: ComplianceGate::Residency,
            tone: FindingTone::ActionNeeded,
            title: "Establish Residency Proof",
            detail: format!(
                "Registering in {} requires documentation linking your identity to your local \
                 address.",
                policy.name
            ),
            documents: RESIDENCY_DOCUMENTS[..5].to_vec(),
        });
        actions.push(RemediationAction {
            title: "Establish Residency",
            description: "You need a utility bill, bank statement, or government mailer with \
                          your name and address."
                .to_string(),
        });
    }

    let mut residency_duration_met = false;
    if policy.minimum_residency_days > 0 {
        // Only an explicit "no" flags the duration requirement; an absent
        // answer (question never asked or never reached) adds nothing.
        match answers.bool_answer(QuestionId::ResidencyDuration) {
            Some(false) => {
                findings.push(Finding {
                    gate: ComplianceGate::ResidencyDuration,
                    tone: FindingTone::ActionNeeded,
                    title: "Residency Duration Requirement",
                    detail: format!(
                        "You must wait until you have lived in {} for at least {} days before \
                         registering.",
                        policy.name, policy.minimum_residency_days
                    ),
                    documents: Vec::new(),
                });
                actions.push(RemediationAction {
                    title: "Wait for Residency Period",
                    description: format!(
                        "You must live in {} for {} days.",
                        policy.name, policy.minimum_residency_days
                    ),
                });
            }
            Some(true) => residency_duration_met = true,
            None => {}
        }
    }

    if answers.bool_answer(QuestionId::NameMatch) == Some(false) {
        findings.push(Finding {
            gate: ComplianceGate::NameMatch,
            tone: FindingTone::ActionNeeded,
            title: "Identity Linkage Required",
            detail: "Since your current name (on ID) differs from your citizenship proof, a \
                     paper trail linking the two names is mandatory."
                .to_string(),
            documents: BRIDGING_DOCUMENTS.to_vec(),
        });
        actions.push(RemediationAction {
            title: "Bridge Name Change",
            description: "Provide a marriage certificate, divorce decree, or court order \
                          linking your names."
                .to_string(),
        });
    }

    match answers.dpoc_answer() {
        Some(DpocStatus::Ready) | None => {}
        Some(DpocStatus::Available) | Some(DpocStatus::Missing) => {
            if policy.strict_documentary_proof {
                findings.push(Finding {
                    gate: ComplianceGate::DocumentaryProof,
                    tone: FindingTone::ActionNeeded,
                    title: "Documentary Proof Required",
                    detail: format!(
                        "{} mandates physical proof of citizenship at the time of registration.",
                        policy.name
                    ),
                    documents: CITIZENSHIP_DOCUMENTS[..4].to_vec(),
                });
                actions.push(RemediationAction {
                    title: "Provide Citizenship Proof",
                    description: "You must have a passport, birth certificate, or naturalization \
                                  certificate in hand."
                        .to_string(),
                });
            } else {
                findings.push(Finding {
                    gate: ComplianceGate::DocumentaryProof,
                    tone: FindingTone::Advisory,
                    title: "Streamlined Verification",
                    detail: format!(
                        "{} uses automated records checks. Re-submission may not be required if \
                         you were previously verified.",
                        policy.name
                    ),
                    documents: Vec::new(),
                });
            }
        }
    }

    (
        findings,
        actions,
        SoftSignals {
            residency_duration_met,
        },
    )
}
