mod gates;
mod rules;

pub(crate) use gates::is_disqualifying;

use super::domain::{
    Answers, ComplianceGate, EligibilityStatus, Finding, FindingTone, Verdict,
};
use super::jurisdictions::JurisdictionPolicy;
use rules::SoftSignals;

/// Stateless evaluator applying one jurisdiction's policy to an answer sheet.
///
/// Evaluation is pure and total: identical `(policy, answers)` inputs always
/// produce identical verdicts, and missing answers are treated as unanswered
/// rather than as "no".
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    policy: JurisdictionPolicy,
}

impl EligibilityEngine {
    pub fn for_policy(policy: JurisdictionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &JurisdictionPolicy {
        &self.policy
    }

    /// Hard gates short-circuit with a single blocking finding; soft gates
    /// accumulate in display order. Advisory findings never block: a verdict
    /// with nothing but advisories still reads likely-eligible.
    pub fn evaluate(&self, answers: &Answers) -> Verdict {
        if let Some(verdict) = gates::apply_hard_gates(&self.policy, answers) {
            return verdict;
        }

        let (findings, actions, signals) = rules::accumulate(&self.policy, answers);

        let blocking = findings
            .iter()
            .any(|finding| finding.tone == FindingTone::ActionNeeded);
        if blocking {
            return Verdict {
                status: EligibilityStatus::ActionRequired,
                findings,
                actions,
            };
        }

        self.success_verdict(findings, signals)
    }

    /// Synthesize the success finding set: a duration-confirmed entry (when
    /// the duration requirement was explicitly met) or a generic
    /// residency-established entry, ahead of the identity-documentation
    /// confirmation. Advisory findings that accumulated are kept after them.
    fn success_verdict(&self, advisories: Vec<Finding>, signals: SoftSignals) -> Verdict {
        let policy = &self.policy;

        let residency = if signals.residency_duration_met {
            Finding {
                gate: ComplianceGate::ResidencyDuration,
                tone: FindingTone::Confirmed,
                title: "Residency Duration Confirmed",
                detail: format!(
                    "You have lived in {} for at least {} days.",
                    policy.name, policy.minimum_residency_days
                ),
                documents: Vec::new(),
            }
        } else {
            Finding {
                gate: ComplianceGate::Residency,
                tone: FindingTone::Confirmed,
                title: "Residency Established",
                detail: format!("You have a fixed habitation in {}.", policy.name),
                documents: Vec::new(),
            }
        };

        let identity = Finding {
            gate: ComplianceGate::DocumentaryProof,
            tone: FindingTone::Confirmed,
            title: "Identity Documentation Verified",
            detail: format!(
                "You meet the standard identity documentation rules for {}.",
                policy.name
            ),
            documents: Vec::new(),
        };

        let mut findings = vec![residency, identity];
        findings.extend(advisories);

        Verdict {
            status: EligibilityStatus::LikelyEligible,
            findings,
            actions: Vec::new(),
        }
    }
}
