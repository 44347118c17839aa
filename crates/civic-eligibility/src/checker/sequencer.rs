use serde::Serialize;

use super::catalog::{AnswerOption, QuestionCatalog, QuestionTemplate};
use super::domain::{AnswerValue, QuestionCategory, QuestionId};
use super::jurisdictions::JurisdictionPolicy;

/// A question template with jurisdiction placeholders resolved. Derived from
/// the catalog whenever the selected jurisdiction changes; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveQuestion {
    pub id: QuestionId,
    pub category: QuestionCategory,
    pub prompt: String,
    pub plain_language: &'static str,
    pub options: Vec<AnswerOption>,
}

impl EffectiveQuestion {
    pub fn accepts(&self, value: AnswerValue) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// Build the ordered question list for one jurisdiction.
///
/// The residency-duration template is removed from the authored order and,
/// for jurisdictions with a nonzero minimum residency, re-inserted
/// immediately after the residency question with `{JURISDICTION_NAME}` and
/// `{DAYS}` substituted. Zero-day jurisdictions never ask it.
pub fn build_effective_questions(
    catalog: &QuestionCatalog,
    policy: &JurisdictionPolicy,
) -> Vec<EffectiveQuestion> {
    let mut questions: Vec<EffectiveQuestion> = catalog
        .templates()
        .iter()
        .filter(|template| template.id != QuestionId::ResidencyDuration)
        .map(|template| resolve(template, policy))
        .collect();

    if policy.minimum_residency_days > 0 {
        if let Some(template) = catalog.template(QuestionId::ResidencyDuration) {
            if let Some(position) = questions
                .iter()
                .position(|question| question.id == QuestionId::Residency)
            {
                questions.insert(position + 1, resolve(template, policy));
            }
        }
    }

    questions
}

fn resolve(template: &QuestionTemplate, policy: &JurisdictionPolicy) -> EffectiveQuestion {
    EffectiveQuestion {
        id: template.id,
        category: template.category,
        prompt: template
            .prompt
            .replace("{JURISDICTION_NAME}", policy.name)
            .replace("{DAYS}", &policy.minimum_residency_days.to_string()),
        plain_language: template.plain_language,
        options: template.options.clone(),
    }
}
