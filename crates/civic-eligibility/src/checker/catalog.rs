use serde::Serialize;

use super::domain::{AnswerValue, DpocStatus, QuestionCategory, QuestionId};

/// Example documents that tie a registrant to a residential address.
pub const RESIDENCY_DOCUMENTS: [&str; 12] = [
    "Current utility bill (electric, water, gas, etc.)",
    "Bank or credit union statement",
    "Residential lease or mortgage statement",
    "Pay stubs issued by employer (dated within 60 days)",
    "Property tax bill or official receipt",
    "Registration card from your previous jurisdiction",
    "Homeowner's or renter's insurance policy or statement",
    "Government check or official correspondence",
    "W-2 or 1099 tax form (current tax year)",
    "Valid motor vehicle registration or title",
    "Transcript or enrollment verification from a school or university",
    "Valid government-issued ID with your current address",
];

/// Legal documents that link a current name to the name on a citizenship
/// document.
pub const BRIDGING_DOCUMENTS: [&str; 4] = [
    "Certified marriage certificate(s)",
    "Final divorce decree(s) showing name restoration",
    "Certified court order for legal name change",
    "Adoption decree",
];

/// Documents accepted as documentary proof of citizenship.
pub const CITIZENSHIP_DOCUMENTS: [&str; 6] = [
    "U.S. passport (valid or expired)",
    "Certified U.S. birth certificate",
    "Consular report of birth abroad",
    "Naturalization certificate",
    "Certificate of citizenship",
    "Bureau of Indian Affairs card / tribal treaty card",
];

/// One selectable answer for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub value: AnswerValue,
}

/// An authored question. Prompts may carry `{JURISDICTION_NAME}` and `{DAYS}`
/// placeholders that the sequencer resolves against the active policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionTemplate {
    pub id: QuestionId,
    pub category: QuestionCategory,
    pub prompt: &'static str,
    pub plain_language: &'static str,
    pub options: Vec<AnswerOption>,
}

impl QuestionTemplate {
    /// True when `value` is one of the declared options.
    pub fn accepts(&self, value: AnswerValue) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// The fixed, ordered question bank. The residency-duration template is a
/// candidate for conditional insertion only and never keeps its authored
/// position.
#[derive(Debug)]
pub struct QuestionCatalog {
    templates: Vec<QuestionTemplate>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            templates: standard_templates(),
        }
    }

    pub fn templates(&self) -> &[QuestionTemplate] {
        &self.templates
    }

    pub fn template(&self, id: QuestionId) -> Option<&QuestionTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }
}

fn yes_no_options(yes_id: &'static str, no_id: &'static str) -> Vec<AnswerOption> {
    vec![
        AnswerOption {
            id: yes_id,
            label: "Yes",
            value: AnswerValue::Bool(true),
        },
        AnswerOption {
            id: no_id,
            label: "No",
            value: AnswerValue::Bool(false),
        },
    ]
}

fn standard_templates() -> Vec<QuestionTemplate> {
    vec![
        QuestionTemplate {
            id: QuestionId::Citizenship,
            category: QuestionCategory::Citizenship,
            prompt: "Are you a citizen of the United States?",
            plain_language: "Federal registration rules restrict enrollment to citizens. Only those born in the U.S. or naturalized qualify.",
            options: yes_no_options("c1", "c2"),
        },
        QuestionTemplate {
            id: QuestionId::Age,
            category: QuestionCategory::Age,
            prompt: "Will you be 18 or older by the next election day?",
            plain_language: "You must reach adulthood (18 years old) by the date of the election. Many jurisdictions allow pre-registration at 16 or 17.",
            options: yes_no_options("a1", "a2"),
        },
        QuestionTemplate {
            id: QuestionId::Residency,
            category: QuestionCategory::Residency,
            prompt: "Do you live at your current address as your permanent home?",
            plain_language: "You must have a fixed habitation in the jurisdiction where you intend to register. Most require at least 30 days of residency.",
            options: yes_no_options("r1", "r2"),
        },
        QuestionTemplate {
            id: QuestionId::ResidencyProof,
            category: QuestionCategory::Residency,
            prompt: "Do you have a physical document proving your address?",
            plain_language: "Registering usually needs a paper or digital document that shows both your name and your current residential address.",
            options: vec![
                AnswerOption {
                    id: "rp1",
                    label: "Yes, I have proof",
                    value: AnswerValue::Bool(true),
                },
                AnswerOption {
                    id: "rp2",
                    label: "No, I need to get this",
                    value: AnswerValue::Bool(false),
                },
            ],
        },
        QuestionTemplate {
            id: QuestionId::Dpoc,
            category: QuestionCategory::DocumentaryProof,
            prompt: "Do you have documentary proof of citizenship?",
            plain_language: "An official document, such as a birth certificate, proving you were a citizen at birth or naturalized.",
            options: vec![
                AnswerOption {
                    id: "d1",
                    label: "Yes, I have it ready",
                    value: AnswerValue::Dpoc(DpocStatus::Ready),
                },
                AnswerOption {
                    id: "d2",
                    label: "I have it, but not with me",
                    value: AnswerValue::Dpoc(DpocStatus::Available),
                },
                AnswerOption {
                    id: "d3",
                    label: "No, I don't have these documents",
                    value: AnswerValue::Dpoc(DpocStatus::Missing),
                },
            ],
        },
        QuestionTemplate {
            id: QuestionId::NameMatch,
            category: QuestionCategory::NameMatch,
            prompt: "Does your ID match your citizenship document exactly?",
            plain_language: "If your current ID shows a different name than your citizenship document (due to marriage, divorce, etc.), legal bridging documents are needed to link them.",
            options: vec![
                AnswerOption {
                    id: "n1",
                    label: "Yes, they match",
                    value: AnswerValue::Bool(true),
                },
                AnswerOption {
                    id: "n2",
                    label: "No, they are different",
                    value: AnswerValue::Bool(false),
                },
            ],
        },
        QuestionTemplate {
            id: QuestionId::ResidencyDuration,
            category: QuestionCategory::Residency,
            prompt: "Have you lived in {JURISDICTION_NAME} for at least {DAYS} days?",
            plain_language: "Most jurisdictions require you to establish residency for a set period before you can register.",
            options: yes_no_options("rd1", "rd2"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_keep_authored_order() {
        let catalog = QuestionCatalog::standard();
        let ids: Vec<QuestionId> = catalog
            .templates()
            .iter()
            .map(|template| template.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                QuestionId::Citizenship,
                QuestionId::Age,
                QuestionId::Residency,
                QuestionId::ResidencyProof,
                QuestionId::Dpoc,
                QuestionId::NameMatch,
                QuestionId::ResidencyDuration,
            ]
        );
    }

    #[test]
    fn dpoc_template_rejects_boolean_values() {
        let catalog = QuestionCatalog::standard();
        let dpoc = catalog.template(QuestionId::Dpoc).expect("template");
        assert!(dpoc.accepts(AnswerValue::Dpoc(DpocStatus::Missing)));
        assert!(!dpoc.accepts(AnswerValue::Bool(true)));
    }
}
