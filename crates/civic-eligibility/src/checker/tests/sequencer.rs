use super::common::*;
use crate::checker::domain::QuestionId;
use crate::checker::sequencer::build_effective_questions;

#[test]
fn zero_day_jurisdictions_never_ask_the_duration_question() {
    let catalog = catalog();
    for policy in directory().policies() {
        if policy.minimum_residency_days > 0 {
            continue;
        }
        let questions = build_effective_questions(&catalog, policy);
        assert!(
            questions
                .iter()
                .all(|question| question.id != QuestionId::ResidencyDuration),
            "{} asked the duration question with zero minimum days",
            policy.code
        );
        assert_eq!(questions.len(), 6);
    }
}

#[test]
fn positive_day_jurisdictions_ask_duration_right_after_residency() {
    let catalog = catalog();
    for policy in directory().policies() {
        if policy.minimum_residency_days == 0 {
            continue;
        }
        let questions = build_effective_questions(&catalog, policy);
        let residency = questions
            .iter()
            .position(|question| question.id == QuestionId::Residency)
            .expect("residency question present");
        assert_eq!(
            questions.get(residency + 1).map(|question| question.id),
            Some(QuestionId::ResidencyDuration),
            "{} did not place the duration question after residency",
            policy.code
        );
        assert_eq!(questions.len(), 7);
    }
}

#[test]
fn duration_prompt_interpolates_name_and_days() {
    let questions = build_effective_questions(&catalog(), &policy("TX"));
    let duration = questions
        .iter()
        .find(|question| question.id == QuestionId::ResidencyDuration)
        .expect("duration question present");
    assert_eq!(
        duration.prompt,
        "Have you lived in Texas for at least 30 days?"
    );
    assert!(!duration.prompt.contains('{'));
}

#[test]
fn base_question_order_follows_the_catalog() {
    let questions = build_effective_questions(&catalog(), &policy("VT"));
    let ids: Vec<QuestionId> = questions.iter().map(|question| question.id).collect();
    assert_eq!(
        ids,
        vec![
            QuestionId::Citizenship,
            QuestionId::Age,
            QuestionId::Residency,
            QuestionId::ResidencyProof,
            QuestionId::Dpoc,
            QuestionId::NameMatch,
        ]
    );
}

#[test]
fn rebuilding_for_the_same_policy_is_deterministic() {
    let catalog = catalog();
    let policy = policy("AZ");
    assert_eq!(
        build_effective_questions(&catalog, &policy),
        build_effective_questions(&catalog, &policy)
    );
}
