use civic_eligibility::checker::{
    AnswerValue, DpocStatus, EffectiveQuestion, JurisdictionDirectory, QuestionId,
    SessionController, SessionError,
};
use civic_eligibility::error::AppError;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Jurisdiction code to walk through
    #[arg(long, default_value = "TX")]
    pub(crate) jurisdiction: String,
    /// Documentary-proof answer: ready, available, or none
    #[arg(long, default_value = "ready", value_parser = crate::infra::parse_dpoc)]
    pub(crate) dpoc: DpocStatus,
    /// Answer "no" to the name-match question to see bridging guidance
    #[arg(long)]
    pub(crate) mismatched_name: bool,
    /// Answer "no" to the citizenship question to show the hard gate
    #[arg(long)]
    pub(crate) non_citizen: bool,
}

/// Walk a scripted session through every applicable question and print the
/// verdict the way the checker renders it.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut session = SessionController::standard();
    let question_count = session.select_jurisdiction(&args.jurisdiction)?.len();

    let policy_name = session
        .selected_policy()
        .map(|policy| policy.name)
        .unwrap_or("unknown");
    println!(
        "Walking the {policy_name} questionnaire ({} question(s))",
        question_count
    );
    println!();

    while let Some(question) = session.current_question().cloned() {
        let value = scripted_answer(&question, &args);
        let label = question
            .options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label)
            .unwrap_or("?");
        println!("  Q: {}", question.prompt);
        println!("  A: {label}");
        session.submit_answer(question.id, value)?;
    }

    let verdict = session
        .current_verdict()
        .ok_or(AppError::Session(SessionError::InvalidTransition(
            "the scripted session did not reach a verdict",
        )))?;

    println!();
    println!("Verdict: {}", verdict.status.label());
    for finding in &verdict.findings {
        println!("  [{}] {} - {}", finding.tone.label(), finding.title, finding.detail);
        for document in &finding.documents {
            println!("      * {document}");
        }
    }
    if !verdict.actions.is_empty() {
        println!();
        println!("Next steps:");
        for action in &verdict.actions {
            println!("  * {}: {}", action.title, action.description);
        }
    }

    Ok(())
}

fn scripted_answer(question: &EffectiveQuestion, args: &DemoArgs) -> AnswerValue {
    match question.id {
        QuestionId::Citizenship => AnswerValue::Bool(!args.non_citizen),
        QuestionId::NameMatch => AnswerValue::Bool(!args.mismatched_name),
        QuestionId::Dpoc => AnswerValue::Dpoc(args.dpoc),
        _ => AnswerValue::Bool(true),
    }
}

/// Print the rule table the way operators review it.
pub(crate) fn run_jurisdictions_list() -> Result<(), AppError> {
    let directory = JurisdictionDirectory::standard();

    println!("{:<6} {:<22} {:>5}  {}", "CODE", "NAME", "DAYS", "PROOF");
    for policy in directory.policies() {
        println!(
            "{:<6} {:<22} {:>5}  {}",
            policy.code,
            policy.name,
            policy.minimum_residency_days,
            if policy.strict_documentary_proof {
                "strict"
            } else {
                "streamlined"
            }
        );
    }

    Ok(())
}
