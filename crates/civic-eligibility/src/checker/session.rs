use super::catalog::QuestionCatalog;
use super::domain::{AnswerValue, Answers, QuestionId, Verdict};
use super::evaluation::{self, EligibilityEngine};
use super::jurisdictions::{JurisdictionDirectory, JurisdictionPolicy, JurisdictionSummary};
use super::sequencer::{build_effective_questions, EffectiveQuestion};

/// Rejections raised by session transitions. Every rejection leaves the
/// session untouched; there is no partial mutation to recover from.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown jurisdiction code '{0}'")]
    UnknownJurisdiction(String),
    #[error("invalid transition: {0}")]
    InvalidTransition(&'static str),
    #[error("answer value is not in the option set declared for '{question}'")]
    MalformedAnswerValue { question: &'static str },
}

/// Cursor over the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    JurisdictionSelect,
    Question(usize),
    Verdict,
}

/// Orchestrates one registrant's pass through the questionnaire: jurisdiction
/// selection, question-by-question answering with early termination on hard
/// gates, and verdict computation. Owned by a single logical actor; every
/// transition runs to completion before the next is accepted.
pub struct SessionController {
    directory: JurisdictionDirectory,
    catalog: QuestionCatalog,
    step: SessionStep,
    engine: Option<EligibilityEngine>,
    questions: Vec<EffectiveQuestion>,
    answers: Answers,
}

impl SessionController {
    pub fn new(directory: JurisdictionDirectory, catalog: QuestionCatalog) -> Self {
        Self {
            directory,
            catalog,
            step: SessionStep::JurisdictionSelect,
            engine: None,
            questions: Vec::new(),
            answers: Answers::new(),
        }
    }

    /// Controller over the built-in jurisdiction table and question bank.
    pub fn standard() -> Self {
        Self::new(
            JurisdictionDirectory::standard(),
            QuestionCatalog::standard(),
        )
    }

    pub fn step(&self) -> SessionStep {
        self.step
    }

    pub fn list_jurisdictions(&self) -> Vec<JurisdictionSummary> {
        self.directory.summaries()
    }

    pub fn selected_policy(&self) -> Option<&JurisdictionPolicy> {
        self.engine.as_ref().map(EligibilityEngine::policy)
    }

    pub fn effective_questions(&self) -> &[EffectiveQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Start the questionnaire for `code`. Only valid before the first
    /// question; switching jurisdictions mid-flow goes through `reset`.
    /// Clears any answers retained from an abandoned earlier run.
    pub fn select_jurisdiction(
        &mut self,
        code: &str,
    ) -> Result<&[EffectiveQuestion], SessionError> {
        if self.step != SessionStep::JurisdictionSelect {
            return Err(SessionError::InvalidTransition(
                "a jurisdiction is already selected; reset to choose another",
            ));
        }

        let policy = *self
            .directory
            .lookup(code)
            .ok_or_else(|| SessionError::UnknownJurisdiction(code.to_string()))?;

        self.answers.clear();
        self.questions = build_effective_questions(&self.catalog, &policy);
        self.engine = Some(EligibilityEngine::for_policy(policy));
        self.step = SessionStep::Question(0);
        Ok(&self.questions)
    }

    /// The question awaiting an answer; `None` while selecting a jurisdiction
    /// or once the verdict is reached.
    pub fn current_question(&self) -> Option<&EffectiveQuestion> {
        match self.step {
            SessionStep::Question(index) => self.questions.get(index),
            _ => None,
        }
    }

    /// Record an answer for the current question and advance. A disqualifying
    /// answer to a hard-gate question jumps straight to the verdict,
    /// skipping every remaining question.
    pub fn submit_answer(
        &mut self,
        id: QuestionId,
        value: AnswerValue,
    ) -> Result<(), SessionError> {
        let index = match self.step {
            SessionStep::Question(index) => index,
            SessionStep::JurisdictionSelect => {
                return Err(SessionError::InvalidTransition(
                    "no question is active before a jurisdiction is selected",
                ))
            }
            SessionStep::Verdict => {
                return Err(SessionError::InvalidTransition(
                    "the questionnaire is complete; reset to start over",
                ))
            }
        };

        let question = self
            .questions
            .get(index)
            .ok_or(SessionError::InvalidTransition(
                "question cursor is out of range",
            ))?;
        if question.id != id {
            return Err(SessionError::InvalidTransition(
                "answer must target the current question",
            ));
        }
        if !question.accepts(value) {
            return Err(SessionError::MalformedAnswerValue {
                question: id.as_str(),
            });
        }

        self.answers.record(id, value);

        if evaluation::is_disqualifying(id, value) || index + 1 == self.questions.len() {
            self.step = SessionStep::Verdict;
        } else {
            self.step = SessionStep::Question(index + 1);
        }
        Ok(())
    }

    /// Step back one question, or back to jurisdiction selection from the
    /// first question. Answers already given are retained so returning to a
    /// step resumes with the same answer on record. No-op at the selection
    /// screen; the verdict is terminal until `reset`.
    pub fn go_back(&mut self) {
        match self.step {
            SessionStep::Question(0) => self.step = SessionStep::JurisdictionSelect,
            SessionStep::Question(index) => self.step = SessionStep::Question(index - 1),
            SessionStep::JurisdictionSelect | SessionStep::Verdict => {}
        }
    }

    /// Return to jurisdiction selection with answers and jurisdiction cleared.
    pub fn reset(&mut self) {
        self.step = SessionStep::JurisdictionSelect;
        self.engine = None;
        self.questions.clear();
        self.answers.clear();
    }

    /// The verdict for the collected answers; `Some` only once every
    /// applicable question is answered (or a hard gate terminated early).
    /// Repeated calls without intervening mutation return equal verdicts.
    pub fn current_verdict(&self) -> Option<Verdict> {
        match (&self.step, &self.engine) {
            (SessionStep::Verdict, Some(engine)) => Some(engine.evaluate(&self.answers)),
            _ => None,
        }
    }
}
