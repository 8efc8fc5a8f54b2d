use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Affirmative,
    Negative,
}

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("No interactive prompt is available")]
    Unavailable,
    #[error("The prompt was dismissed without a selection")]
    Dismissed,
}

/// Boundary to the human-interaction subsystem. Implementations block until
/// the human selects one of the two offered buttons.
pub trait ConfirmationPrompt: std::fmt::Debug {
    fn ask(
        &self,
        title: &str,
        message: &str,
        affirmative: &str,
        negative: &str,
    ) -> Result<Choice, PromptError>;
}

/// Replays a prepared sequence of answers and records every question asked.
/// Stands in for the real dialog when exercising trust logic deterministically.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Result<Choice, PromptError>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, choice: Choice) {
        self.answers.borrow_mut().push_back(Ok(choice));
    }

    pub fn push_err(&self, err: PromptError) {
        self.answers.borrow_mut().push_back(Err(err));
    }

    /// Messages asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn times_asked(&self) -> usize {
        self.asked.borrow().len()
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn ask(
        &self,
        _title: &str,
        message: &str,
        _affirmative: &str,
        _negative: &str,
    ) -> Result<Choice, PromptError> {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(PromptError::Unavailable))
    }
}
