//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;
use quiz_core::share::ShareError;

/// Errors emitted by the quiz runner and flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no quiz is in progress")]
    NoSession,
    #[error("quiz already completed")]
    Completed,
    #[error("question {index} was already answered")]
    AlreadyAnswered { index: usize },
    #[error("question {index} is not the current question ({current})")]
    NotCurrent { index: usize, current: usize },
    #[error("option {selected} is out of range for {options} options")]
    OptionOutOfRange { selected: usize, options: usize },
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Share(#[from] ShareError),
}
