use crate::model::ids::QuestionId;
use crate::model::question::Question;

/// The committed choice for one question.
///
/// `is_correct` is derived once at creation and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    question_id: QuestionId,
    selected_option: usize,
    is_correct: bool,
    elapsed_seconds: f64,
}

impl Answer {
    /// Record `selected_option` as the answer to `question`.
    ///
    /// Negative or non-finite elapsed times are stored as `0.0`.
    #[must_use]
    pub fn commit(question: &Question, selected_option: usize, elapsed_seconds: f64) -> Self {
        let elapsed_seconds = if elapsed_seconds.is_finite() {
            elapsed_seconds.max(0.0)
        } else {
            0.0
        };
        Self {
            question_id: question.id(),
            selected_option,
            is_correct: question.is_correct(selected_option),
            elapsed_seconds,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    #[must_use]
    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}
