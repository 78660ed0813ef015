use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{Answer, Question, QuizResult};
use quiz_core::scoring;
use quiz_core::time::elapsed_seconds;

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Where an attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    /// First question shown, nothing answered.
    Ready,
    /// `index` questions answered, question `index` is current.
    InProgress { index: usize },
    /// Every question has exactly one answer.
    Complete,
}

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

/// One attempt over an ordered question set.
///
/// Steps through questions one at a time. `answers.len() == current` holds
/// throughout; the timer for a question starts when it becomes current and
/// stops when its answer is committed.
pub struct QuizRunner {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    current: usize,
    shown_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizRunner {
    /// Begin an attempt with the first question shown at `started_at`.
    ///
    /// An empty question set is complete immediately.
    #[must_use]
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        let completed_at = questions.is_empty().then_some(started_at);
        Self {
            questions,
            answers: Vec::new(),
            current: 0,
            shown_at: started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn state(&self) -> RunnerState {
        if self.is_complete() {
            RunnerState::Complete
        } else if self.current == 0 {
            RunnerState::Ready
        } else {
            RunnerState::InProgress {
                index: self.current,
            }
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.is_complete()).then_some(self.current)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        scoring::correct_count(&self.answers)
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.len(),
            answered: self.answers.len(),
            remaining: self.questions.len().saturating_sub(self.answers.len()),
            is_complete: self.is_complete(),
        }
    }

    /// Commit `selected` as the answer to question `index`.
    ///
    /// The first answer for a question wins; later submissions for it are
    /// rejected without touching the session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the last answer,
    /// `QuizError::AlreadyAnswered` for an earlier index,
    /// `QuizError::NotCurrent` for a later one and
    /// `QuizError::OptionOutOfRange` for an invalid option.
    pub fn submit(
        &mut self,
        index: usize,
        selected: usize,
        committed_at: DateTime<Utc>,
    ) -> Result<&Answer, QuizError> {
        if index < self.current {
            return Err(QuizError::AlreadyAnswered { index });
        }
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if index > self.current {
            return Err(QuizError::NotCurrent {
                index,
                current: self.current,
            });
        }

        let question = &self.questions[self.current];
        if selected >= question.options().len() {
            return Err(QuizError::OptionOutOfRange {
                selected,
                options: question.options().len(),
            });
        }

        let elapsed = elapsed_seconds(self.shown_at, committed_at);
        self.answers.push(Answer::commit(question, selected, elapsed));

        self.current += 1;
        if self.current >= self.questions.len() {
            self.completed_at = Some(committed_at);
        } else {
            self.shown_at = committed_at;
        }

        self.answers.last().ok_or(QuizError::Completed)
    }

    /// Commit `selected` for whichever question is current.
    ///
    /// # Errors
    ///
    /// See [`QuizRunner::submit`].
    pub fn answer_current(
        &mut self,
        selected: usize,
        committed_at: DateTime<Utc>,
    ) -> Result<&Answer, QuizError> {
        self.submit(self.current, selected, committed_at)
    }

    /// Score the attempt once every question is answered.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.is_complete()
            .then(|| scoring::score(&self.questions, &self.answers))
    }
}

impl fmt::Debug for QuizRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizRunner")
            .field("questions_len", &self.questions.len())
            .field("answers_len", &self.answers.len())
            .field("current", &self.current)
            .field("shown_at", &self.shown_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
