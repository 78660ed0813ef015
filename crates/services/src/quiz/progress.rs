/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// 1-based position of the current question, `None` once complete.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        (!self.is_complete).then_some(self.answered + 1)
    }

    /// Share of the quiz reached, counting the current question, in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> u32 {
        let reached = self.position().unwrap_or(self.total);
        let total = u32::try_from(self.total).unwrap_or(u32::MAX);
        let reached = u32::try_from(reached).unwrap_or(u32::MAX);
        quiz_core::scoring::percent(reached, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_current_question() {
        let p = QuizProgress {
            total: 20,
            answered: 4,
            remaining: 16,
            is_complete: false,
        };
        assert_eq!(p.position(), Some(5));
        assert_eq!(p.percent(), 25);
    }

    #[test]
    fn complete_has_no_position() {
        let p = QuizProgress {
            total: 3,
            answered: 3,
            remaining: 0,
            is_complete: true,
        };
        assert_eq!(p.position(), None);
        assert_eq!(p.percent(), 100);
    }
}
