use quiz_core::model::{Category, QuizResult, ShareMeta};

/// Presentation-agnostic content of the result card.
///
/// Carries numbers and fixed strings only; layout, image export and
/// clipboard handling belong to the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub is_shared: bool,
    pub score: i32,
    pub percentile: u32,
    pub correct_count: u32,
    pub total_count: u32,
    pub analysis: String,
    pub top_categories: Vec<(Category, u32)>,
    pub careers: Vec<String>,
}

impl ResultCard {
    const TOP_CATEGORIES: usize = 2;

    #[must_use]
    pub fn new(result: &QuizResult, meta: ShareMeta, is_shared: bool) -> Self {
        let mut top_categories = result.category_scores.ranked();
        top_categories.truncate(Self::TOP_CATEGORIES);
        Self {
            is_shared,
            score: result.score,
            percentile: result.percentile,
            correct_count: meta.correct_count,
            total_count: meta.total_count,
            analysis: result.analysis.clone(),
            top_categories,
            careers: result.recommended_careers.clone(),
        }
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.is_shared {
            "Shared Results"
        } else {
            "Verified Score"
        }
    }

    /// Message that accompanies a share link.
    #[must_use]
    pub fn share_message(&self) -> String {
        format!(
            "I scored an IQ of {} on the NeuroQuant assessment! Check out my profile here:",
            self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::CategoryScores;

    fn result() -> QuizResult {
        let mut scores = CategoryScores::default();
        scores.set(Category::Verbal, 75);
        scores.set(Category::Spatial, 75);
        scores.set(Category::Logical, 20);
        QuizResult {
            score: 105,
            percentile: 55,
            category_scores: scores,
            analysis: "balanced".into(),
            recommended_careers: vec!["Architect".into()],
        }
    }

    #[test]
    fn card_keeps_two_strongest_categories() {
        let meta = ShareMeta {
            correct_count: 11,
            total_count: 20,
        };
        let card = ResultCard::new(&result(), meta, false);
        assert_eq!(
            card.top_categories,
            vec![(Category::Spatial, 75), (Category::Verbal, 75)]
        );
        assert_eq!(card.headline(), "Verified Score");
        assert_eq!(card.correct_count, 11);
    }

    #[test]
    fn shared_card_headline_and_message() {
        let meta = ShareMeta {
            correct_count: 3,
            total_count: 20,
        };
        let card = ResultCard::new(&result(), meta, true);
        assert_eq!(card.headline(), "Shared Results");
        assert!(card.share_message().contains("IQ of 105"));
    }
}
