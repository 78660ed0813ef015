use crate::model::{Answer, Category, CategoryScores, Question, QuizResult};

//
// ─── TIERS ─────────────────────────────────────────────────────────────────────
//

/// Narrative band selected from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Focused,
    Average,
    Superior,
    Genius,
}

impl Tier {
    /// Thresholds are inclusive lower bounds: 140, 120, 90.
    #[must_use]
    pub fn for_score(score: i32) -> Self {
        if score >= 140 {
            Tier::Genius
        } else if score >= 120 {
            Tier::Superior
        } else if score >= 90 {
            Tier::Average
        } else {
            Tier::Focused
        }
    }

    #[must_use]
    pub fn analysis(self) -> &'static str {
        match self {
            Tier::Genius => {
                "Extraordinary Genius. Your cognitive profile suggests highly superior abstract reasoning and exceptional problem-solving speed. You process complex data patterns with ease."
            }
            Tier::Superior => {
                "Superior Intelligence. You demonstrate strong logical deduction and verbal comprehension skills, placing you well above the general population mean."
            }
            Tier::Average => {
                "Average to High Average. Your neural processing is balanced and efficient. You show solid foundational skills in numerical and pattern recognition tasks."
            }
            Tier::Focused => {
                "Focused Cognitive Profile. Your results suggest areas of specific strength alongside opportunities for further cognitive training in logical sequencing."
            }
        }
    }
}

//
// ─── SCORER ────────────────────────────────────────────────────────────────────
//

/// `100 + (correct - 10) * 5`, independent of bank size.
#[must_use]
pub fn iq_score(correct_count: u32) -> i32 {
    let correct = i32::try_from(correct_count).unwrap_or(i32::MAX);
    100_i32.saturating_add(correct.saturating_sub(10).saturating_mul(5))
}

/// `round(part / whole * 100)` with halves rounded up; `0` when `whole == 0`.
#[must_use]
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Percentile clamped to `[1, 99]`; an empty question set yields `0`.
#[must_use]
pub fn percentile(correct_count: u32, total_count: u32) -> u32 {
    if total_count == 0 {
        return 0;
    }
    percent(correct_count, total_count).clamp(1, 99)
}

/// Number of answers marked correct.
#[must_use]
pub fn correct_count(answers: &[Answer]) -> u32 {
    let n = answers.iter().filter(|a| a.is_correct()).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Per-category percentage correct.
///
/// A question counts as correct when some answer for its id is correct.
/// Categories without questions score `0`.
#[must_use]
pub fn category_scores(questions: &[Question], answers: &[Answer]) -> CategoryScores {
    let mut correct = [0_u32; Category::ALL.len()];
    let mut total = [0_u32; Category::ALL.len()];

    for q in questions {
        let slot = q.category().index();
        total[slot] = total[slot].saturating_add(1);
        let answered_right = answers
            .iter()
            .find(|a| a.question_id() == q.id())
            .is_some_and(Answer::is_correct);
        if answered_right {
            correct[slot] = correct[slot].saturating_add(1);
        }
    }

    let mut scores = CategoryScores::default();
    for cat in Category::ALL {
        scores.set(cat, percent(correct[cat.index()], total[cat.index()]));
    }
    scores
}

/// Derive the full result for a completed attempt.
///
/// Total over any input, including an empty question set.
#[must_use]
pub fn score(questions: &[Question], answers: &[Answer]) -> QuizResult {
    let correct = correct_count(answers);
    let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);
    let score = iq_score(correct);
    let category_scores = category_scores(questions, answers);

    QuizResult {
        score,
        percentile: percentile(correct, total),
        category_scores,
        analysis: Tier::for_score(score).analysis().to_string(),
        recommended_careers: category_scores
            .strongest()
            .careers()
            .iter()
            .map(|c| (*c).to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank;
    use crate::model::QuestionId;

    fn answer_all(questions: &[Question], right: impl Fn(&Question) -> bool) -> Vec<Answer> {
        questions
            .iter()
            .map(|q| {
                let pick = if right(q) {
                    q.correct_option()
                } else {
                    (q.correct_option() + 1) % q.options().len()
                };
                Answer::commit(q, pick, 1.0)
            })
            .collect()
    }

    fn synthetic_bank(layout: &[(Category, usize)]) -> Vec<Question> {
        let mut id = 0;
        let mut out = Vec::new();
        for (cat, n) in layout {
            for _ in 0..*n {
                id += 1;
                out.push(
                    Question::new(
                        QuestionId::new(id),
                        *cat,
                        format!("Q{id}"),
                        vec!["a".into(), "b".into(), "c".into()],
                        0,
                        "",
                    )
                    .unwrap(),
                );
            }
        }
        out
    }

    #[test]
    fn tier_ladder_boundaries() {
        assert_eq!(Tier::for_score(150), Tier::Genius);
        assert_eq!(Tier::for_score(140), Tier::Genius);
        assert_eq!(Tier::for_score(135), Tier::Superior);
        assert_eq!(Tier::for_score(120), Tier::Superior);
        assert_eq!(Tier::for_score(115), Tier::Average);
        assert_eq!(Tier::for_score(90), Tier::Average);
        assert_eq!(Tier::for_score(85), Tier::Focused);
        assert_eq!(Tier::for_score(50), Tier::Focused);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13); // 12.5
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(7, 7), 100);
    }

    #[test]
    fn zero_correct_is_floor() {
        let bank = bank::questions().unwrap();
        let answers = answer_all(&bank, |_| false);
        let result = score(&bank, &answers);

        assert_eq!(result.score, 50);
        assert_eq!(result.percentile, 1);
        assert_eq!(result.analysis, Tier::Focused.analysis());
        assert_eq!(
            result.recommended_careers,
            vec!["Software Architect", "Mathematician", "Philosopher"]
        );
    }

    #[test]
    fn all_correct_is_ceiling() {
        let bank = bank::questions().unwrap();
        let answers = answer_all(&bank, |_| true);
        let result = score(&bank, &answers);

        assert_eq!(result.score, 150);
        assert_eq!(result.percentile, 99);
        assert_eq!(result.analysis, Tier::Genius.analysis());
        for (_, pct) in result.category_scores.iter() {
            assert_eq!(pct, 100);
        }
    }

    #[test]
    fn scores_step_by_five_across_the_bank() {
        let bank = bank::questions().unwrap();
        for k in 0..=bank.len() {
            let answers = answer_all(&bank, |q| q.id().value() as usize <= k);
            let result = score(&bank, &answers);
            assert_eq!(result.score, 50 + 5 * k as i32);
            assert!((1..=99).contains(&result.percentile));
        }
    }

    #[test]
    fn numerical_only_scenario() {
        let bank = synthetic_bank(&[
            (Category::Logical, 4),
            (Category::Spatial, 4),
            (Category::Numerical, 5),
            (Category::Verbal, 4),
            (Category::PatternRecognition, 3),
        ]);
        assert_eq!(bank.len(), 20);
        let answers = answer_all(&bank, |q| q.category() == Category::Numerical);
        let result = score(&bank, &answers);

        assert_eq!(correct_count(&answers), 5);
        assert_eq!(result.score, 75);
        assert_eq!(result.percentile, 25);
        assert_eq!(result.category_scores.get(Category::Numerical), 100);
        for cat in [
            Category::Logical,
            Category::Spatial,
            Category::Verbal,
            Category::PatternRecognition,
        ] {
            assert_eq!(result.category_scores.get(cat), 0);
        }
        assert_eq!(
            result.recommended_careers,
            vec!["Data Scientist", "Quantitative Analyst", "Economist"]
        );
    }

    #[test]
    fn numerical_only_on_the_real_bank() {
        let bank = bank::questions().unwrap();
        let numerical = bank
            .iter()
            .filter(|q| q.category() == Category::Numerical)
            .count() as i32;
        let answers = answer_all(&bank, |q| q.category() == Category::Numerical);
        let result = score(&bank, &answers);

        assert_eq!(result.score, 100 + (numerical - 10) * 5);
        assert_eq!(result.category_scores.get(Category::Numerical), 100);
        assert_eq!(result.category_scores.strongest(), Category::Numerical);
    }

    #[test]
    fn missing_category_scores_zero() {
        let bank = synthetic_bank(&[(Category::Verbal, 2)]);
        let answers = answer_all(&bank, |_| true);
        let result = score(&bank, &answers);

        assert_eq!(result.category_scores.get(Category::Verbal), 100);
        assert_eq!(result.category_scores.get(Category::Spatial), 0);
        assert_eq!(result.recommended_careers[0], "Writer");
    }

    #[test]
    fn empty_question_set_is_neutral() {
        let result = score(&[], &[]);
        assert_eq!(result.score, 50);
        assert_eq!(result.percentile, 0);
        assert_eq!(result.category_scores, CategoryScores::default());
        assert_eq!(result.analysis, Tier::Focused.analysis());
    }

    #[test]
    fn scoring_is_deterministic() {
        let bank = bank::questions().unwrap();
        let answers = answer_all(&bank, |q| q.id().value() % 3 == 0);
        assert_eq!(score(&bank, &answers), score(&bank, &answers));
    }
}
