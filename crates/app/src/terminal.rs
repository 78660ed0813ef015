//! Plain-text rendering for the terminal front-end.

use std::fmt::Write as _;

use quiz_core::model::{Answer, Question};
use services::{QuizProgress, ResultCard};
use url::Url;

/// What the user typed at a question prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Choice(usize),
    Quit,
    Invalid,
}

/// Parse a 1-based option number, or `q` to abandon the attempt.
#[must_use]
pub fn parse_input(line: &str, options: usize) -> Input {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Input::Quit;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=options).contains(&n) => Input::Choice(n - 1),
        _ => Input::Invalid,
    }
}

#[must_use]
pub fn render_question(question: &Question, progress: QuizProgress) -> String {
    let mut out = String::new();
    let position = progress.position().unwrap_or(progress.total);
    let _ = writeln!(
        out,
        "\nMatrix {position} / {}  [{}]  {}%",
        progress.total,
        question.category(),
        progress.percent()
    );
    let _ = writeln!(out, "{}", question.prompt());
    for (i, option) in question.options().iter().enumerate() {
        let _ = writeln!(out, "  {}) {option}", i + 1);
    }
    let _ = write!(out, "Answer (1-{}, q to quit): ", question.options().len());
    out
}

#[must_use]
pub fn render_card(card: &ResultCard, link: Option<&Url>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n== {} ==", card.headline());
    let _ = writeln!(out, "IQ {}", card.score);
    let _ = writeln!(out, "Correct {} / {}", card.correct_count, card.total_count);
    let _ = writeln!(out, "Percentile {}%", card.percentile);
    let _ = writeln!(out, "\nCognitive Profile\n  \"{}\"", card.analysis);
    let _ = writeln!(out, "\nStrengths");
    for (category, percent) in &card.top_categories {
        let _ = writeln!(out, "  {category}: {percent}%");
    }
    let _ = writeln!(out, "\nSuggested careers: {}", card.careers.join(", "));
    if let Some(link) = link {
        let _ = writeln!(out, "\n{} {link}", card.share_message());
    }
    out
}

/// Each question with the chosen and correct option and the explanation.
#[must_use]
pub fn render_review(questions: &[Question], answers: &[Answer]) -> String {
    let mut out = String::from("\nReview\n");
    for (question, answer) in questions.iter().zip(answers) {
        let mark = if answer.is_correct() { "✓" } else { "✗" };
        let chosen = question
            .options()
            .get(answer.selected_option())
            .map_or("?", String::as_str);
        let correct = &question.options()[question.correct_option()];
        let _ = writeln!(
            out,
            "{mark} {} ({:.1}s)\n    you: {chosen}  correct: {correct}\n    {}",
            question.prompt(),
            answer.elapsed_seconds(),
            question.explanation()
        );
    }
    out
}
