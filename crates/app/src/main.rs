mod config;
mod logger;
mod promo;
mod terminal;

use std::io::Write as _;
use std::sync::Arc;

use quiz_core::bank;
use quiz_core::share;
use services::{Clock, QuizFlow, Screen};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use url::Url;

use config::{Command, Config};
use promo::PromoSlot;
use terminal::Input;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [quiz] [--no-delay] [--seed <n>] [--base-url <url>] [-v]");
    eprintln!("  cargo run -p app -- view <share-link-or-token> [--base-url <url>]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NEUROQUANT_BASE_URL, NEUROQUANT_NO_DELAY, RUST_LOG");
}

fn print_flush(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

/// Accept a full link, or a bare token placed on the configured base.
fn resolve_link(raw: &str, base: &Url) -> Url {
    match Url::parse(raw.trim()) {
        Ok(url) if share::share_token(&url).is_some() => url,
        _ => share::share_url(base, raw.trim()),
    }
}

fn show_results(flow: &QuizFlow) -> Result<(), Box<dyn std::error::Error>> {
    let Some(card) = flow.card() else {
        return Ok(());
    };
    let link = flow.share_link()?;
    print_flush(&terminal::render_card(&card, link.as_ref()))?;
    if let Some(runner) = flow.runner() {
        print_flush(&terminal::render_review(runner.questions(), runner.answers()))?;
    }
    Ok(())
}

async fn run_quiz(flow: &mut QuizFlow) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_flush("Initializing Neural Core...\n")?;
    flow.start().await;

    while flow.screen() == Screen::Quiz {
        let Some(runner) = flow.runner() else { break };
        let Some(question) = runner.current_question() else {
            break;
        };
        let options = question.options().len();
        print_flush(&terminal::render_question(question, runner.progress()))?;

        let Some(line) = lines.next_line().await? else {
            flow.reset();
            break;
        };
        match terminal::parse_input(&line, options) {
            Input::Choice(selected) => {
                let outcome = flow.answer_current(selected).await?;
                if outcome.is_complete {
                    print_flush("Synthesizing Profile...\n")?;
                }
            }
            Input::Quit => {
                info!("attempt abandoned");
                flow.reset();
            }
            Input::Invalid => print_flush(&format!("Pick a number from 1 to {options}.\n"))?,
        }
    }

    show_results(flow)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let config = Config::from_env()
        .and_then(|c| c.parse_args(argv))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    logger::init(config.verbose);

    let bank = bank::questions()?;
    let flow_config = config.flow_config();
    let mut flow = QuizFlow::new(flow_config, Clock::default_clock(), bank);
    let promo = Arc::new(PromoSlot::for_screen(flow.screen()));
    flow = flow.with_observer(promo);

    match config.command {
        Command::Quiz => run_quiz(&mut flow).await,
        Command::View { link } => {
            let location = resolve_link(&link, &config.base_url);
            if flow.open(location) {
                show_results(&flow)
            } else {
                eprintln!("That share link is not valid; starting a new assessment instead.");
                run_quiz(&mut flow).await
            }
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_link_accepts_links_and_tokens() {
        let base = Url::parse("https://example.org/").unwrap();

        let full = resolve_link("https://other.org/x?share=abc", &base);
        assert_eq!(full.as_str(), "https://other.org/x?share=abc");

        let bare = resolve_link(" abc ", &base);
        assert_eq!(bare.as_str(), "https://example.org/?share=abc");
    }
}
