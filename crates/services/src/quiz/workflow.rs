use std::fmt;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};
use url::Url;

use quiz_core::model::{Answer, Question, QuizResult, ShareMeta};
use quiz_core::share::{self, SharedResult};

use super::plan::shuffle;
use super::runner::QuizRunner;
use super::view::ResultCard;
use crate::Clock;
use crate::error::QuizError;

//
// ─── SCREENS ───────────────────────────────────────────────────────────────────
//

/// Top-level screen the front-end should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    LoadingQuestions,
    Quiz,
    Analyzing,
    Results,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Landing => "landing",
            Screen::LoadingQuestions => "loading_questions",
            Screen::Quiz => "quiz",
            Screen::Analyzing => "analyzing",
            Screen::Results => "results",
        };
        f.write_str(name)
    }
}

/// Notified on every screen change. Observers manage their own lifecycle;
/// the flow never waits on them.
pub trait ScreenObserver: Send + Sync {
    fn screen_changed(&self, from: Screen, to: Screen);
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

static DEFAULT_SHARE_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(FlowConfig::DEFAULT_SHARE_BASE).expect("default share base should be a valid URL")
});

/// Tunables for [`QuizFlow`].
#[derive(Debug, Clone)]
pub struct FlowConfig {
    loading_delay: Duration,
    analyzing_delay: Duration,
    share_base: Url,
    shuffle_seed: Option<u64>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            loading_delay: Duration::from_millis(600),
            analyzing_delay: Duration::from_millis(1200),
            share_base: DEFAULT_SHARE_BASE_URL.clone(),
            shuffle_seed: None,
        }
    }
}

impl FlowConfig {
    pub const DEFAULT_SHARE_BASE: &'static str = "https://neuroquant.app/";

    /// Default config with both artificial delays removed.
    #[must_use]
    pub fn instant() -> Self {
        Self::default()
            .with_loading_delay(Duration::ZERO)
            .with_analyzing_delay(Duration::ZERO)
    }

    #[must_use]
    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    #[must_use]
    pub fn with_analyzing_delay(mut self, delay: Duration) -> Self {
        self.analyzing_delay = delay;
        self
    }

    #[must_use]
    pub fn with_share_base(mut self, base: Url) -> Self {
        self.share_base = base;
        self
    }

    /// Fix the shuffle order, for reproducible runs.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn loading_delay(&self) -> Duration {
        self.loading_delay
    }

    #[must_use]
    pub fn analyzing_delay(&self) -> Duration {
        self.analyzing_delay
    }

    #[must_use]
    pub fn share_base(&self) -> &Url {
        &self.share_base
    }
}

//
// ─── FLOW ──────────────────────────────────────────────────────────────────────
//

/// Result of submitting one answer through the flow.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub answer: Answer,
    pub is_complete: bool,
}

/// Owns one user's journey: landing, quiz, scoring and sharing.
///
/// Single owner, driven by user events. The two artificial delays are plain
/// sleeps inside `start` and the final `submit`; nothing runs in the
/// background.
pub struct QuizFlow {
    config: FlowConfig,
    clock: Clock,
    bank: Vec<Question>,
    rng: StdRng,
    screen: Screen,
    location: Url,
    runner: Option<QuizRunner>,
    result: Option<QuizResult>,
    shared_meta: Option<ShareMeta>,
    observers: Vec<Arc<dyn ScreenObserver>>,
}

impl QuizFlow {
    #[must_use]
    pub fn new(config: FlowConfig, clock: Clock, bank: Vec<Question>) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let location = config.share_base.clone();
        Self {
            config,
            clock,
            bank,
            rng,
            screen: Screen::Landing,
            location,
            runner: None,
            result: None,
            shared_meta: None,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ScreenObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current address, with stale share parameters already cleared.
    #[must_use]
    pub fn location(&self) -> &Url {
        &self.location
    }

    #[must_use]
    pub fn runner(&self) -> Option<&QuizRunner> {
        self.runner.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Counts shown with the result. Shared metadata overrides the live session.
    #[must_use]
    pub fn meta(&self) -> Option<ShareMeta> {
        if let Some(meta) = self.shared_meta {
            return Some(meta);
        }
        let runner = self.runner.as_ref()?;
        Some(ShareMeta {
            correct_count: runner.correct_count(),
            total_count: u32::try_from(runner.questions().len()).unwrap_or(u32::MAX),
        })
    }

    #[must_use]
    pub fn is_shared_view(&self) -> bool {
        self.shared_meta.is_some()
    }

    #[must_use]
    pub fn card(&self) -> Option<ResultCard> {
        let result = self.result.as_ref()?;
        let meta = self.meta()?;
        Some(ResultCard::new(result, meta, self.is_shared_view()))
    }

    /// Land on `location`, showing a shared result if it carries a valid token.
    ///
    /// Without a valid token any previous session and result are dropped.
    /// An invalid token is also cleared from the query. Returns whether a
    /// shared result was loaded.
    pub fn open(&mut self, location: Url) -> bool {
        self.location = location;
        let Some(token) = share::share_token(&self.location) else {
            self.discard();
            self.set_screen(Screen::Landing);
            return false;
        };

        match share::try_decode(&token) {
            Ok(SharedResult { result, meta }) => {
                info!(score = result.score, "opened shared result");
                self.runner = None;
                self.result = Some(result);
                self.shared_meta = Some(meta);
                self.set_screen(Screen::Results);
                true
            }
            Err(err) => {
                warn!(error = %err, "ignoring invalid share link");
                self.discard();
                self.location = share::clear_share(&self.location);
                self.set_screen(Screen::Landing);
                false
            }
        }
    }

    /// Start a fresh attempt over a shuffled copy of the bank.
    pub async fn start(&mut self) {
        self.set_screen(Screen::LoadingQuestions);
        self.location = share::clear_share(&self.location);
        sleep(self.config.loading_delay).await;

        let mut questions = self.bank.clone();
        shuffle(&mut questions, &mut self.rng);

        self.runner = Some(QuizRunner::new(questions, self.clock.now()));
        self.result = None;
        self.shared_meta = None;
        info!(questions = self.bank.len(), "quiz started");

        if self.runner.as_ref().is_some_and(QuizRunner::is_complete) {
            self.finish().await;
        } else {
            self.set_screen(Screen::Quiz);
        }
    }

    /// Answer question `index` with option `selected`, timed by the flow clock.
    ///
    /// Completing the last question runs the analysis delay and scores the
    /// attempt before returning.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoSession` outside the quiz screen, and the
    /// runner's rejection for duplicate, out-of-order or invalid answers.
    pub async fn submit(
        &mut self,
        index: usize,
        selected: usize,
    ) -> Result<SubmitOutcome, QuizError> {
        if self.screen != Screen::Quiz {
            return Err(QuizError::NoSession);
        }
        let now = self.clock.now();
        let runner = self.runner.as_mut().ok_or(QuizError::NoSession)?;

        let answer = match runner.submit(index, selected, now) {
            Ok(answer) => answer.clone(),
            Err(err) => {
                warn!(index, selected, error = %err, "answer rejected");
                return Err(err);
            }
        };
        debug!(
            question = %answer.question_id(),
            correct = answer.is_correct(),
            elapsed = answer.elapsed_seconds(),
            "answer committed"
        );

        let is_complete = runner.is_complete();
        if is_complete {
            self.finish().await;
        }
        Ok(SubmitOutcome {
            answer,
            is_complete,
        })
    }

    /// Answer whichever question is current.
    ///
    /// # Errors
    ///
    /// See [`QuizFlow::submit`].
    pub async fn answer_current(&mut self, selected: usize) -> Result<SubmitOutcome, QuizError> {
        let index = self
            .runner
            .as_ref()
            .and_then(QuizRunner::current_index)
            .ok_or(QuizError::NoSession)?;
        self.submit(index, selected).await
    }

    /// Drop the session and any result, back to the landing screen.
    pub fn reset(&mut self) {
        self.discard();
        self.location = share::clear_share(&self.location);
        self.set_screen(Screen::Landing);
    }

    /// Link that reopens the current result elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Share` if encoding fails.
    pub fn share_link(&self) -> Result<Option<Url>, QuizError> {
        let (Some(result), Some(meta)) = (self.result.clone(), self.meta()) else {
            return Ok(None);
        };
        let token = share::encode(&SharedResult { result, meta })?;
        Ok(Some(share::share_url(&self.config.share_base, &token)))
    }

    fn discard(&mut self) {
        self.runner = None;
        self.result = None;
        self.shared_meta = None;
    }

    async fn finish(&mut self) {
        self.set_screen(Screen::Analyzing);
        sleep(self.config.analyzing_delay).await;

        self.result = self.runner.as_ref().and_then(QuizRunner::result);
        if let Some(result) = &self.result {
            info!(
                score = result.score,
                percentile = result.percentile,
                "quiz completed"
            );
        }
        self.set_screen(Screen::Results);
    }

    fn set_screen(&mut self, to: Screen) {
        let from = self.screen;
        if from == to {
            return;
        }
        self.screen = to;
        debug!(%from, %to, "screen changed");
        for observer in &self.observers {
            observer.screen_changed(from, to);
        }
    }
}

impl fmt::Debug for QuizFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizFlow")
            .field("screen", &self.screen)
            .field("location", &self.location.as_str())
            .field("runner", &self.runner)
            .field("has_result", &self.result.is_some())
            .field("shared_meta", &self.shared_meta)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

async fn sleep(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::bank;
    use quiz_core::time::fixed_clock;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(Screen, Screen)>>);

    impl ScreenObserver for Recorder {
        fn screen_changed(&self, from: Screen, to: Screen) {
            self.0.lock().unwrap().push((from, to));
        }
    }

    fn flow() -> QuizFlow {
        QuizFlow::new(
            FlowConfig::instant().with_shuffle_seed(5),
            fixed_clock(),
            bank::questions().unwrap(),
        )
    }

    #[test]
    fn default_config_uses_the_public_site() {
        let config = FlowConfig::default();
        assert_eq!(config.share_base().as_str(), FlowConfig::DEFAULT_SHARE_BASE);
        assert_eq!(config.loading_delay(), Duration::from_millis(600));
        assert_eq!(config.analyzing_delay(), Duration::from_millis(1200));
    }

    #[tokio::test]
    async fn start_shuffles_the_whole_bank() {
        let mut flow = flow();
        flow.start().await;

        assert_eq!(flow.screen(), Screen::Quiz);
        let runner = flow.runner().unwrap();
        let mut ids: Vec<u32> = runner.questions().iter().map(|q| q.id().value()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn observers_see_every_transition() {
        let recorder = Arc::new(Recorder::default());
        let mut flow = flow().with_observer(recorder.clone());
        flow.start().await;
        for _ in 0..20 {
            flow.answer_current(0).await.unwrap();
        }
        flow.reset();

        let seen = recorder.0.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (Screen::Landing, Screen::LoadingQuestions),
                (Screen::LoadingQuestions, Screen::Quiz),
                (Screen::Quiz, Screen::Analyzing),
                (Screen::Analyzing, Screen::Results),
                (Screen::Results, Screen::Landing),
            ]
        );
    }

    #[tokio::test]
    async fn submit_outside_quiz_is_rejected() {
        let mut flow = flow();
        assert!(matches!(
            flow.submit(0, 0).await.unwrap_err(),
            QuizError::NoSession
        ));
    }

    #[tokio::test]
    async fn empty_bank_goes_straight_to_results() {
        let mut flow = QuizFlow::new(FlowConfig::instant(), fixed_clock(), Vec::new());
        flow.start().await;

        assert_eq!(flow.screen(), Screen::Results);
        let result = flow.result().unwrap();
        assert_eq!(result.score, 50);
        assert_eq!(result.percentile, 0);
        assert_eq!(
            flow.meta(),
            Some(ShareMeta {
                correct_count: 0,
                total_count: 0
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn delays_are_honoured() {
        let config = FlowConfig::default().with_shuffle_seed(1);
        let mut flow = QuizFlow::new(config, fixed_clock(), bank::questions().unwrap());

        let before = tokio::time::Instant::now();
        flow.start().await;
        assert!(before.elapsed() >= Duration::from_millis(600));

        let before = tokio::time::Instant::now();
        for _ in 0..20 {
            flow.answer_current(1).await.unwrap();
        }
        assert!(before.elapsed() >= Duration::from_millis(1200));
        assert_eq!(flow.screen(), Screen::Results);
    }
}
