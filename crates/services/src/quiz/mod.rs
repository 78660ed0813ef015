mod plan;
mod progress;
mod runner;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use plan::{shuffle, shuffled};
pub use progress::QuizProgress;
pub use runner::{QuizRunner, RunnerState};
pub use view::ResultCard;
pub use workflow::{FlowConfig, QuizFlow, Screen, ScreenObserver, SubmitOutcome};
