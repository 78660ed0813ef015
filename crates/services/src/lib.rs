#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::QuizError;

pub use quiz::{
    FlowConfig, QuizFlow, QuizProgress, QuizRunner, ResultCard, RunnerState, Screen,
    ScreenObserver, SubmitOutcome, shuffle, shuffled,
};
