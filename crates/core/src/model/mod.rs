mod answer;
mod category;
mod ids;
mod question;
mod result;

pub use ids::QuestionId;

pub use answer::Answer;
pub use category::{Category, UnknownCategory};
pub use question::{Question, QuestionError, ensure_unique_ids};
pub use result::{CategoryScores, QuizResult, ShareMeta};
