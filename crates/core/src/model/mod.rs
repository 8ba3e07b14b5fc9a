mod journal;
mod quiz;
mod score;

pub use journal::JournalEntry;
pub use quiz::{Answer, AnswerSheet, QuizError, QuizQuestion, QuizResponse};
pub use score::{MindsetLevel, QuizScore, STRONG_THRESHOLD, ScoreError};
