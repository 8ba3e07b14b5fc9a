//! Errors returned by the quiz, results and journal handlers.

use thiserror::Error;

use mindset_core::model::{QuizError, ScoreError};

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl From<mindset_core::Error> for QuizServiceError {
    fn from(err: mindset_core::Error) -> Self {
        match err {
            mindset_core::Error::Quiz(err) => Self::Quiz(err),
            mindset_core::Error::Score(err) => Self::Score(err),
        }
    }
}

/// Errors emitted when reading quiz results from a session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResultsError {
    #[error("no quiz has been submitted in this session")]
    MissingScore,
}

/// Errors emitted by the journal store and its export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JournalError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
