#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod journal;
pub mod motivation;
pub mod quiz_service;
pub mod session;

pub use mindset_core::Clock;

pub use app_services::{AppConfig, AppServices};
pub use error::{JournalError, QuizServiceError, ResultsError};
pub use journal::{JournalExport, JournalService, JournalStore};
pub use motivation::QuotePicker;
pub use quiz_service::{QuizOutcome, QuizService, ScoreReport};
pub use session::MindsetSession;
