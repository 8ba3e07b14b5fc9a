use std::path::{Path, PathBuf};
use std::sync::Arc;

use mindset_core::time::format_timestamp;
use tracing::{debug, info};

use crate::Clock;
use crate::journal::JournalService;
use crate::motivation::QuotePicker;
use crate::quiz_service::QuizService;
use crate::session::MindsetSession;

/// Runtime knobs resolved by the binary from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory the journal CSV is written into.
    pub export_dir: PathBuf,
    /// Seed for quote selection; `None` draws from OS entropy.
    pub quote_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            quote_seed: None,
        }
    }
}

/// Assembles app-facing services around one clock and config.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    config: AppConfig,
    quiz: Arc<QuizService>,
    journal: Arc<JournalService>,
    quotes: Arc<QuotePicker>,
}

impl AppServices {
    #[must_use]
    pub fn new(config: AppConfig, clock: Clock) -> Self {
        let quotes = Arc::new(QuotePicker::new(config.quote_seed));
        info!(
            export_dir = %config.export_dir.display(),
            seeded = config.quote_seed.is_some(),
            live_clock = clock.is_default(),
            "services ready"
        );

        Self {
            clock,
            config,
            quiz: Arc::new(QuizService::default()),
            journal: Arc::new(JournalService::new(clock)),
            quotes,
        }
    }

    /// Starts state for a new user session.
    #[must_use]
    pub fn new_session(&self) -> MindsetSession {
        let session = MindsetSession::new(&self.clock);
        debug!(started_at = %format_timestamp(session.started_at()), "session opened");
        session
    }

    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.config.export_dir
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn journal(&self) -> Arc<JournalService> {
        Arc::clone(&self.journal)
    }

    #[must_use]
    pub fn quotes(&self) -> Arc<QuotePicker> {
        Arc::clone(&self.quotes)
    }
}
