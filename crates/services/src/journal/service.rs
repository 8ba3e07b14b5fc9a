use tracing::{debug, info};

use mindset_core::model::JournalEntry;

use super::export::JournalExport;
use crate::Clock;
use crate::error::JournalError;
use crate::session::MindsetSession;

/// Handlers for the journal page.
#[derive(Debug, Clone)]
pub struct JournalService {
    clock: Clock,
}

impl JournalService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Saves a reflection into the session journal. Empty text is accepted.
    pub fn save_entry(&self, session: &mut MindsetSession, text: &str) -> JournalEntry {
        let journal = session.journal_mut();
        let entry = journal.append(text, &self.clock);
        debug!(
            timestamp = entry.timestamp(),
            chars = entry.text().chars().count(),
            "journal entry saved"
        );
        info!(entries = journal.len(), "journal updated");
        entry
    }

    /// Renders the session journal as a CSV download.
    ///
    /// # Errors
    ///
    /// Returns `JournalError` if the CSV cannot be encoded.
    pub fn export(&self, session: &MindsetSession) -> Result<JournalExport, JournalError> {
        let bytes = session.journal().export_csv()?;
        info!(
            entries = session.journal().len(),
            bytes = bytes.len(),
            "journal exported"
        );
        Ok(JournalExport::csv(bytes))
    }
}
