use mindset_core::Clock;
use mindset_core::model::JournalEntry;

use crate::error::JournalError;

/// Column names of the exported table, in order.
pub const CSV_HEADER: [&str; 2] = ["date", "entry"];

//
// ─── STORE ─────────────────────────────────────────────────────────────────────
//

/// Append-only journal for one session.
///
/// Entries are never edited or removed; the only transition is `append`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalStore {
    entries: Vec<JournalEntry>,
}

impl JournalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `text` stamped with the clock's current time and returns the entry.
    pub fn append(&mut self, text: impl Into<String>, clock: &Clock) -> JournalEntry {
        let entry = JournalEntry::new(clock.now(), text);
        self.entries.push(entry.clone());
        entry
    }

    /// All entries in the order they were appended.
    #[must_use]
    pub fn list(&self) -> &[JournalEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the journal as UTF-8 CSV with a `date,entry` header.
    ///
    /// Fields containing commas, quotes or line breaks are quoted; the header
    /// is written even when the journal is empty.
    ///
    /// # Errors
    ///
    /// Returns `JournalError` if the CSV writer fails to encode or flush.
    pub fn export_csv(&self) -> Result<Vec<u8>, JournalError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for entry in &self.entries {
            writer.write_record([entry.timestamp(), entry.text()])?;
        }
        writer.into_inner().map_err(|err| JournalError::Io(err.into_error()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
