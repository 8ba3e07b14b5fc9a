use mindset_core::model::JournalEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalRowVm {
    pub date: String,
    pub entry: String,
}

impl From<&JournalEntry> for JournalRowVm {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            date: entry.timestamp().to_string(),
            entry: entry.text().to_string(),
        }
    }
}

#[must_use]
pub fn map_journal_rows(entries: &[JournalEntry]) -> Vec<JournalRowVm> {
    entries.iter().map(JournalRowVm::from).collect()
}
