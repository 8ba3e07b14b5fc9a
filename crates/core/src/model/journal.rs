use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time::format_timestamp;

/// One saved reflection.
///
/// The timestamp is stored already formatted so what the user saw in the
/// table is exactly what the export carries. Field names match the CSV
/// header (`date`, `entry`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(rename = "date")]
    timestamp: String,
    #[serde(rename = "entry")]
    text: String,
}

impl JournalEntry {
    /// Creates an entry written at `at`. The text is kept as-is, empty or not.
    #[must_use]
    pub fn new(at: NaiveDateTime, text: impl Into<String>) -> Self {
        Self {
            timestamp: format_timestamp(at),
            text: text.into(),
        }
    }

    /// `YYYY-MM-DD HH:MM:SS`
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn keeps_text_verbatim() {
        let entry = JournalEntry::new(fixed_now(), "  spaced, \"quoted\"\n");
        assert_eq!(entry.timestamp(), "2023-11-14 22:13:20");
        assert_eq!(entry.text(), "  spaced, \"quoted\"\n");
    }

    #[test]
    fn empty_text_is_allowed() {
        let entry = JournalEntry::new(fixed_now(), "");
        assert!(entry.text().is_empty());
    }
}
