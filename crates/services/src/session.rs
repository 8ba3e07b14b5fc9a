use chrono::NaiveDateTime;

use mindset_core::model::QuizScore;

use crate::Clock;
use crate::journal::JournalStore;

/// State owned by one user session.
///
/// Handlers receive it by reference; nothing here outlives the session and
/// nothing is shared between sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct MindsetSession {
    started_at: NaiveDateTime,
    quiz_score: Option<QuizScore>,
    journal: JournalStore,
}

impl MindsetSession {
    /// Starts an empty session: no score yet and an empty journal.
    #[must_use]
    pub fn new(clock: &Clock) -> Self {
        Self {
            started_at: clock.now(),
            quiz_score: None,
            journal: JournalStore::new(),
        }
    }

    #[must_use]
    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    /// Score of the most recent submission, if any.
    #[must_use]
    pub fn quiz_score(&self) -> Option<QuizScore> {
        self.quiz_score
    }

    /// Replaces the stored score with the latest submission's.
    pub fn record_score(&mut self, score: QuizScore) {
        self.quiz_score = Some(score);
    }

    #[must_use]
    pub fn journal(&self) -> &JournalStore {
        &self.journal
    }

    pub(crate) fn journal_mut(&mut self) -> &mut JournalStore {
        &mut self.journal
    }
}
