use tracing::info;

use mindset_core::catalog;
use mindset_core::model::{AnswerSheet, MindsetLevel, QuizQuestion, QuizScore};
use mindset_core::scoring;

use crate::error::{QuizServiceError, ResultsError};
use crate::session::MindsetSession;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// What the quiz page shows right after a submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizOutcome {
    pub score: QuizScore,
    pub level: MindsetLevel,
}

/// What the results page shows for the stored score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreReport {
    pub score: QuizScore,
    pub level: MindsetLevel,
    /// Whether to show the improvement tip (developing scores only).
    pub show_tip: bool,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Handlers for the quiz and results pages.
#[derive(Debug, Clone)]
pub struct QuizService {
    questions: &'static [QuizQuestion],
}

impl Default for QuizService {
    fn default() -> Self {
        Self::new(catalog::quiz_questions())
    }
}

impl QuizService {
    #[must_use]
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    /// A fresh sheet with the default answer selected for every question.
    #[must_use]
    pub fn blank_sheet(&self) -> AnswerSheet {
        AnswerSheet::new(self.questions.len())
    }

    /// Scores `sheet` and stores the result in the session, replacing any
    /// earlier score.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the sheet does not match the
    /// question set, or `QuizServiceError::Score` if there is nothing to score.
    /// The session is left untouched on error.
    pub fn submit(
        &self,
        session: &mut MindsetSession,
        sheet: &AnswerSheet,
    ) -> Result<QuizOutcome, QuizServiceError> {
        let score = scoring::grade(sheet, self.questions)?;
        let level = score.level();
        session.record_score(score);

        info!(score = score.percentage(), ?level, "quiz submitted");
        Ok(QuizOutcome { score, level })
    }

    /// Reads back the most recent score for the results page.
    ///
    /// # Errors
    ///
    /// Returns `ResultsError::MissingScore` before the first submission.
    pub fn report(&self, session: &MindsetSession) -> Result<ScoreReport, ResultsError> {
        let score = session.quiz_score().ok_or(ResultsError::MissingScore)?;
        let level = score.level();
        Ok(ScoreReport {
            score,
            level,
            show_tip: !level.is_strong(),
        })
    }
}
