use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Lowest percentage classified as a strong growth mindset.
pub const STRONG_THRESHOLD: f64 = 70.0;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while computing or constructing a quiz score.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("cannot score a quiz with no responses")]
    NoResponses,

    #[error("score {0} is outside 0..=100")]
    OutOfRange(f64),
}

//
// ─── LEVEL ────────────────────────────────────────────────────────────────────
//

/// Coarse classification of a score for feedback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MindsetLevel {
    /// At or above `STRONG_THRESHOLD`.
    Strong,
    Developing,
}

impl MindsetLevel {
    #[must_use]
    pub fn classify(percentage: f64) -> Self {
        if percentage >= STRONG_THRESHOLD {
            Self::Strong
        } else {
            Self::Developing
        }
    }

    #[must_use]
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::Strong)
    }
}

//
// ─── SCORE ────────────────────────────────────────────────────────────────────
//

/// Percentage of growth-aligned answers in a submission, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuizScore {
    percentage: f64,
}

impl QuizScore {
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` unless `percentage` lies in `0..=100`.
    pub fn new(percentage: f64) -> Result<Self, ScoreError> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(ScoreError::OutOfRange(percentage));
        }
        Ok(Self { percentage })
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    #[must_use]
    pub fn level(&self) -> MindsetLevel {
        MindsetLevel::classify(self.percentage)
    }
}

/// Renders at most two decimals, keeping at least one (`80.0`, `66.67`).
impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.percentage);
        let trimmed = fixed.trim_end_matches('0');
        if trimmed.ends_with('.') {
            write!(f, "{trimmed}0")
        } else {
            f.write_str(trimmed)
        }
    }
}
