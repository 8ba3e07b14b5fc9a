use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while assembling answers for a question set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {index} is out of range for a quiz of {len} questions")]
    UnknownQuestion { index: usize, len: usize },

    #[error("answer sheet has {actual} answers but the quiz has {expected} questions")]
    SheetMismatch { expected: usize, actual: usize },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single self-assessment statement.
///
/// `growth_oriented` records which way agreeing points: `true` when agreeing
/// indicates a growth mindset, `false` when agreeing indicates a fixed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    text: &'static str,
    growth_oriented: bool,
}

impl QuizQuestion {
    #[must_use]
    pub const fn new(text: &'static str, growth_oriented: bool) -> Self {
        Self {
            text,
            growth_oriented,
        }
    }

    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub const fn is_growth_oriented(&self) -> bool {
        self.growth_oriented
    }
}

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// Two-way response to a quiz statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    #[default]
    Agree,
    Disagree,
}

impl Answer {
    /// Both answers in the order they are offered.
    pub const ALL: [Answer; 2] = [Answer::Agree, Answer::Disagree];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Answer::Agree => "Agree",
            Answer::Disagree => "Disagree",
        }
    }

    /// Returns true when this answer points toward a growth mindset for a
    /// statement with the given orientation.
    #[must_use]
    pub const fn is_growth_aligned(self, growth_oriented: bool) -> bool {
        matches!(
            (self, growth_oriented),
            (Answer::Agree, true) | (Answer::Disagree, false)
        )
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── RESPONSE ─────────────────────────────────────────────────────────────────
//

/// A question paired with the answer given to it in one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResponse<'q> {
    pub question: &'q QuizQuestion,
    pub answer: Answer,
}

impl<'q> QuizResponse<'q> {
    #[must_use]
    pub fn new(question: &'q QuizQuestion, answer: Answer) -> Self {
        Self { question, answer }
    }
}

impl From<QuizResponse<'_>> for (bool, Answer) {
    fn from(response: QuizResponse<'_>) -> Self {
        (response.question.is_growth_oriented(), response.answer)
    }
}

//
// ─── ANSWER SHEET ─────────────────────────────────────────────────────────────
//

/// The answers currently selected for a question set, one per question.
///
/// Every question starts on `Answer::Agree`, the first offered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    /// Creates a sheet with the default answer for each of `len` questions.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            answers: vec![Answer::default(); len],
        }
    }

    /// Creates a sheet from explicit answers.
    #[must_use]
    pub fn from_answers(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<Answer> {
        self.answers.get(index).copied()
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Selects an answer for the question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownQuestion` if `index` is past the end of the sheet.
    pub fn set(&mut self, index: usize, answer: Answer) -> Result<(), QuizError> {
        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(QuizError::UnknownQuestion { index, len })?;
        *slot = answer;
        Ok(())
    }

    /// Pairs each question with the answer selected for it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SheetMismatch` if the sheet was built for a
    /// different number of questions.
    pub fn responses<'q>(
        &self,
        questions: &'q [QuizQuestion],
    ) -> Result<Vec<QuizResponse<'q>>, QuizError> {
        if questions.len() != self.answers.len() {
            return Err(QuizError::SheetMismatch {
                expected: questions.len(),
                actual: self.answers.len(),
            });
        }

        Ok(questions
            .iter()
            .zip(self.answers.iter().copied())
            .map(|(question, answer)| QuizResponse::new(question, answer))
            .collect())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
