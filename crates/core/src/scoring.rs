//! Growth-mindset scoring.
//!
//! A response earns one point when its answer leans toward a growth mindset:
//! agreeing with a growth-oriented statement, or disagreeing with a
//! fixed-oriented one. The score is the share of points as a percentage,
//! rounded to two decimals.

use crate::Error;
use crate::model::{Answer, AnswerSheet, QuizQuestion, QuizResponse, QuizScore, ScoreError};

/// Points awarded for one answer to a statement with the given orientation.
#[must_use]
pub fn point(growth_oriented: bool, answer: Answer) -> u32 {
    u32::from(answer.is_growth_aligned(growth_oriented))
}

/// Scores `(is_growth_oriented, answer)` pairs.
///
/// # Errors
///
/// Returns `ScoreError::NoResponses` when `responses` is empty.
pub fn score<I>(responses: I) -> Result<f64, ScoreError>
where
    I: IntoIterator<Item = (bool, Answer)>,
{
    let (points, count) = responses
        .into_iter()
        .fold((0_u32, 0_u32), |(points, count), (growth, answer)| {
            (points + point(growth, answer), count + 1)
        });

    if count == 0 {
        return Err(ScoreError::NoResponses);
    }

    let ratio = f64::from(points) / f64::from(count);
    Ok(round_to_hundredths(ratio * 100.0))
}

/// Scores a submission and wraps the result as a `QuizScore`.
///
/// # Errors
///
/// Returns `ScoreError::NoResponses` when `responses` is empty.
pub fn score_responses(responses: &[QuizResponse<'_>]) -> Result<QuizScore, ScoreError> {
    let percentage = score(responses.iter().copied().map(<(bool, Answer)>::from))?;
    QuizScore::new(percentage)
}

/// Pairs a sheet with its questions and scores the result.
///
/// # Errors
///
/// Returns `Error::Quiz` if the sheet does not fit `questions`, and
/// `Error::Score` if there is nothing to score.
pub fn grade(sheet: &AnswerSheet, questions: &[QuizQuestion]) -> Result<QuizScore, Error> {
    let responses = sheet.responses(questions)?;
    Ok(score_responses(&responses)?)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
