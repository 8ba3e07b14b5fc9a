use mindset_core::model::{Answer, AnswerSheet, QuizQuestion};
use services::QuizOutcome;

pub const STRONG_MESSAGE: &str = "🎉 You're cultivating a strong growth mindset!";
pub const DEVELOPING_MESSAGE: &str = "✨ Keep learning and reflecting to shift your mindset!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub index: usize,
    pub text: &'static str,
    /// Radio group name; unique per question.
    pub group: String,
    pub selected: Answer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFeedbackVm {
    pub headline: String,
    pub message: &'static str,
    pub celebrate: bool,
}

#[must_use]
pub fn map_quiz_questions(questions: &[QuizQuestion], sheet: &AnswerSheet) -> Vec<QuizQuestionVm> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuizQuestionVm {
            index,
            text: question.text(),
            group: format!("quiz-q{index}"),
            selected: sheet.answer(index).unwrap_or_default(),
        })
        .collect()
}

#[must_use]
pub fn map_quiz_feedback(outcome: &QuizOutcome) -> QuizFeedbackVm {
    let celebrate = outcome.level.is_strong();
    QuizFeedbackVm {
        headline: format!("Your Growth Mindset Score: {}%", outcome.score),
        message: if celebrate {
            STRONG_MESSAGE
        } else {
            DEVELOPING_MESSAGE
        },
        celebrate,
    }
}
