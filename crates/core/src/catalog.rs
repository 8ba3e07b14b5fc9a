//! Static content shipped with the app: quiz statements, quotes and the
//! welcome text.

use crate::model::QuizQuestion;

/// The self-assessment statements, in the order they are asked.
pub const QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion::new("I believe intelligence can be developed.", true),
    QuizQuestion::new("When I fail, I see it as a chance to grow.", true),
    QuizQuestion::new("I avoid challenges because I'm afraid to fail.", false),
    QuizQuestion::new("Effort is more important than talent.", true),
    QuizQuestion::new("I take criticism personally.", false),
];

/// Motivational quotes offered on the daily motivation page.
pub const QUOTES: [&str; 6] = [
    "Mistakes are proof that you're trying.",
    "Your brain is like a muscle—the more you use it, the stronger it gets.",
    "Failure is not the opposite of success, it's part of success.",
    "Effort is the path to mastery.",
    "I can learn anything I want to.",
    "I grow when I challenge myself.",
];

/// Welcome copy for the home page, as Markdown.
pub const HOME_MARKDOWN: &str = "\
Welcome to the Growth Mindset Challenge app!
This app is designed to help you:
- Understand what a growth mindset is
- Track your mindset habits
- Reflect through journaling
- Stay motivated daily

### What is a Growth Mindset?
A belief that abilities and intelligence can be developed through dedication and effort.
";

#[must_use]
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUIZ_QUESTIONS
}

#[must_use]
pub fn quotes() -> &'static [&'static str] {
    &QUOTES
}
