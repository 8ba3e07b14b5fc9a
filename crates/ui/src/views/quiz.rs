use dioxus::prelude::*;
use mindset_core::model::{Answer, AnswerSheet};
use tracing::warn;

use crate::context::{AppContext, use_session};
use crate::views::ViewError;
use crate::vm::{QuizFeedbackVm, QuizQuestionVm, map_quiz_feedback, map_quiz_questions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose { index: usize, answer: Answer },
    Submit,
}

#[derive(Clone, Copy, PartialEq)]
pub struct QuizState {
    pub sheet: Signal<AnswerSheet>,
    pub feedback: Signal<Option<QuizFeedbackVm>>,
    pub error: Signal<Option<ViewError>>,
}

pub fn use_quiz_state() -> QuizState {
    let ctx = use_context::<AppContext>();
    let sheet = use_signal(move || ctx.quiz_service().blank_sheet());
    let feedback = use_signal(|| None::<QuizFeedbackVm>);
    let error = use_signal(|| None::<ViewError>);
    QuizState {
        sheet,
        feedback,
        error,
    }
}

pub fn use_quiz_dispatcher(state: QuizState) -> Callback<QuizIntent> {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();
    let mut session = use_session();
    let QuizState {
        mut sheet,
        mut feedback,
        mut error,
    } = state;

    use_callback(move |intent: QuizIntent| match intent {
        QuizIntent::Choose { index, answer } => {
            if let Err(err) = sheet.write().set(index, answer) {
                warn!(%err, "answer rejected");
                error.set(Some(ViewError::InvalidAnswers));
            }
        }
        QuizIntent::Submit => match quiz.submit(&mut session.write(), &sheet.read()) {
            Ok(outcome) => {
                feedback.set(Some(map_quiz_feedback(&outcome)));
                error.set(None);
            }
            Err(err) => {
                warn!(%err, "quiz submission rejected");
                feedback.set(None);
                error.set(Some(ViewError::InvalidAnswers));
            }
        },
    })
}

#[component]
pub fn QuizView() -> Element {
    let state = use_quiz_state();
    let dispatch = use_quiz_dispatcher(state);
    rsx! { QuizPage { state, dispatch } }
}

#[component]
pub fn QuizPage(state: QuizState, dispatch: Callback<QuizIntent>) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();
    let rows = map_quiz_questions(quiz.questions(), &state.sheet.read());
    let feedback = state.feedback;
    let error = state.error;

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "🧠 Self-Assessment: Growth Mindset" }
                p { class: "view-subtitle", "Answer the following questions honestly:" }
            }
            div { class: "view-divider" }
            div { class: "quiz-questions",
                for row in rows {
                    QuestionRow { key: "{row.group}", row: row.clone(), dispatch }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizIntent::Submit),
                "Get My Score"
            }
            match feedback() {
                Some(feedback) => rsx! {
                    QuizFeedback { feedback }
                },
                None => rsx! {},
            }
            match error() {
                Some(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn QuestionRow(row: QuizQuestionVm, dispatch: Callback<QuizIntent>) -> Element {
    let index = row.index;

    rsx! {
        fieldset { class: "quiz-question",
            legend { "{row.text}" }
            for answer in Answer::ALL {
                label { key: "{answer}", class: "quiz-choice",
                    input {
                        r#type: "radio",
                        name: "{row.group}",
                        value: answer.label(),
                        checked: row.selected == answer,
                        onchange: move |_| dispatch.call(QuizIntent::Choose { index, answer }),
                    }
                    "{answer}"
                }
            }
        }
    }
}

#[component]
fn QuizFeedback(feedback: QuizFeedbackVm) -> Element {
    rsx! {
        div { class: "quiz-feedback",
            div { class: "callout callout-success", "{feedback.headline}" }
            if feedback.celebrate {
                div { class: "celebrate", "🎈 🎈 🎈" }
            }
            p { "{feedback.message}" }
        }
    }
}
