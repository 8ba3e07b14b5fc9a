mod journal_vm;
mod markdown_vm;
mod quiz_vm;
mod results_vm;

pub use journal_vm::{JournalRowVm, map_journal_rows};
pub use markdown_vm::markdown_to_html;
pub use quiz_vm::{QuizFeedbackVm, QuizQuestionVm, map_quiz_feedback, map_quiz_questions};
pub use results_vm::{ResultsVm, map_results};
