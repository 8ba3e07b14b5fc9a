use dioxus::prelude::*;
use tracing::warn;

use crate::context::{AppContext, use_session};
use crate::views::ViewError;
use crate::vm::{JournalRowVm, map_journal_rows};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Written(String),
    Failed(ViewError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JournalIntent {
    EditDraft(String),
    Save,
    Export,
}

#[derive(Clone, Copy, PartialEq)]
pub struct JournalState {
    pub draft: Signal<String>,
    pub saved: Signal<bool>,
    pub export_state: Signal<ExportState>,
}

pub fn use_journal_state() -> JournalState {
    JournalState {
        draft: use_signal(String::new),
        saved: use_signal(|| false),
        export_state: use_signal(|| ExportState::Idle),
    }
}

pub fn use_journal_dispatcher(state: JournalState) -> Callback<JournalIntent> {
    let ctx = use_context::<AppContext>();
    let journal = ctx.journal_service();
    let export_dir = ctx.export_dir().to_path_buf();
    let mut session = use_session();
    let JournalState {
        mut draft,
        mut saved,
        mut export_state,
    } = state;

    use_callback(move |intent: JournalIntent| match intent {
        JournalIntent::EditDraft(text) => {
            draft.set(text);
            saved.set(false);
        }
        JournalIntent::Save => {
            journal.save_entry(&mut session.write(), &draft.read());
            saved.set(true);
            export_state.set(ExportState::Idle);
        }
        JournalIntent::Export => {
            let written = journal
                .export(&session.read())
                .and_then(|export| export.write_to(&export_dir));
            match written {
                Ok(path) => export_state.set(ExportState::Written(path.display().to_string())),
                Err(err) => {
                    warn!(%err, "journal export failed");
                    export_state.set(ExportState::Failed(ViewError::ExportFailed));
                }
            }
        }
    })
}

#[component]
pub fn JournalView() -> Element {
    let state = use_journal_state();
    let dispatch = use_journal_dispatcher(state);
    rsx! { JournalPage { state, dispatch } }
}

#[component]
pub fn JournalPage(state: JournalState, dispatch: Callback<JournalIntent>) -> Element {
    let session = use_session();
    let rows = map_journal_rows(session.read().journal().list());
    let draft = state.draft;
    let saved = state.saved;
    let export_state = state.export_state;

    rsx! {
        div { class: "page journal-page",
            header { class: "view-header",
                h2 { class: "view-title", "📓 Reflect in Your Mindset Journal" }
            }
            div { class: "view-divider" }
            label { class: "field-label", r#for: "journal-draft",
                "Write about a challenge you faced and what you learned:"
            }
            textarea {
                id: "journal-draft",
                class: "journal-draft",
                rows: "6",
                value: "{draft}",
                oninput: move |evt| dispatch.call(JournalIntent::EditDraft(evt.value())),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dispatch.call(JournalIntent::Save),
                "Save Entry"
            }
            if saved() {
                div { class: "callout callout-success", "✅ Entry saved!" }
            }

            if !rows.is_empty() {
                h3 { "📝 Past Entries" }
                EntriesTable { rows }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(JournalIntent::Export),
                    "📥 Download Journal"
                }
            }

            match export_state() {
                ExportState::Idle => rsx! {},
                ExportState::Written(path) => rsx! {
                    p { class: "export-status", "Saved {path}" }
                },
                ExportState::Failed(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn EntriesTable(rows: Vec<JournalRowVm>) -> Element {
    rsx! {
        table { class: "journal-table",
            thead {
                tr {
                    th { "date" }
                    th { "entry" }
                }
            }
            tbody {
                for (position, row) in rows.iter().enumerate() {
                    tr { key: "{position}",
                        td { class: "journal-date", "{row.date}" }
                        td { class: "journal-text", "{row.entry}" }
                    }
                }
            }
        }
    }
}
