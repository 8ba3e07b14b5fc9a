use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::prelude::*;
use services::{JournalService, MindsetSession, QuizService, QuotePicker};

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
    fn journal_service(&self) -> Arc<JournalService>;
    fn quote_picker(&self) -> Arc<QuotePicker>;

    fn export_dir(&self) -> &Path;
    fn new_session(&self) -> MindsetSession;
}

#[derive(Clone)]
pub struct AppContext {
    export_dir: PathBuf,
    initial_session: MindsetSession,

    quiz_service: Arc<QuizService>,
    journal_service: Arc<JournalService>,
    quote_picker: Arc<QuotePicker>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            export_dir: app.export_dir().to_path_buf(),
            initial_session: app.new_session(),
            quiz_service: app.quiz_service(),
            journal_service: app.journal_service(),
            quote_picker: app.quote_picker(),
        }
    }

    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Session state the window starts with. Each window owns its own copy.
    #[must_use]
    pub fn initial_session(&self) -> MindsetSession {
        self.initial_session.clone()
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn journal_service(&self) -> Arc<JournalService> {
        Arc::clone(&self.journal_service)
    }

    #[must_use]
    pub fn quote_picker(&self) -> Arc<QuotePicker> {
        Arc::clone(&self.quote_picker)
    }
}

/// Snapshots the services and starting session a window renders against.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Installs this window's session state. Call once, from the root component.
pub fn provide_session(ctx: &AppContext) -> Signal<MindsetSession> {
    use_context_provider(|| Signal::new(ctx.initial_session()))
}

/// The session state installed by `provide_session`.
#[must_use]
pub fn use_session() -> Signal<MindsetSession> {
    use_context::<Signal<MindsetSession>>()
}
