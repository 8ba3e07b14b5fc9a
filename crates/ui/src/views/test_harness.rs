use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use mindset_core::time::fixed_now;
use services::{
    AppConfig, AppServices, Clock, JournalService, MindsetSession, QuizService, QuotePicker,
};

use crate::context::{AppContext, UiApp, build_app_context, provide_session};
use crate::views::journal::{JournalIntent, JournalPage, use_journal_dispatcher, use_journal_state};
use crate::views::quiz::{QuizIntent, QuizPage, use_quiz_dispatcher, use_quiz_state};
use crate::views::{HomeView, MotivationView, ResultsView};

struct TestApp {
    services: AppServices,
    session: MindsetSession,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn journal_service(&self) -> Arc<JournalService> {
        self.services.journal()
    }

    fn quote_picker(&self) -> Arc<QuotePicker> {
        self.services.quotes()
    }

    fn export_dir(&self) -> &Path {
        self.services.export_dir()
    }

    fn new_session(&self) -> MindsetSession {
        self.session.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Motivation,
    Quiz,
    Results,
    Journal,
}

/// Dispatchers captured from the rendered page so tests can act on it.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    quiz: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    journal: Rc<RefCell<Option<Callback<JournalIntent>>>>,
}

impl HarnessHandles {
    fn quiz(&self) -> Callback<QuizIntent> {
        self.quiz.borrow().clone().expect("quiz dispatch registered")
    }

    fn journal(&self) -> Callback<JournalIntent> {
        self.journal.borrow().clone().expect("journal dispatch registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let ctx = use_context_provider(|| props.context.clone());
    provide_session(&ctx);
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Root {} }
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Motivation => rsx! { MotivationView {} },
        ViewKind::Quiz => rsx! { QuizHarness {} },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::Journal => rsx! { JournalHarness {} },
    }
}

#[component]
fn QuizHarness() -> Element {
    let handles = use_context::<HarnessHandles>();
    let state = use_quiz_state();
    let dispatch = use_quiz_dispatcher(state);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.quiz.borrow_mut() = Some(dispatch);
    }
    rsx! { QuizPage { state, dispatch } }
}

#[component]
fn JournalHarness() -> Element {
    let handles = use_context::<HarnessHandles>();
    let state = use_journal_state();
    let dispatch = use_journal_dispatcher(state);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.journal.borrow_mut() = Some(dispatch);
    }
    rsx! { JournalPage { state, dispatch } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn quiz(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.quiz();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn journal(&mut self, intent: JournalIntent) {
        let dispatch = self.handles.journal();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Services on a fixed clock with a seeded quote picker.
pub fn test_services(export_dir: PathBuf) -> AppServices {
    let config = AppConfig {
        export_dir,
        quote_seed: Some(5),
    };
    AppServices::new(config, Clock::fixed(fixed_now()))
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = test_services(PathBuf::from("."));
    let session = services.new_session();
    setup_view_harness_with_session(view, services, session)
}

pub fn setup_view_harness_with_session(
    view: ViewKind,
    services: AppServices,
    session: MindsetSession,
) -> ViewHarness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp { services, session });
    let context = build_app_context(&app);
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            context,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
