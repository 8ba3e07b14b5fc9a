use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, JournalView, MotivationView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/motivation", MotivationView)] Motivation {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/results", ResultsView)] Results {},
        #[route("/journal", JournalView)] Journal {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "📚 Growth Mindset Challenge" }
            p { class: "sidebar-caption", "Go to" }
            ul {
                li { Link { to: Route::Home {}, "🏠 Home" } }
                li { Link { to: Route::Motivation {}, "💡 Daily Motivation" } }
                li { Link { to: Route::Quiz {}, "🧠 Mindset Quiz" } }
                li { Link { to: Route::Results {}, "📊 Your Results" } }
                li { Link { to: Route::Journal {}, "📓 Mindset Journal" } }
            }
        }
    }
}
