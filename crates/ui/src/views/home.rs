use dioxus::prelude::*;
use mindset_core::catalog::HOME_MARKDOWN;

use crate::vm::markdown_to_html;

#[component]
pub fn HomeView() -> Element {
    let body = use_hook(|| markdown_to_html(HOME_MARKDOWN));

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "🌱 Growth Mindset Challenge" }
            }
            div { class: "view-divider" }
            div { class: "markdown", dangerous_inner_html: "{body}" }
        }
    }
}
