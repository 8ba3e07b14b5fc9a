use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn MotivationView() -> Element {
    let ctx = use_context::<AppContext>();
    let picker = ctx.quote_picker();
    let mut quote = use_signal({
        let picker = picker.clone();
        move || picker.pick()
    });

    rsx! {
        div { class: "page motivation-page",
            header { class: "view-header",
                h2 { class: "view-title", "💡 Today's Growth Mindset Quote" }
            }
            div { class: "view-divider" }
            match quote() {
                Some(text) => rsx! {
                    div { class: "callout callout-success", "{text}" }
                },
                None => rsx! {
                    p { "No quotes available." }
                },
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| quote.set(picker.pick()),
                "Another quote"
            }
        }
    }
}
