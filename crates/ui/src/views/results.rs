use dioxus::prelude::*;

use crate::context::{AppContext, use_session};
use crate::vm::{ResultsVm, map_results};

const MISSING_SCORE_WARNING: &str = "Please take the quiz first!";

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let results = ctx
        .quiz_service()
        .report(&session.read())
        .map(|report| map_results(&report));

    rsx! {
        div { class: "page results-page",
            header { class: "view-header",
                h2 { class: "view-title", "📊 Growth Mindset Score" }
            }
            div { class: "view-divider" }
            match results {
                Ok(vm) => rsx! {
                    ScoreDetails { vm }
                },
                Err(_) => rsx! {
                    div { class: "callout callout-warning", "{MISSING_SCORE_WARNING}" }
                },
            }
        }
    }
}

#[component]
fn ScoreDetails(vm: ResultsVm) -> Element {
    rsx! {
        div { class: "metric",
            span { class: "metric-label", "Your Score" }
            span { class: "metric-value", "{vm.score_label}" }
        }

        // Single-bar chart on a fixed 0-100 axis.
        div { class: "chart",
            div { class: "chart-axis",
                span { "100" }
                span { "50" }
                span { "0" }
            }
            div { class: "chart-plot",
                div { class: "chart-bar", style: "height: {vm.bar_percent}%;" }
            }
            div { class: "chart-label", "Growth Mindset" }
        }

        match vm.tip {
            Some(tip) => rsx! {
                div { class: "callout callout-info", "{tip}" }
            },
            None => rsx! {},
        }
    }
}
