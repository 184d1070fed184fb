use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::map_stats;

#[component]
pub fn StatsView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        async move {
            let stats = quiz_loop.stats().await.map_err(|err| {
                log::warn!("stats fetch failed: {err}");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(map_stats(&stats))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page stats-page",
            header { class: "view-header",
                h2 { class: "view-title", "Stats" }
                p { class: "view-subtitle", "Lifetime answer statistics." }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(stats) => rsx! {
                    div { class: "stats-summary",
                        p { class: "stats-line", "{stats.answered_label}" }
                        p { class: "stats-line", "{stats.accuracy_label}" }
                        p { class: "stats-line", "{stats.timing_label}" }
                        p { class: "stats-line", "{stats.range_label}" }
                        p { class: "stats-line", "{stats.jp_to_en_label}" }
                        p { class: "stats-line", "{stats.en_to_jp_label}" }
                    }
                    h3 { "Last 7 days" }
                    if stats.recent.is_empty() {
                        p { class: "stats-empty", "No answers recorded this week." }
                    } else {
                        ul { class: "stats-recent",
                            for row in stats.recent.iter() {
                                li { class: "stats-row",
                                    span { class: "stats-date", "{row.date_label}" }
                                    " {row.counts_label}"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
