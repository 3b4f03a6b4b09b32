use dioxus::prelude::*;
use mentor_core::model::UserProfile;
use mentor_core::relevance::is_relevant;
use services::DEFAULT_TRENDING_LIMIT;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Trending-topics sidebar panel. The parent keys this component on the
/// profile's age and interests so edits trigger a fresh fetch.
#[component]
pub fn TrendingPanel(
    profile: UserProfile,
    disabled: bool,
    on_topic: EventHandler<String>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let suggestions = ctx.suggestions();

    // Cosmetic refresh counter; reading it inside the resource closure makes
    // the refresh button re-run the fetch.
    let mut refresh_count = use_signal(|| 0u32);

    let profile_for_fetch = profile.clone();
    let resource = use_resource(move || {
        let suggestions = suggestions.clone();
        let profile = profile_for_fetch.clone();
        let _count = refresh_count();
        async move {
            Ok::<_, ViewError>(suggestions.trending(&profile, DEFAULT_TRENDING_LIMIT).await)
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        aside { class: "panel trending-panel",
            header { class: "panel-header",
                h3 { "Hot topics" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    title: "Refreshed {refresh_count()} times",
                    onclick: move |_| refresh_count += 1,
                    "Refresh"
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { class: "panel-loading", "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "panel-loading", "Loading topics..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "panel-warning", "{err.message()}" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(topics) => rsx! {
                    if topics.fallback {
                        p { class: "panel-warning",
                            "Suggestions are offline right now; showing local picks."
                        }
                    }
                    ul { class: "topic-list",
                        for topic in topics.items {
                            {
                                let matches_interest = profile
                                    .preferences
                                    .iter()
                                    .any(|interest| is_relevant(&topic, interest));
                                let class = if matches_interest {
                                    "topic-item topic-item--match"
                                } else {
                                    "topic-item"
                                };
                                let topic_for_click = topic.clone();
                                rsx! {
                                    li {
                                        button {
                                            class,
                                            r#type: "button",
                                            disabled,
                                            onclick: move |_| on_topic.call(topic_for_click.clone()),
                                            "{topic}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
