use dioxus::prelude::*;
use mentor_core::model::UserProfile;
use services::DEFAULT_COURSE_LIMIT;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Recommended-courses panel. Keyed by the parent on interests and the
/// current topic so either change triggers a fresh fetch.
#[component]
pub fn CoursesPanel(profile: UserProfile, current_topic: String) -> Element {
    let ctx = use_context::<AppContext>();
    let suggestions = ctx.suggestions();

    let mut refresh_count = use_signal(|| 0u32);

    let profile_for_fetch = profile.clone();
    let topic_for_fetch = current_topic.clone();
    let resource = use_resource(move || {
        let suggestions = suggestions.clone();
        let profile = profile_for_fetch.clone();
        let topic = topic_for_fetch.clone();
        let _count = refresh_count();
        async move {
            Ok::<_, ViewError>(
                suggestions
                    .courses(&profile, &topic, DEFAULT_COURSE_LIMIT)
                    .await,
            )
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        aside { class: "panel courses-panel",
            header { class: "panel-header",
                h3 { "Recommended courses" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| refresh_count += 1,
                    "Refresh"
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { class: "panel-loading", "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "panel-loading", "Loading courses..." }
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
                ViewState::Ready(courses) => rsx! {
                    if courses.fallback {
                        p { class: "panel-warning",
                            "Recommendations are offline right now; showing a starter list."
                        }
                    }
                    ul { class: "course-list",
                        for course in courses.items {
                            li { class: "course-card",
                                a {
                                    href: "{course.url}",
                                    target: "_blank",
                                    class: "course-title",
                                    "{course.title}"
                                }
                                p { class: "course-meta", "{course.platform} · {course.instructor}" }
                                p { class: "course-meta", "{course.duration} · ★ {course.rating}" }
                                if !course.tags.is_empty() {
                                    div { class: "chip-row",
                                        for tag in course.tags {
                                            span { class: "chip chip--tag", "{tag}" }
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
