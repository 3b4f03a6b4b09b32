use dioxus::prelude::*;
use mentor_core::model::{
    AssessmentLevel, LearningSession, LearningStyle, SessionId, UserProfile,
};
use mentor_core::{LearnFlow, QuizState};

use crate::context::AppContext;
use crate::views::courses::CoursesPanel;
use crate::views::onboarding::OnboardingWizard;
use crate::views::results::ResultsPanel;
use crate::views::state::ViewError;
use crate::views::trending::TrendingPanel;
use crate::vm::{map_history_cards, map_session_cards};

/// The learning flow: topic entry, assessment confirmation, generated
/// materials, session history, and the two suggestion panels.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut profile = use_signal(|| None::<UserProfile>);
    let mut sessions = use_signal(Vec::<LearningSession>::new);
    let mut flow = use_signal(LearnFlow::default);
    // Monotonic counter for in-flight requests; completions from a stale
    // generation are dropped.
    let mut generation = use_signal(|| 0u64);
    // Render key for the results subtree; bumping it remounts the quiz.
    let mut render_key = use_signal(|| 0u64);
    let mut quiz = use_signal(QuizState::new);
    let mut topic_input = use_signal(String::new);
    let mut topic_error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<ViewError>);
    let mut toast = use_signal(|| None::<String>);

    let profiles_for_load = ctx.profiles();
    let learning_for_load = ctx.learning();
    use_future(move || {
        let profiles = profiles_for_load.clone();
        let learning = learning_for_load.clone();
        async move {
            profile.set(Some(profiles.load().await.unwrap_or_default()));
            if let Ok(list) = learning.sessions().await {
                sessions.set(list);
            }
        }
    });

    let learning_for_assess = ctx.learning();
    let begin_topic = move |raw: String| {
        if flow.read().is_loading() {
            return;
        }
        match flow.write().submit_topic(&raw) {
            Err(err) => topic_error.set(Some(err.to_string())),
            Ok(()) => {
                topic_error.set(None);
                notice.set(None);
                toast.set(None);
                quiz.write().reset();
                render_key += 1;
                let gen = generation() + 1;
                generation.set(gen);
                let learning = learning_for_assess.clone();
                let snapshot = profile().unwrap_or_default();
                spawn(async move {
                    match learning.request_assessment(&raw, &snapshot).await {
                        Ok(assessment) => {
                            if generation() == gen {
                                let _ = flow.write().assessment_received(assessment);
                            }
                        }
                        Err(err) => {
                            if generation() == gen {
                                flow.write().fail();
                                notice.set(Some(ViewError::Message(err.user_message())));
                            }
                        }
                    }
                });
            }
        }
    };

    let learning_for_confirm = ctx.learning();
    let confirm = move |_| {
        let (topic, assessment) = match &*flow.read() {
            LearnFlow::AssessmentReady { topic, assessment } => (topic.clone(), *assessment),
            _ => return,
        };
        if flow.write().confirm(assessment).is_err() {
            return;
        }
        let gen = generation() + 1;
        generation.set(gen);
        let learning = learning_for_confirm.clone();
        let snapshot = profile().unwrap_or_default();
        spawn(async move {
            match learning.generate_materials(&topic, assessment, &snapshot).await {
                Ok((session, history)) => {
                    if generation() != gen {
                        return;
                    }
                    sessions.set(history);
                    quiz.write().reset();
                    render_key += 1;
                    let summary = format!(
                        "Learning {} at {} level with {} style",
                        session.topic,
                        session.assessment.level.as_str(),
                        session.assessment.style.as_str()
                    );
                    let _ = flow.write().results_received(session);
                    toast.set(Some(summary));
                    spawn(async move {
                        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                        if generation() == gen {
                            toast.set(None);
                        }
                    });
                }
                Err(err) => {
                    if generation() != gen {
                        return;
                    }
                    flow.write().fail();
                    notice.set(Some(ViewError::Message(err.user_message())));
                }
            }
        });
    };

    let mut start_over = move || {
        flow.write().reset();
        quiz.write().reset();
        render_key += 1;
        generation += 1;
        topic_input.set(String::new());
        topic_error.set(None);
        notice.set(None);
        toast.set(None);
    };

    let mut select_session = move |id: SessionId| {
        let Some(session) = sessions().into_iter().find(|session| session.id == id) else {
            return;
        };
        quiz.write().reset();
        render_key += 1;
        generation += 1;
        toast.set(None);
        notice.set(None);
        flow.write().select_session(session);
    };

    let learning_for_delete = ctx.learning();
    let delete_session = move |id: SessionId| {
        let learning = learning_for_delete.clone();
        spawn(async move {
            if let Ok((list, removed)) = learning.delete_session(id).await {
                sessions.set(list);
                if removed && flow.write().session_deleted(id) {
                    quiz.write().reset();
                    render_key += 1;
                    generation += 1;
                }
            }
        });
    };

    let Some(current_profile) = profile() else {
        return rsx! {
            div { class: "page", p { "Loading..." } }
        };
    };

    if !current_profile.has_name() {
        return rsx! {
            div { class: "page",
                OnboardingWizard {
                    on_done: move |saved: UserProfile| {
                        toast.set(Some(format!("Welcome, {}!", saved.name)));
                        profile.set(Some(saved));
                    },
                }
            }
        };
    }

    let flow_state = flow();
    let is_loading = flow_state.is_loading();
    let current_topic = match &flow_state {
        LearnFlow::ResultsReady { session } => session.topic.clone(),
        LearnFlow::AwaitingAssessment { topic }
        | LearnFlow::AssessmentReady { topic, .. }
        | LearnFlow::AwaitingResults { topic, .. } => topic.clone(),
        LearnFlow::Idle => String::new(),
    };
    let suggestion_key = format!(
        "{}|{}",
        current_profile.age.clone().unwrap_or_default(),
        current_profile.preferences.join(",")
    );
    let courses_key = format!("{suggestion_key}|{current_topic}");
    let sidebar_cards = map_session_cards(&sessions());
    let history_cards = map_history_cards(&sessions());

    let mut begin_from_form = begin_topic.clone();
    let mut begin_from_topic_click = begin_topic;
    let delete_from_sidebar = delete_session.clone();
    let delete_from_history = delete_session;

    rsx! {
        div { class: "page home-page",
            aside { class: "session-sidebar",
                button {
                    class: "btn btn-primary new-topic",
                    r#type: "button",
                    disabled: is_loading,
                    onclick: move |_| start_over(),
                    "New topic"
                }
                h3 { "Past sessions" }
                if sidebar_cards.is_empty() {
                    p { class: "empty-note", "Nothing learned yet." }
                } else {
                    ul { class: "session-list",
                        for card in sidebar_cards {
                            li { class: "session-item",
                                button {
                                    class: "session-select",
                                    r#type: "button",
                                    disabled: is_loading,
                                    onclick: {
                                        let id = card.id;
                                        move |_| select_session(id)
                                    },
                                    span { class: "session-topic", "{card.topic}" }
                                    span { class: "session-date", "{card.timestamp_str}" }
                                }
                                button {
                                    class: "session-delete",
                                    r#type: "button",
                                    title: "Delete session",
                                    onclick: {
                                        let mut delete = delete_from_sidebar.clone();
                                        let id = card.id;
                                        move |_| delete(id)
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                }
                div { class: "profile-summary",
                    p { class: "profile-name", "{current_profile.name}" }
                    p { class: "profile-age", "Age group: {current_profile.age_display()}" }
                    p { class: "profile-interests",
                        "{current_profile.preferences.len()} interests"
                    }
                    dioxus_router::Link { to: crate::routes::Route::Profile {}, "Edit profile" }
                }
            }

            div { class: "main-pane",
                if let Some(message) = toast() {
                    div { class: "toast", "{message}" }
                }
                if let Some(err) = notice() {
                    div { class: "notice notice--error", "{err.message()}" }
                }

                form {
                    class: "topic-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        begin_from_form(topic_input());
                    },
                    input {
                        class: "topic-input",
                        r#type: "text",
                        placeholder: "What do you want to learn today?",
                        value: "{topic_input()}",
                        disabled: is_loading,
                        oninput: move |evt| topic_input.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: is_loading,
                        "Learn"
                    }
                }
                if let Some(message) = topic_error() {
                    p { class: "inline-error", "{message}" }
                }

                match flow_state {
                    LearnFlow::Idle => rsx! {
                        section { class: "idle-pane",
                            h2 { "Hi {current_profile.name}, what are we learning today?" }
                            if !history_cards.is_empty() {
                                h3 { "Pick up where you left off" }
                                div { class: "history-grid",
                                    for card in history_cards {
                                        div { class: "history-card",
                                            button {
                                                class: "history-select",
                                                r#type: "button",
                                                onclick: {
                                                    let id = card.id;
                                                    move |_| select_session(id)
                                                },
                                                h4 { "{card.topic}" }
                                                p { class: "history-meta", "{card.level} · {card.style}" }
                                                p { class: "history-date", "{card.timestamp_str}" }
                                            }
                                            button {
                                                class: "session-delete",
                                                r#type: "button",
                                                title: "Delete session",
                                                onclick: {
                                                    let mut delete = delete_from_history.clone();
                                                    let id = card.id;
                                                    move |_| delete(id)
                                                },
                                                "×"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    LearnFlow::AwaitingAssessment { topic } => rsx! {
                        section { class: "loading-pane",
                            p { "Figuring out the right level for \"{topic}\"..." }
                        }
                    },
                    LearnFlow::AssessmentReady { topic, assessment } => rsx! {
                        section { class: "assessment-panel",
                            h2 { "Ready to learn about {topic}" }
                            p { "We suggest starting here. Adjust if it doesn't fit." }
                            label { r#for: "assessment-level", "Level" }
                            select {
                                id: "assessment-level",
                                value: "{assessment.level.as_str()}",
                                onchange: move |evt| {
                                    if let Ok(level) = evt.value().parse::<AssessmentLevel>() {
                                        if let LearnFlow::AssessmentReady { assessment, .. } =
                                            &mut *flow.write()
                                        {
                                            assessment.level = level;
                                        }
                                    }
                                },
                                for level in AssessmentLevel::ALL {
                                    option {
                                        value: "{level.as_str()}",
                                        selected: level == assessment.level,
                                        "{level.as_str()}"
                                    }
                                }
                            }
                            label { r#for: "assessment-style", "Learning style" }
                            select {
                                id: "assessment-style",
                                value: "{assessment.style.as_str()}",
                                onchange: move |evt| {
                                    if let Ok(style) = evt.value().parse::<LearningStyle>() {
                                        if let LearnFlow::AssessmentReady { assessment, .. } =
                                            &mut *flow.write()
                                        {
                                            assessment.style = style;
                                        }
                                    }
                                },
                                for style in LearningStyle::ALL {
                                    option {
                                        value: "{style.as_str()}",
                                        selected: style == assessment.style,
                                        "{style.as_str()}"
                                    }
                                }
                            }
                            div { class: "assessment-actions",
                                button {
                                    class: "btn",
                                    r#type: "button",
                                    onclick: move |_| start_over(),
                                    "Cancel"
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: confirm,
                                    "Start learning"
                                }
                            }
                        }
                    },
                    LearnFlow::AwaitingResults { topic, .. } => rsx! {
                        section { class: "loading-pane",
                            p { "Generating your personalized materials for \"{topic}\"..." }
                        }
                    },
                    LearnFlow::ResultsReady { session } => rsx! {
                        ResultsPanel {
                            key: "{render_key()}",
                            session,
                            interests: current_profile.preferences.clone(),
                            quiz,
                        }
                    },
                }
            }

            div { class: "side-panels",
                TrendingPanel {
                    key: "{suggestion_key}",
                    profile: current_profile.clone(),
                    disabled: is_loading,
                    on_topic: move |topic: String| {
                        topic_input.set(topic.clone());
                        begin_from_topic_click(topic);
                    },
                }
                CoursesPanel {
                    key: "{courses_key}",
                    profile: current_profile.clone(),
                    current_topic,
                }
            }
        }
    }
}
