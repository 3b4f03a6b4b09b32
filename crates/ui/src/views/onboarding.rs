use dioxus::prelude::*;
use mentor_core::model::UserProfile;

use crate::context::AppContext;

/// Three-step first-run wizard: name (required), age, interests. Saving
/// persists the profile and hands it back to the caller.
#[component]
pub fn OnboardingWizard(on_done: EventHandler<UserProfile>) -> Element {
    let ctx = use_context::<AppContext>();

    let mut step = use_signal(|| 1u8);
    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut interests = use_signal(Vec::<String>::new);
    let mut interest_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let mut add_interest = move || {
        let value = interest_input().trim().to_string();
        if value.is_empty() {
            return;
        }
        if !interests().iter().any(|existing| existing == &value) {
            interests.write().push(value);
        }
        interest_input.set(String::new());
    };

    let profiles = ctx.profiles();
    let finish = move |_| {
        if saving() {
            return;
        }
        let profiles = profiles.clone();
        spawn(async move {
            saving.set(true);
            let result = profiles
                .update(&name(), Some(age()), interests())
                .await;
            saving.set(false);
            match result {
                Ok(profile) => on_done.call(profile),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "onboarding",
            h2 { "Welcome to Mentor" }
            p { class: "onboarding-step-label", "Step {step()} of 3" }

            if let Some(message) = error() {
                p { class: "inline-error", "{message}" }
            }

            match step() {
                1 => rsx! {
                    label { r#for: "onboarding-name", "What should we call you?" }
                    input {
                        id: "onboarding-name",
                        r#type: "text",
                        placeholder: "Your name",
                        value: "{name()}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    div { class: "wizard-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                if name().trim().is_empty() {
                                    error.set(Some("Please enter your name".to_string()));
                                } else {
                                    error.set(None);
                                    step.set(2);
                                }
                            },
                            "Next"
                        }
                    }
                },
                2 => rsx! {
                    label { r#for: "onboarding-age", "How old are you? (optional)" }
                    input {
                        id: "onboarding-age",
                        r#type: "text",
                        placeholder: "Age",
                        value: "{age()}",
                        oninput: move |evt| age.set(evt.value()),
                    }
                    div { class: "wizard-actions",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| step.set(1),
                            "Back"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| step.set(3),
                            "Next"
                        }
                    }
                },
                _ => rsx! {
                    label { r#for: "onboarding-interest", "What do you like learning about? (optional)" }
                    div { class: "interest-entry",
                        input {
                            id: "onboarding-interest",
                            r#type: "text",
                            placeholder: "e.g. Math, Music, Space",
                            value: "{interest_input()}",
                            oninput: move |evt| interest_input.set(evt.value()),
                            onkeydown: move |evt| {
                                if evt.key() == Key::Enter {
                                    add_interest();
                                }
                            },
                        }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| add_interest(),
                            "Add"
                        }
                    }
                    div { class: "chip-row",
                        for (index, interest) in interests().into_iter().enumerate() {
                            span { class: "chip",
                                "{interest}"
                                button {
                                    class: "chip-remove",
                                    r#type: "button",
                                    onclick: move |_| {
                                        interests.write().remove(index);
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                    div { class: "wizard-actions",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| step.set(2),
                            "Back"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: saving(),
                            onclick: finish,
                            if saving() { "Saving..." } else { "Start learning" }
                        }
                    }
                },
            }
        }
    }
}
