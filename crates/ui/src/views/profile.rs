use dioxus::prelude::*;

use crate::context::AppContext;

/// Profile editor: name, age, and the interest list that drives relevance
/// highlighting and suggestion personalization.
#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut loaded = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut interests = use_signal(Vec::<String>::new);
    let mut interest_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut saved_notice = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let profiles_for_load = ctx.profiles();
    use_future(move || {
        let profiles = profiles_for_load.clone();
        async move {
            let profile = profiles.load().await.unwrap_or_default();
            name.set(profile.name);
            age.set(profile.age.unwrap_or_default());
            interests.set(profile.preferences);
            loaded.set(true);
        }
    });

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

    let profiles_for_save = ctx.profiles();
    let save = move |_| {
        if saving() {
            return;
        }
        let profiles = profiles_for_save.clone();
        spawn(async move {
            saving.set(true);
            saved_notice.set(false);
            let result = profiles.update(&name(), Some(age()), interests()).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    error.set(None);
                    saved_notice.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "page profile-page",
            h2 { "Your profile" }

            if !loaded() {
                p { "Loading..." }
            } else {
                if let Some(message) = error() {
                    p { class: "inline-error", "{message}" }
                }
                if saved_notice() {
                    p { class: "saved-notice", "Profile saved." }
                }

                label { r#for: "profile-name", "Name" }
                input {
                    id: "profile-name",
                    r#type: "text",
                    value: "{name()}",
                    oninput: move |evt| name.set(evt.value()),
                }

                label { r#for: "profile-age", "Age (optional)" }
                input {
                    id: "profile-age",
                    r#type: "text",
                    value: "{age()}",
                    oninput: move |evt| age.set(evt.value()),
                }

                label { r#for: "profile-interest", "Interests" }
                div { class: "interest-entry",
                    input {
                        id: "profile-interest",
                        r#type: "text",
                        placeholder: "Add an interest",
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

                div { class: "profile-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: saving(),
                        onclick: save,
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
