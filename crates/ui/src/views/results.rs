use dioxus::prelude::*;
use mentor_core::QuizState;
use mentor_core::model::LearningSession;
use mentor_core::relevance::relevant_interests;

use crate::vm::render_explanation;

/// Generated materials for one session: relevance chips, the explanation,
/// resources, and the quiz. The parent keys this component on its render
/// generation so quiz state restarts clean when the results change.
#[component]
pub fn ResultsPanel(
    session: LearningSession,
    interests: Vec<String>,
    mut quiz: Signal<QuizState>,
) -> Element {
    let matching = relevant_interests(&session.topic, &interests);
    let explanation_html = render_explanation(&session.results.explanation, &interests);
    let questions = session.results.quiz.clone();
    let total_questions = questions.len();

    rsx! {
        section { class: "results",
            header { class: "results-header",
                h2 { "{session.topic}" }
                p { class: "results-meta",
                    "{session.assessment.level.as_str()} level · {session.assessment.style.as_str()} style"
                }
                if !matching.is_empty() {
                    div { class: "chip-row",
                        span { class: "chip-label", "Connected to your interests:" }
                        for interest in matching {
                            span { class: "chip chip--match", "{interest}" }
                        }
                    }
                }
            }

            article {
                class: "explanation markdown",
                dangerous_inner_html: "{explanation_html}",
            }

            section { class: "resources",
                h3 { "Resources" }
                if session.results.resources.is_empty() {
                    p { class: "empty-note", "No additional resources for this topic." }
                } else {
                    ul {
                        for resource in session.results.resources.clone() {
                            li { class: "resource-item",
                                a { href: "{resource.url}", target: "_blank", "{resource.title}" }
                                if !resource.summary.is_empty() {
                                    p { class: "resource-summary", "{resource.summary}" }
                                }
                            }
                        }
                    }
                }
            }

            if !questions.is_empty() {
                section { class: "quiz",
                    h3 { "Check your understanding" }
                    for (question_index, question) in questions.clone().into_iter().enumerate() {
                        div { class: "quiz-question",
                            p { class: "quiz-prompt", "{question_index + 1}. {question.question}" }
                            div { class: "quiz-options",
                                for (option_index, option) in question.options.clone().into_iter().enumerate() {
                                    {
                                        let state = quiz.read();
                                        let chosen = state.answer(question_index)
                                            == Some(option_index.to_string().as_str());
                                        let mut class = String::from("quiz-option");
                                        if chosen {
                                            class.push_str(" quiz-option--chosen");
                                        }
                                        if state.show_results() {
                                            if option_index == question.correct_answer {
                                                class.push_str(" quiz-option--correct");
                                            } else if chosen {
                                                class.push_str(" quiz-option--incorrect");
                                            }
                                        }
                                        let locked = state.is_locked(question_index);
                                        let revealed = state.show_results();
                                        drop(state);
                                        rsx! {
                                            button {
                                                class: "{class}",
                                                r#type: "button",
                                                disabled: locked || revealed,
                                                onclick: move |_| {
                                                    quiz.write().select(question_index, option_index);
                                                },
                                                "{option}"
                                            }
                                        }
                                    }
                                }
                            }
                            if quiz.read().show_results() {
                                {
                                    let correct = quiz.read().is_correct(question_index, &question);
                                    let answer_text = question.correct_option().unwrap_or("").to_string();
                                    rsx! {
                                        if correct {
                                            p { class: "quiz-feedback quiz-feedback--correct", "Correct!" }
                                        } else {
                                            p { class: "quiz-feedback quiz-feedback--incorrect",
                                                "Not quite. The answer is: {answer_text}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if quiz.read().show_results() {
                        {
                            let state = quiz.read();
                            let percent = state.score_percent().unwrap_or(0);
                            let passed = state.passed();
                            drop(state);
                            let class = if passed {
                                "quiz-score quiz-score--pass"
                            } else {
                                "quiz-score quiz-score--retry"
                            };
                            let note = if passed {
                                "Great job!"
                            } else {
                                "Keep practicing, you're getting there."
                            };
                            rsx! {
                                p { class: "{class}", "You scored {percent}%. {note}" }
                            }
                        }
                    } else {
                        {
                            let answered = quiz.read().answered_count();
                            rsx! {
                                button {
                                    class: "btn btn-primary quiz-check",
                                    r#type: "button",
                                    disabled: answered != total_questions,
                                    onclick: move |_| {
                                        quiz.write().check(&questions);
                                    },
                                    "Check Answers ({answered}/{total_questions})"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
