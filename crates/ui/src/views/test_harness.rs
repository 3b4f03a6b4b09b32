use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use mentor_core::model::{Assessment, Course, ResultsPayload, UserProfile};
use mentor_core::time::fixed_clock;
use services::{ApiError, LearningApi, LearningService, ProfileService, SuggestionService};
use storage::repository::Storage;
use storage::{ProfileStore, SessionStore};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{HomeView, ProfileView};

/// Backend stub for view tests: canned suggestion payloads, optional
/// wholesale failure to exercise the fallback paths.
pub struct StubApi {
    pub fail: bool,
    pub topics: Vec<String>,
    pub courses: Vec<Course>,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            fail: false,
            topics: vec!["Rust ownership".into(), "Photosynthesis".into()],
            courses: vec![Course {
                id: 1,
                title: "Intro to Everything".into(),
                platform: "TestTube".into(),
                instructor: "Jordan Reyes".into(),
                duration: "2 hours".into(),
                rating: 4.5,
                url: "https://example.com/course".into(),
                tags: vec!["General".into()],
            }],
        }
    }
}

#[async_trait]
impl LearningApi for StubApi {
    async fn assess(&self, _topic: &str, _profile: &UserProfile) -> Result<Assessment, ApiError> {
        if self.fail {
            return Err(ApiError::Backend("assessment unavailable".into()));
        }
        Ok(Assessment::default())
    }

    async fn generate(
        &self,
        topic: &str,
        assessment: Assessment,
        _profile: &UserProfile,
    ) -> Result<ResultsPayload, ApiError> {
        if self.fail {
            return Err(ApiError::Backend("generation unavailable".into()));
        }
        Ok(ResultsPayload {
            topic: topic.to_string(),
            assessment,
            explanation: "## Overview\n\nStub explanation.".into(),
            resources: Vec::new(),
            quiz: Vec::new(),
        })
    }

    async fn trending_topics(
        &self,
        limit: usize,
        _profile: &UserProfile,
    ) -> Result<Vec<String>, ApiError> {
        if self.fail {
            return Err(ApiError::Backend("trending unavailable".into()));
        }
        Ok(self.topics.iter().take(limit).cloned().collect())
    }

    async fn recommended_courses(
        &self,
        _preferences: &[String],
        _current_topic: &str,
        limit: usize,
    ) -> Result<Vec<Course>, ApiError> {
        if self.fail {
            return Err(ApiError::Backend("courses unavailable".into()));
        }
        Ok(self.courses.iter().take(limit).cloned().collect())
    }
}

struct TestApp {
    profiles: Arc<ProfileService>,
    learning: Arc<LearningService>,
    suggestions: Arc<SuggestionService>,
}

impl UiApp for TestApp {
    fn profiles(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profiles)
    }

    fn learning(&self) -> Arc<LearningService> {
        Arc::clone(&self.learning)
    }

    fn suggestions(&self) -> Arc<SuggestionService> {
        Arc::clone(&self.suggestions)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Profile,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

// Plain function component so `new_with_props` can take the props struct
// directly.
#[allow(non_snake_case)]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Profile => rsx! { ProfileView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn profile_store(&self) -> ProfileStore {
        ProfileStore::new(Arc::clone(&self.storage.kv))
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(Arc::clone(&self.storage.kv))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: StubApi) -> ViewHarness {
    let storage = Storage::in_memory();
    let clock = fixed_clock();
    let api: Arc<dyn LearningApi> = Arc::new(api);

    let profiles = Arc::new(ProfileService::new(ProfileStore::new(Arc::clone(
        &storage.kv,
    ))));
    let learning = Arc::new(LearningService::new(
        clock,
        Arc::clone(&api),
        SessionStore::new(Arc::clone(&storage.kv)),
    ));
    let suggestions = Arc::new(SuggestionService::new(api));

    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        profiles,
        learning,
        suggestions,
    });
    let context = build_app_context(&app);

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { context, view });

    ViewHarness { dom, storage }
}
