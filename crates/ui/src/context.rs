use std::sync::Arc;

use services::{LearningService, ProfileService, SuggestionService};

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn profiles(&self) -> Arc<ProfileService>;
    fn learning(&self) -> Arc<LearningService>;
    fn suggestions(&self) -> Arc<SuggestionService>;
}

#[derive(Clone)]
pub struct AppContext {
    profiles: Arc<ProfileService>,
    learning: Arc<LearningService>,
    suggestions: Arc<SuggestionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            profiles: app.profiles(),
            learning: app.learning(),
            suggestions: app.suggestions(),
        }
    }

    #[must_use]
    pub fn profiles(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profiles)
    }

    #[must_use]
    pub fn learning(&self) -> Arc<LearningService> {
        Arc::clone(&self.learning)
    }

    #[must_use]
    pub fn suggestions(&self) -> Arc<SuggestionService> {
        Arc::clone(&self.suggestions)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
