mod courses;
mod home;
mod onboarding;
mod profile;
mod results;
mod state;
mod trending;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use courses::CoursesPanel;
pub use home::HomeView;
pub use onboarding::OnboardingWizard;
pub use profile::ProfileView;
pub use results::ResultsPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use trending::TrendingPanel;
