mod assessment;
mod course;
mod profile;
mod results;
mod session;

pub use assessment::{Assessment, AssessmentLevel, AssessmentParseError, LearningStyle};
pub use course::Course;
pub use profile::{ProfileError, UserProfile};
pub use results::{QuizQuestion, Resource, ResultsPayload};
pub use session::{LearningSession, SessionId, recent_sessions};
