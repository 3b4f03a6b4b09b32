#![forbid(unsafe_code)]

pub mod error;
pub mod flow;
pub mod model;
pub mod quiz;
pub mod relevance;
pub mod time;

pub use error::Error;
pub use flow::{FlowError, LearnFlow};
pub use quiz::QuizState;
pub use time::Clock;
