use thiserror::Error;

use crate::flow::FlowError;
use crate::model::{AssessmentParseError, ProfileError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    AssessmentParse(#[from] AssessmentParseError),
    #[error(transparent)]
    Flow(#[from] FlowError),
}
