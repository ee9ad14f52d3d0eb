use crate::error::AppError;

/// Rejected setup input. Field-level variants name the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigFlowError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a string")]
    InvalidType(&'static str),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("user input must be an object")]
    NotAnObject,
}

impl ConfigFlowError {
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field) | Self::InvalidType(field) | Self::EmptyField(field) => {
                Some(field)
            }
            Self::UnknownField(field) => Some(field),
            Self::NotAnObject => None,
        }
    }
}

impl From<ConfigFlowError> for AppError {
    fn from(err: ConfigFlowError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
