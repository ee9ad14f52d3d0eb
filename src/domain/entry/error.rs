use crate::domain::config_flow::ConfigFlowError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum EntryServiceError {
    #[error(transparent)]
    Validation(#[from] ConfigFlowError),
    #[error("config entry not found")]
    NotFound,
}

impl From<EntryServiceError> for AppError {
    fn from(err: EntryServiceError) -> Self {
        match err {
            EntryServiceError::Validation(e) => e.into(),
            EntryServiceError::NotFound => AppError::NotFound("Config entry not found".to_string()),
        }
    }
}
