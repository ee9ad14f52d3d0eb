use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    /// Connection failure, timeout or non-2xx status
    #[error("transport error: {0}")]
    Transport(String),
    /// MiniMax answered but signalled failure in `base_resp`
    #[error("remote API error: {message}")]
    RemoteApi { code: Option<i64>, message: String },
    /// Success was signalled but the audio could not be extracted
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("config entry not found")]
    NotFound,
    #[error("no audio produced")]
    NoAudio,
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::NotFound => AppError::NotFound("Config entry not found".to_string()),
            TtsServiceError::NoAudio => AppError::ExternalService("No audio produced".to_string()),
            TtsServiceError::Transport(_)
            | TtsServiceError::RemoteApi { .. }
            | TtsServiceError::MalformedResponse(_) => AppError::ExternalService(err.to_string()),
        }
    }
}
