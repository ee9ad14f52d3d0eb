use crate::domain::config_flow::ConfigEntryData;
use crate::domain::tts::{TtsAudio, TtsServiceError};
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the remote speech provider behind a single call.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` with the credentials and voice of one config entry
    ///
    /// # Errors
    /// Every failure is terminal for the call; nothing is retried.
    async fn synthesize(
        &self,
        config: &ConfigEntryData,
        text: &str,
    ) -> Result<TtsAudio, TtsServiceError>;
}
