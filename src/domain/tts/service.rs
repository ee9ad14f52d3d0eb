use super::entity::{MinimaxTtsEntity, TextToSpeechEntity};
use super::error::TtsServiceError;
use super::language::resolve_language;
use super::model::{EntitySummary, SynthesizeRequest, TtsSynthesisResult};
use crate::infrastructure::repositories::{EntryRepository, NotificationRepository, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct TtsService {
    entry_repo: Arc<EntryRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
}

impl TtsService {
    pub fn new(
        entry_repo: Arc<EntryRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            entry_repo,
            tts_repo,
            notification_repo,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Build the speech entity for a stored config entry
    async fn entity(&self, entry_id: Uuid) -> Result<MinimaxTtsEntity, TtsServiceError>;

    /// Entities for every stored config entry, oldest first
    async fn list_entities(&self) -> Vec<EntitySummary>;

    /// Synthesize speech through the entity of one config entry
    ///
    /// This operation:
    /// - Rejects empty messages and unsupported languages
    /// - Falls back to the entity's default language when none is given
    /// - Maps "no audio" from the entity to `TtsServiceError::NoAudio`
    async fn synthesize(
        &self,
        entry_id: Uuid,
        request: SynthesizeRequest,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn entity(&self, entry_id: Uuid) -> Result<MinimaxTtsEntity, TtsServiceError> {
        let entry = self
            .entry_repo
            .find_by_id(entry_id)
            .await
            .ok_or(TtsServiceError::NotFound)?;

        Ok(MinimaxTtsEntity::new(
            entry,
            self.tts_repo.clone(),
            self.notification_repo.clone(),
        ))
    }

    async fn list_entities(&self) -> Vec<EntitySummary> {
        self.entry_repo
            .list()
            .await
            .into_iter()
            .map(|entry| {
                MinimaxTtsEntity::new(entry, self.tts_repo.clone(), self.notification_repo.clone())
                    .summary()
            })
            .collect()
    }

    async fn synthesize(
        &self,
        entry_id: Uuid,
        request: SynthesizeRequest,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        let entity = self.entity(entry_id).await?;

        if request.message.trim().is_empty() {
            return Err(TtsServiceError::Invalid("Message cannot be empty".to_string()));
        }

        let language = resolve_language(request.language.as_deref()).ok_or_else(|| {
            TtsServiceError::Invalid(format!(
                "Unsupported language: {}",
                request.language.as_deref().unwrap_or_default()
            ))
        })?;

        tracing::info!(
            entry_id = %entry_id,
            language = language,
            text_length = request.message.len(),
            "TTS synthesis request"
        );

        let audio = entity
            .get_tts_audio(&request.message, language, request.options.as_ref())
            .await
            .ok_or(TtsServiceError::NoAudio)?;

        Ok(TtsSynthesisResult {
            audio,
            language: language.to_string(),
        })
    }
}
