use super::language::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
use super::model::{DeviceInfo, EntitySummary, TtsAudio};
use crate::domain::config_flow::{ConfigEntry, DOMAIN};
use crate::infrastructure::repositories::{NotificationRepository, TtsRepository};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub const NOTIFICATION_TITLE: &str = "Minimax TTS Error";
pub const MANUFACTURER: &str = "Minimax";

/// Capabilities a speech entity exposes to the host
#[async_trait]
pub trait TextToSpeechEntity: Send + Sync {
    fn name(&self) -> String;

    fn unique_id(&self) -> String;

    fn device_info(&self) -> DeviceInfo;

    fn default_language(&self) -> &'static str;

    fn supported_languages(&self) -> &'static [&'static str];

    /// Produce audio for `message`, or `None` if synthesis failed.
    ///
    /// Failures are reported through logging and notifications, never returned.
    async fn get_tts_audio(
        &self,
        message: &str,
        language: &str,
        options: Option<&Map<String, Value>>,
    ) -> Option<TtsAudio>;
}

/// The speech entity for one MiniMax config entry
pub struct MinimaxTtsEntity {
    entry: ConfigEntry,
    tts_repo: Arc<dyn TtsRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
}

impl MinimaxTtsEntity {
    pub fn new(
        entry: ConfigEntry,
        tts_repo: Arc<dyn TtsRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            entry,
            tts_repo,
            notification_repo,
        }
    }

    pub fn summary(&self) -> EntitySummary {
        EntitySummary {
            entry_id: self.entry.entry_id,
            title: self.entry.title.clone(),
            name: self.name(),
            unique_id: self.unique_id(),
            device_info: self.device_info(),
            default_language: self.default_language().to_string(),
            supported_languages: self
                .supported_languages()
                .iter()
                .map(|l| l.to_string())
                .collect(),
            created_at: self.entry.created_at,
        }
    }
}

#[async_trait]
impl TextToSpeechEntity for MinimaxTtsEntity {
    fn name(&self) -> String {
        format!("Minimax TTS {}", self.entry.title)
    }

    fn unique_id(&self) -> String {
        self.entry.entry_id.to_string()
    }

    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            identifiers: vec![(DOMAIN.to_string(), self.unique_id())],
            name: self.name(),
            manufacturer: MANUFACTURER.to_string(),
            model: self.entry.data.voice_id.clone(),
        }
    }

    fn default_language(&self) -> &'static str {
        DEFAULT_LANGUAGE
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        SUPPORTED_LANGUAGES
    }

    async fn get_tts_audio(
        &self,
        message: &str,
        language: &str,
        options: Option<&Map<String, Value>>,
    ) -> Option<TtsAudio> {
        if let Some(options) = options.filter(|o| !o.is_empty()) {
            let keys: Vec<&str> = options.keys().map(String::as_str).collect();
            tracing::debug!(options = ?keys, "Ignoring TTS options not supported by MiniMax");
        }

        match self.tts_repo.synthesize(&self.entry.data, message).await {
            Ok(audio) => Some(audio),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    entry_id = %self.entry.entry_id,
                    language = language,
                    "Minimax TTS Error"
                );
                self.notification_repo
                    .create(NOTIFICATION_TITLE, &format!("Failed to get audio: {}", e))
                    .await;
                None
            }
        }
    }
}
