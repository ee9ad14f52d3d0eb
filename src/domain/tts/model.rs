use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Format tag used for hex-decoded MiniMax audio
pub const FORMAT_MP3: &str = "mp3";

/// Audio produced by one synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsAudio {
    pub format: String,
    pub audio: Vec<u8>,
}

impl TtsAudio {
    pub fn mp3(audio: Vec<u8>) -> Self {
        Self {
            format: FORMAT_MP3.to_string(),
            audio,
        }
    }

    /// MIME type for the audio, accepting either a short tag or a full content type
    pub fn content_type(&self) -> &str {
        if self.format.contains('/') {
            return &self.format;
        }
        match self.format.as_str() {
            "mp3" => "audio/mpeg",
            "wav" => "audio/wav",
            "flac" => "audio/flac",
            "pcm" => "audio/pcm",
            _ => "application/octet-stream",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub audio: TtsAudio,
    pub language: String,
}

/// Request for POST /api/tts/:entry_id/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub identifiers: Vec<(String, String)>,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
}

/// Public view of a configured entity. Never carries the API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySummary {
    pub entry_id: Uuid,
    pub title: String,
    pub name: String,
    pub unique_id: String,
    pub device_info: DeviceInfo,
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub created_at: DateTime<Utc>,
}
