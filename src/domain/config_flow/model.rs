use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DOMAIN: &str = "minimax_tts";
pub const CONF_GROUP_ID: &str = "group_id";
pub const CONF_API_KEY: &str = "api_key";
pub const CONF_VOICE_ID: &str = "voice_id";

/// Voice pre-filled in the setup form
pub const DEFAULT_VOICE_ID: &str = "mos_audio_35005847-4600-11f0-990d-c66847954116";

pub const ENTRY_TITLE: &str = "Minimax TTS";

/// Credentials and voice for one configured MiniMax instance.
///
/// Built only by the config flow, so every field is a non-empty string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntryData {
    pub group_id: String,
    pub api_key: String,
    pub voice_id: String,
}

impl std::fmt::Debug for ConfigEntryData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigEntryData")
            .field("group_id", &self.group_id)
            .field("api_key", &"<redacted>")
            .field("voice_id", &self.voice_id)
            .finish()
    }
}

/// A stored config entry, owned by the entry repository
#[derive(Debug, Clone)]
pub struct ConfigEntry {
    pub entry_id: Uuid,
    pub title: String,
    pub data: ConfigEntryData,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
}

/// One input of the setup form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl FormField {
    pub fn required_string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::String,
            required: true,
            default: None,
        }
    }

    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

/// Outcome of a config flow step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowResult {
    Form {
        step_id: String,
        data_schema: Vec<FormField>,
    },
    CreateEntry {
        title: String,
        data: ConfigEntryData,
    },
}
