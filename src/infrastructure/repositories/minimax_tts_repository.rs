use super::tts_repository::TtsRepository;
use crate::domain::config_flow::ConfigEntryData;
use crate::domain::tts::{TtsAudio, TtsServiceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MINIMAX_API_URL: &str = "https://api.minimax.io/v1/t2a_v2";
pub const MINIMAX_MODEL: &str = "speech-02-turbo";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// `base_resp.status_code` value MiniMax uses for success
const STATUS_SUCCESS: i64 = 0;

const NO_AUDIO_MESSAGE: &str = "API success response but no audio data found.";

#[derive(Debug, Serialize)]
struct T2aRequest<'a> {
    model: &'a str,
    text: &'a str,
    voice_setting: VoiceSetting<'a>,
}

#[derive(Debug, Serialize)]
struct VoiceSetting<'a> {
    voice_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct T2aResponse {
    #[serde(default)]
    base_resp: Option<BaseResp>,
    #[serde(default)]
    data: Option<T2aData>,
    #[serde(default)]
    trace_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BaseResp {
    #[serde(default)]
    status_code: Option<i64>,
    #[serde(default)]
    status_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct T2aData {
    #[serde(default)]
    audio: Option<String>,
}

/// MiniMax `t2a_v2` implementation of the TTS repository
pub struct MinimaxTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl MinimaxTtsRepository {
    /// Build a repository whose requests give up after `timeout`
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self, group_id: &str) -> String {
        format!(
            "{}?GroupId={}",
            self.base_url,
            urlencoding::encode(group_id)
        )
    }

    async fn call_minimax(
        &self,
        config: &ConfigEntryData,
        text: &str,
    ) -> Result<TtsAudio, TtsServiceError> {
        let payload = T2aRequest {
            model: MINIMAX_MODEL,
            text,
            voice_setting: VoiceSetting {
                voice_id: &config.voice_id,
            },
        };

        let text_preview: String = text.chars().take(200).collect();
        tracing::debug!(
            model = MINIMAX_MODEL,
            voice_id = %config.voice_id,
            group_id = %config.group_id,
            text_length = text.len(),
            text_preview = %text_preview,
            "Calling MiniMax TTS API"
        );

        let response = self
            .http_client
            .post(self.endpoint(&config.group_id))
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    timeout = e.is_timeout(),
                    connect = e.is_connect(),
                    voice_id = %config.voice_id,
                    "MiniMax TTS request failed"
                );
                TtsServiceError::Transport(format!("MiniMax request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read MiniMax response body");
            TtsServiceError::Transport(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let detail = error_detail(&body);
            tracing::error!(
                status = %status.as_u16(),
                detail = %detail,
                "MiniMax TTS API returned an error status"
            );
            return Err(TtsServiceError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                detail
            )));
        }

        parse_t2a_response(&body)
    }
}

/// Best description of a failed response: the envelope message if there is one, else the raw body
fn error_detail(body: &[u8]) -> String {
    serde_json::from_slice::<T2aResponse>(body)
        .ok()
        .and_then(|r| r.base_resp)
        .and_then(|b| b.status_msg)
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}

/// Decode a JSON-envelope `t2a_v2` response into audio
fn parse_t2a_response(body: &[u8]) -> Result<TtsAudio, TtsServiceError> {
    let response: T2aResponse = serde_json::from_slice(body).map_err(|e| {
        TtsServiceError::MalformedResponse(format!("Invalid JSON from MiniMax: {}", e))
    })?;

    let (code, message) = match response.base_resp {
        Some(base) => (base.status_code, base.status_msg),
        None => (None, None),
    };

    if code != Some(STATUS_SUCCESS) {
        return Err(TtsServiceError::RemoteApi {
            code,
            message: message.unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    let audio_hex = response
        .data
        .and_then(|d| d.audio)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| TtsServiceError::MalformedResponse(NO_AUDIO_MESSAGE.to_string()))?;

    let audio = hex::decode(audio_hex.trim()).map_err(|e| {
        TtsServiceError::MalformedResponse(format!("Audio is not valid hex: {}", e))
    })?;

    if let Some(trace_id) = response.trace_id {
        tracing::debug!(trace_id = %trace_id, audio_size = audio.len(), "MiniMax audio decoded");
    }

    Ok(TtsAudio::mp3(audio))
}

#[async_trait]
impl TtsRepository for MinimaxTtsRepository {
    async fn synthesize(
        &self,
        config: &ConfigEntryData,
        text: &str,
    ) -> Result<TtsAudio, TtsServiceError> {
        let start_time = std::time::Instant::now();

        let audio = self.call_minimax(config, text).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "minimax",
            model = MINIMAX_MODEL,
            voice_id = %config.voice_id,
            latency_ms = duration.as_millis(),
            characters_count = text.chars().count(),
            audio_size_bytes = audio.audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
