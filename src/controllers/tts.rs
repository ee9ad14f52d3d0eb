use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::tts::{SynthesizeRequest, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
    infrastructure::{
        http::ApiJson,
        repositories::{NotificationRepository, PersistentNotification},
    },
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
    notification_repo: Arc<dyn NotificationRepository>,
}

impl TtsController {
    pub fn new(
        tts_service: Arc<TtsService>,
        notification_repo: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            tts_service,
            notification_repo,
        }
    }

    /// POST /api/tts/{entryId}/synthesize - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Path(entry_id): Path<Uuid>,
        ApiJson(request): ApiJson<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let result = controller.tts_service.synthesize(entry_id, request).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, header_value(result.audio.content_type())?);
        headers.insert("X-Audio-Format", header_value(&result.audio.format)?);
        headers.insert("X-Language", header_value(&result.language)?);

        Ok((StatusCode::OK, headers, Body::from(result.audio.audio)))
    }

    /// GET /api/notifications - Persistent notifications, oldest first
    pub async fn list_notifications(
        State(controller): State<Arc<TtsController>>,
    ) -> Json<Vec<PersistentNotification>> {
        Json(controller.notification_repo.list().await)
    }

    /// DELETE /api/notifications/{notificationId} - Dismiss a notification
    pub async fn dismiss_notification(
        State(controller): State<Arc<TtsController>>,
        Path(notification_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        if !controller.notification_repo.dismiss(notification_id).await {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(StatusCode::NO_CONTENT)
    }
}

fn header_value(value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| AppError::Internal(format!("Invalid header: {}", e)))
}
