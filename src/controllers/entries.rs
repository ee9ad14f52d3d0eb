use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entry::{EntryService, EntryServiceApi},
        tts::{EntitySummary, TtsService, TtsServiceApi},
    },
    error::AppResult,
};

pub struct EntryController {
    entry_service: Arc<EntryService>,
    tts_service: Arc<TtsService>,
}

impl EntryController {
    pub fn new(entry_service: Arc<EntryService>, tts_service: Arc<TtsService>) -> Self {
        Self {
            entry_service,
            tts_service,
        }
    }

    /// GET /api/entries - List configured entities
    pub async fn list_entries(
        State(controller): State<Arc<EntryController>>,
    ) -> Json<Vec<EntitySummary>> {
        Json(controller.tts_service.list_entities().await)
    }

    /// GET /api/entries/{entryId}
    pub async fn get_entry(
        State(controller): State<Arc<EntryController>>,
        Path(entry_id): Path<Uuid>,
    ) -> AppResult<Json<EntitySummary>> {
        let entity = controller.tts_service.entity(entry_id).await?;
        Ok(Json(entity.summary()))
    }

    /// DELETE /api/entries/{entryId} - Remove an entry and its entity
    pub async fn delete_entry(
        State(controller): State<Arc<EntryController>>,
        Path(entry_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.entry_service.remove_entry(entry_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
