use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::EntryRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(entry_repo): State<Arc<EntryRepository>>) -> impl IntoResponse {
    let entries = entry_repo.count().await;

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "entries": entries,
            "tts": if entries > 0 { "configured" } else { "unconfigured" }
        })),
    )
}
