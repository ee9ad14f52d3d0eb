use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::{
        entry::{EntryService, EntryServiceApi, FlowOutcome},
        tts::{TtsService, TtsServiceApi},
    },
    error::{AppError, AppResult},
    infrastructure::http::ApiJson,
};

pub struct ConfigFlowController {
    entry_service: Arc<EntryService>,
    tts_service: Arc<TtsService>,
}

impl ConfigFlowController {
    pub fn new(entry_service: Arc<EntryService>, tts_service: Arc<TtsService>) -> Self {
        Self {
            entry_service,
            tts_service,
        }
    }

    /// GET /api/config_flow/user - Describe the setup form
    pub async fn show_form(
        State(controller): State<Arc<ConfigFlowController>>,
    ) -> AppResult<(StatusCode, Json<Value>)> {
        controller.respond(None).await
    }

    /// POST /api/config_flow/user - Submit the setup form
    ///
    /// A `null` body counts as no input and returns the form again.
    pub async fn submit(
        State(controller): State<Arc<ConfigFlowController>>,
        ApiJson(user_input): ApiJson<Value>,
    ) -> AppResult<(StatusCode, Json<Value>)> {
        let user_input = Some(user_input).filter(|input| !input.is_null());
        controller.respond(user_input).await
    }

    async fn respond(&self, user_input: Option<Value>) -> AppResult<(StatusCode, Json<Value>)> {
        match self.entry_service.run_user_step(user_input).await? {
            FlowOutcome::Created(entry) => {
                let summary = self.tts_service.entity(entry.entry_id).await?.summary();
                Ok((StatusCode::CREATED, Json(to_json(summary)?)))
            }
            FlowOutcome::ShowForm(form) => Ok((StatusCode::OK, Json(to_json(form)?))),
        }
    }
}

fn to_json<T: serde::Serialize>(value: T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.to_string()))
}
