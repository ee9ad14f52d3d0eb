use super::error::EntryServiceError;
use crate::domain::config_flow::{ConfigEntry, ConfigFlow, FlowResult};
use crate::infrastructure::repositories::EntryRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of submitting the setup flow
#[derive(Debug)]
pub enum FlowOutcome {
    /// The flow wants (more) input; nothing was stored
    ShowForm(FlowResult),
    Created(ConfigEntry),
}

pub struct EntryService {
    entry_repo: Arc<EntryRepository>,
    config_flow: ConfigFlow,
}

impl EntryService {
    pub fn new(entry_repo: Arc<EntryRepository>) -> Self {
        Self {
            entry_repo,
            config_flow: ConfigFlow::new(),
        }
    }
}

#[async_trait]
pub trait EntryServiceApi: Send + Sync {
    /// Run the `user` step and store the entry it produces
    async fn run_user_step(
        &self,
        user_input: Option<Value>,
    ) -> Result<FlowOutcome, EntryServiceError>;

    async fn remove_entry(&self, entry_id: Uuid) -> Result<(), EntryServiceError>;
}

#[async_trait]
impl EntryServiceApi for EntryService {
    async fn run_user_step(
        &self,
        user_input: Option<Value>,
    ) -> Result<FlowOutcome, EntryServiceError> {
        match self.config_flow.step_user(user_input)? {
            FlowResult::CreateEntry { title, data } => {
                let entry = self.entry_repo.create(title, data).await;
                tracing::info!(
                    entry_id = %entry.entry_id,
                    voice_id = %entry.data.voice_id,
                    "Config entry created"
                );
                Ok(FlowOutcome::Created(entry))
            }
            form => Ok(FlowOutcome::ShowForm(form)),
        }
    }

    async fn remove_entry(&self, entry_id: Uuid) -> Result<(), EntryServiceError> {
        if !self.entry_repo.delete(entry_id).await {
            return Err(EntryServiceError::NotFound);
        }
        tracing::info!(entry_id = %entry_id, "Config entry removed");
        Ok(())
    }
}
