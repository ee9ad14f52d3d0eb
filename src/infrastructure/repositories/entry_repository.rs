use crate::domain::config_flow::{ConfigEntry, ConfigEntryData};
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store of config entries, kept in creation order
#[derive(Default)]
pub struct EntryRepository {
    entries: RwLock<Vec<ConfigEntry>>,
}

impl EntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, title: String, data: ConfigEntryData) -> ConfigEntry {
        let entry = ConfigEntry {
            entry_id: Uuid::new_v4(),
            title,
            data,
            created_at: Utc::now(),
        };

        self.entries.write().await.push(entry.clone());

        entry
    }

    pub async fn find_by_id(&self, entry_id: Uuid) -> Option<ConfigEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.entry_id == entry_id)
            .cloned()
    }

    /// All entries, oldest first
    pub async fn list(&self) -> Vec<ConfigEntry> {
        self.entries.read().await.clone()
    }

    /// Returns false if no entry had that id
    pub async fn delete(&self, entry_id: Uuid) -> bool {
        let mut entries = self.entries.write().await;
        match entries.iter().position(|e| e.entry_id == entry_id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}
