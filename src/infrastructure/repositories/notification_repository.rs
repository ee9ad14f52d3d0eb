use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A user-visible notice that stays until dismissed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistentNotification {
    pub notification_id: Uuid,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Side channel for surfacing errors to the user
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, title: &str, message: &str) -> PersistentNotification;

    /// All notifications, oldest first
    async fn list(&self) -> Vec<PersistentNotification>;

    /// Returns false if no notification had that id
    async fn dismiss(&self, notification_id: Uuid) -> bool;
}

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    notifications: RwLock<Vec<PersistentNotification>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn create(&self, title: &str, message: &str) -> PersistentNotification {
        let notification = PersistentNotification {
            notification_id: Uuid::new_v4(),
            title: title.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        };

        tracing::info!(
            notification_id = %notification.notification_id,
            title = %notification.title,
            "Persistent notification created"
        );

        self.notifications.write().await.push(notification.clone());
        notification
    }

    async fn list(&self) -> Vec<PersistentNotification> {
        self.notifications.read().await.clone()
    }

    async fn dismiss(&self, notification_id: Uuid) -> bool {
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.notification_id != notification_id);
        let dismissed = notifications.len() < before;

        if dismissed {
            tracing::info!(notification_id = %notification_id, "Persistent notification dismissed");
        }
        dismissed
    }
}
