use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::application::NotificationQueue;
use crate::domain::{DomainError, RefreshNotification};

/// In-memory FIFO notification queue.
///
/// Assigns each pushed notification a fresh event id so cascades can be
/// traced even without a durable transport behind the queue.
pub struct InMemoryQueue {
    notifications: Arc<Mutex<VecDeque<(String, RefreshNotification)>>>,
}

impl InMemoryQueue {
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(Mutex::new(VecDeque::new())),
        }
    }
}

impl Default for InMemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationQueue for InMemoryQueue {
    async fn push(&self, notification: RefreshNotification) -> Result<String, DomainError> {
        let event_id = Uuid::new_v4().to_string();
        let mut notifications = self.notifications.lock().await;
        notifications.push_back((event_id.clone(), notification));
        debug!("Queued notification {}", event_id);
        Ok(event_id)
    }

    async fn pop(&self) -> Result<Option<RefreshNotification>, DomainError> {
        let mut notifications = self.notifications.lock().await;
        Ok(notifications.pop_front().map(|(_, notification)| notification))
    }

    async fn size(&self) -> Result<usize, DomainError> {
        let notifications = self.notifications.lock().await;
        Ok(notifications.len())
    }
}
