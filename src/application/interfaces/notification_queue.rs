use async_trait::async_trait;

use crate::domain::{DomainError, RefreshNotification};

/// Durable queue of refresh requests.
///
/// Cascading refreshes are driven by separate notifications carrying the
/// triggering event's id as `parent_event_id`, never by recursive ingestion
/// inside a single refresh.
#[async_trait]
pub trait NotificationQueue: Send + Sync {
    /// Enqueues a notification and returns the event id assigned to it.
    async fn push(&self, notification: RefreshNotification) -> Result<String, DomainError>;

    async fn pop(&self) -> Result<Option<RefreshNotification>, DomainError>;

    async fn size(&self) -> Result<usize, DomainError>;
}
