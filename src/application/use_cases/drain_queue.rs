use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{NotificationQueue, RefreshVersionUseCase};
use crate::domain::{DomainError, EventResponse};

/// Single-pass queue worker: handles the notifications present when the
/// drain starts.
///
/// Bounding the pass by the starting queue size means cascade notifications
/// pushed while draining wait for the next pass instead of looping forever.
pub struct DrainQueueUseCase {
    queue: Arc<dyn NotificationQueue>,
    refresh: Arc<RefreshVersionUseCase>,
}

impl DrainQueueUseCase {
    pub fn new(queue: Arc<dyn NotificationQueue>, refresh: Arc<RefreshVersionUseCase>) -> Self {
        Self { queue, refresh }
    }

    pub async fn execute(&self) -> Result<Vec<EventResponse>, DomainError> {
        let pending = self.queue.size().await?;
        debug!("Draining {} queued notifications", pending);

        let mut responses = Vec::with_capacity(pending);
        for _ in 0..pending {
            let Some(notification) = self.queue.pop().await? else {
                break;
            };
            let response = self.refresh.handle_event(&notification).await?;
            responses.push(response);
        }

        info!("Drained {} notifications", responses.len());
        Ok(responses)
    }
}
