mod artifact_handler;
mod artifact_repository;
mod entity_store;
mod notification_queue;
mod project_store;
mod version_store;

pub use artifact_handler::*;
pub use artifact_repository::*;
pub use entity_store::*;
pub use notification_queue::*;
pub use project_store::*;
pub use version_store::*;
