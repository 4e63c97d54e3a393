mod entities_handler;
mod http_artifact_repository;
mod in_memory_artifact_repository;
mod in_memory_catalog;
mod in_memory_entities;
mod in_memory_queue;
mod json_file_catalog;

pub use entities_handler::*;
pub use http_artifact_repository::*;
pub use in_memory_artifact_repository::*;
pub use in_memory_catalog::*;
pub use in_memory_entities::*;
pub use in_memory_queue::*;
pub use json_file_catalog::*;
