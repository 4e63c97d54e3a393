mod drain_queue;
mod exclude_version;
mod query_versions;
mod refresh_version;
mod register_project;

pub use drain_queue::*;
pub use exclude_version::*;
pub use query_versions::*;
pub use refresh_version::*;
pub use register_project::*;
