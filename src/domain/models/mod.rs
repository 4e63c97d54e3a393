mod entity;
mod notification;
mod project;
mod project_version;
mod response;
mod version_id;

pub use entity::*;
pub use notification::*;
pub use project::*;
pub use project_version::*;
pub use response::*;
pub use version_id::*;
