mod exclude_controller;
mod project_controller;
mod queue_controller;
mod refresh_controller;
mod versions_controller;

pub use exclude_controller::*;
pub use project_controller::*;
pub use queue_controller::*;
pub use refresh_controller::*;
pub use versions_controller::*;
