//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Catalog storage (JSON file for durability, in-memory for tests/dev)
//! - Artifact repository clients (HTTP, configurable in-memory double)
//! - Artifact handlers (entities extraction)
//! - The CLI composition root (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::{Container, ContainerConfig, Router};
