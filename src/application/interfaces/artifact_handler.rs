use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, EventResponse, VersionId};

/// Artifact content types a version can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    Entities,
    FileGenerations,
}

impl ArtifactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Entities => "entities",
            ArtifactType::FileGenerations => "file-generations",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts and persists domain content for a validated coordinate+version.
///
/// Handlers run only after the refresh pipeline has validated the version;
/// whatever they report is merged into the overall event response.
#[async_trait]
pub trait ArtifactHandler: Send + Sync {
    fn artifact_type(&self) -> ArtifactType;

    async fn refresh_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<EventResponse, DomainError>;
}

/// Registry of artifact handlers keyed by content type.
///
/// Populated once at startup and injected into the orchestrator, which
/// treats it as read-only. Unregistered types are silently skipped.
#[derive(Default)]
pub struct ArtifactHandlerRegistry {
    handlers: BTreeMap<ArtifactType, Arc<dyn ArtifactHandler>>,
}

impl ArtifactHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn ArtifactHandler>) {
        self.handlers.insert(handler.artifact_type(), handler);
    }

    pub fn get(&self, artifact_type: ArtifactType) -> Option<&Arc<dyn ArtifactHandler>> {
        self.handlers.get(&artifact_type)
    }

    pub fn handlers(&self) -> impl Iterator<Item = &Arc<dyn ArtifactHandler>> {
        self.handlers.values()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn registered_types(&self) -> Vec<ArtifactType> {
        self.handlers.keys().copied().collect()
    }
}
