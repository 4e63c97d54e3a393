use async_trait::async_trait;

use crate::domain::{DomainError, Entity, VersionId};

/// Source of entity payloads for an artifact version.
#[async_trait]
pub trait EntityProvider: Send + Sync {
    async fn find_entities(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Vec<Entity>, DomainError>;
}

/// Persistence for extracted entities, keyed by coordinate + version.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Replaces the stored entity set for the version, returning the number
    /// of entities stored.
    async fn store_entities(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
        entities: Vec<Entity>,
    ) -> Result<usize, DomainError>;

    async fn find_entities(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Vec<Entity>, DomainError>;
}
