use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{ArtifactHandler, ArtifactType, EntityProvider, EntityStore};
use crate::domain::{DomainError, EventResponse, VersionId};

/// Artifact handler for the `entities` content type.
///
/// Runs once the refresh pipeline has validated a version: pulls the entity
/// payloads from the provider and replaces the stored set for that version.
pub struct EntitiesHandler {
    provider: Arc<dyn EntityProvider>,
    store: Arc<dyn EntityStore>,
}

impl EntitiesHandler {
    pub fn new(provider: Arc<dyn EntityProvider>, store: Arc<dyn EntityStore>) -> Self {
        Self { provider, store }
    }
}

#[async_trait]
impl ArtifactHandler for EntitiesHandler {
    fn artifact_type(&self) -> ArtifactType {
        ArtifactType::Entities
    }

    async fn refresh_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<EventResponse, DomainError> {
        let entities = self
            .provider
            .find_entities(group_id, artifact_id, version_id)
            .await?;

        debug!(
            "Extracted {} entities for {}-{}-{}",
            entities.len(),
            group_id,
            artifact_id,
            version_id
        );

        let stored = self
            .store
            .store_entities(group_id, artifact_id, version_id, entities)
            .await?;

        let mut response = EventResponse::new();
        response.add_message(format!(
            "{stored} entities stored for {group_id}-{artifact_id}-{version_id}"
        ));
        Ok(response)
    }
}
