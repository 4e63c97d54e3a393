use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::{EntityProvider, EntityStore};
use crate::domain::{DomainError, Entity, VersionId};

type EntityKey = (String, String, String);

fn key(group_id: &str, artifact_id: &str, version_id: &VersionId) -> EntityKey {
    (
        group_id.to_string(),
        artifact_id.to_string(),
        version_id.as_str().to_string(),
    )
}

/// In-memory entity provider, seeded explicitly in tests and mock runs.
pub struct InMemoryEntityProvider {
    entities: Arc<Mutex<HashMap<EntityKey, Vec<Entity>>>>,
}

impl InMemoryEntityProvider {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn set_entities(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
        entities: Vec<Entity>,
    ) {
        let mut all = self.entities.lock().await;
        all.insert(key(group_id, artifact_id, version_id), entities);
    }
}

impl Default for InMemoryEntityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityProvider for InMemoryEntityProvider {
    async fn find_entities(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Vec<Entity>, DomainError> {
        let all = self.entities.lock().await;
        Ok(all
            .get(&key(group_id, artifact_id, version_id))
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory entity store.
pub struct InMemoryEntityStore {
    entities: Arc<Mutex<HashMap<EntityKey, Vec<Entity>>>>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn store_entities(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
        entities: Vec<Entity>,
    ) -> Result<usize, DomainError> {
        let count = entities.len();
        let mut all = self.entities.lock().await;
        all.insert(key(group_id, artifact_id, version_id), entities);
        Ok(count)
    }

    async fn find_entities(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Vec<Entity>, DomainError> {
        let all = self.entities.lock().await;
        Ok(all
            .get(&key(group_id, artifact_id, version_id))
            .cloned()
            .unwrap_or_default())
    }
}
