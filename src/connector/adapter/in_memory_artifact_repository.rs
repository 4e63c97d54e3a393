use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ArtifactRepository;
use crate::domain::{DomainError, ProjectVersion, VersionId};

/// Configurable in-memory artifact repository.
///
/// Stands in for the upstream repository in tests and `--mock-repository`
/// runs: published versions, snapshot availability, and dependency sets are
/// seeded explicitly. Anything not seeded is a valid not-found, never a
/// fault.
pub struct InMemoryArtifactRepository {
    versions: Arc<Mutex<HashMap<(String, String), Vec<VersionId>>>>,
    snapshots: Arc<Mutex<HashSet<(String, String)>>>,
    dependencies: Arc<Mutex<HashMap<(String, String, String), HashSet<ProjectVersion>>>>,
}

impl InMemoryArtifactRepository {
    pub fn new() -> Self {
        Self {
            versions: Arc::new(Mutex::new(HashMap::new())),
            snapshots: Arc::new(Mutex::new(HashSet::new())),
            dependencies: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Publishes a concrete version for a coordinate.
    pub async fn add_version(&self, group_id: &str, artifact_id: &str, version: &str) {
        let mut versions = self.versions.lock().await;
        versions
            .entry((group_id.to_string(), artifact_id.to_string()))
            .or_default()
            .push(VersionId::parse(version));
    }

    /// Makes the snapshot marker resolvable for a coordinate.
    pub async fn add_snapshot(&self, group_id: &str, artifact_id: &str) {
        let mut snapshots = self.snapshots.lock().await;
        snapshots.insert((group_id.to_string(), artifact_id.to_string()));
    }

    /// Declares the direct dependency set for a coordinate + version.
    pub async fn set_dependencies(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        dependencies: impl IntoIterator<Item = ProjectVersion>,
    ) {
        let mut all = self.dependencies.lock().await;
        all.insert(
            (
                group_id.to_string(),
                artifact_id.to_string(),
                version.to_string(),
            ),
            dependencies.into_iter().collect(),
        );
    }
}

impl Default for InMemoryArtifactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactRepository for InMemoryArtifactRepository {
    async fn find_versions(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<VersionId>, DomainError> {
        let versions = self.versions.lock().await;
        Ok(versions
            .get(&(group_id.to_string(), artifact_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn find_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Option<VersionId>, DomainError> {
        match version_id {
            VersionId::Snapshot => {
                let snapshots = self.snapshots.lock().await;
                Ok(snapshots
                    .contains(&(group_id.to_string(), artifact_id.to_string()))
                    .then(|| VersionId::Snapshot))
            }
            VersionId::Concrete(_) => {
                let versions = self.find_versions(group_id, artifact_id).await?;
                Ok(versions.into_iter().find(|v| v == version_id))
            }
        }
    }

    async fn find_dependencies(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<HashSet<ProjectVersion>, DomainError> {
        let dependencies = self.dependencies.lock().await;
        Ok(dependencies
            .get(&(
                group_id.to_string(),
                artifact_id.to_string(),
                version_id.as_str().to_string(),
            ))
            .cloned()
            .unwrap_or_default())
    }
}
