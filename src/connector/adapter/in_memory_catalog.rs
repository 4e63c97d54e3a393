use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{ProjectStore, VersionStore};
use crate::domain::{DomainError, ProjectData, ProjectVersionRecord, VersionId};

/// In-memory project store for testing and development.
pub struct InMemoryProjectStore {
    projects: Arc<Mutex<HashMap<(String, String), ProjectData>>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn find(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Option<ProjectData>, DomainError> {
        let projects = self.projects.lock().await;
        Ok(projects
            .get(&(group_id.to_string(), artifact_id.to_string()))
            .cloned())
    }

    async fn find_by_project_id(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectData>, DomainError> {
        let projects = self.projects.lock().await;
        Ok(projects
            .values()
            .find(|project| project.project_id() == project_id)
            .cloned())
    }

    async fn all(&self) -> Result<Vec<ProjectData>, DomainError> {
        let projects = self.projects.lock().await;
        let mut all: Vec<ProjectData> = projects.values().cloned().collect();
        all.sort_by(|a, b| a.project_id().cmp(b.project_id()));
        Ok(all)
    }

    async fn create_or_update(&self, project: &ProjectData) -> Result<(), DomainError> {
        let mut projects = self.projects.lock().await;
        projects.insert(
            (
                project.group_id().to_string(),
                project.artifact_id().to_string(),
            ),
            project.clone(),
        );
        Ok(())
    }
}

/// In-memory version store for testing and development.
pub struct InMemoryVersionStore {
    records: Arc<Mutex<HashMap<(String, String, String), ProjectVersionRecord>>>,
}

impl InMemoryVersionStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn key(group_id: &str, artifact_id: &str, version_id: &VersionId) -> (String, String, String) {
        (
            group_id.to_string(),
            artifact_id.to_string(),
            version_id.as_str().to_string(),
        )
    }
}

impl Default for InMemoryVersionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionStore for InMemoryVersionStore {
    async fn find(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Option<ProjectVersionRecord>, DomainError> {
        let records = self.records.lock().await;
        Ok(records
            .get(&Self::key(group_id, artifact_id, version_id))
            .cloned())
    }

    async fn find_by_coordinates(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<ProjectVersionRecord>, DomainError> {
        let records = self.records.lock().await;
        let mut found: Vec<ProjectVersionRecord> = records
            .values()
            .filter(|record| record.group_id() == group_id && record.artifact_id() == artifact_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.version_id().cmp(b.version_id()));
        Ok(found)
    }

    async fn create_or_update(
        &self,
        record: &ProjectVersionRecord,
    ) -> Result<ProjectVersionRecord, DomainError> {
        let mut records = self.records.lock().await;
        let key = Self::key(record.group_id(), record.artifact_id(), record.version_id());
        records.insert(key, record.clone());
        debug!(
            "Stored version record {}-{}-{}",
            record.group_id(),
            record.artifact_id(),
            record.version_id()
        );
        Ok(record.clone())
    }

    async fn exclude_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
        reason: &str,
    ) -> Result<ProjectVersionRecord, DomainError> {
        let mut records = self.records.lock().await;
        let key = Self::key(group_id, artifact_id, version_id);
        let record = records
            .entry(key)
            .or_insert_with(|| ProjectVersionRecord::new(group_id, artifact_id, version_id.clone()));
        record.exclude(reason);
        Ok(record.clone())
    }
}
