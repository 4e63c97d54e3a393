use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{ProjectStore, VersionStore};
use crate::domain::{DomainError, ProjectData, ProjectVersionRecord, VersionId};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogDocument {
    projects: Vec<ProjectData>,
    versions: Vec<ProjectVersionRecord>,
}

/// Durable catalog store backed by a single JSON document on disk.
///
/// Implements both [`ProjectStore`] and [`VersionStore`] so the CLI keeps
/// one file per data directory. Every mutation rewrites the document; the
/// record-level upsert semantics the refresh pipeline relies on are
/// preserved because all access goes through one lock.
pub struct JsonFileCatalog {
    path: PathBuf,
    document: Mutex<CatalogDocument>,
}

impl JsonFileCatalog {
    /// Opens (or initializes) the catalog file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Arc<Self>, DomainError> {
        let path = path.as_ref().to_path_buf();
        let document = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                DomainError::storage(format!("Corrupt catalog file {}: {e}", path.display()))
            })?
        } else {
            CatalogDocument::default()
        };

        debug!(
            "Opened catalog {} ({} projects, {} version records)",
            path.display(),
            document.projects.len(),
            document.versions.len()
        );

        Ok(Arc::new(Self {
            path,
            document: Mutex::new(document),
        }))
    }

    async fn persist(&self, document: &CatalogDocument) -> Result<(), DomainError> {
        let raw = serde_json::to_string_pretty(document)
            .map_err(|e| DomainError::storage(format!("Failed to serialize catalog: {e}")))?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for JsonFileCatalog {
    async fn find(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Option<ProjectData>, DomainError> {
        let document = self.document.lock().await;
        Ok(document
            .projects
            .iter()
            .find(|project| project.matches_coordinates(group_id, artifact_id))
            .cloned())
    }

    async fn find_by_project_id(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectData>, DomainError> {
        let document = self.document.lock().await;
        Ok(document
            .projects
            .iter()
            .find(|project| project.project_id() == project_id)
            .cloned())
    }

    async fn all(&self) -> Result<Vec<ProjectData>, DomainError> {
        let document = self.document.lock().await;
        Ok(document.projects.clone())
    }

    async fn create_or_update(&self, project: &ProjectData) -> Result<(), DomainError> {
        let mut document = self.document.lock().await;
        match document
            .projects
            .iter_mut()
            .find(|p| p.matches_coordinates(project.group_id(), project.artifact_id()))
        {
            Some(existing) => *existing = project.clone(),
            None => document.projects.push(project.clone()),
        }
        self.persist(&document).await
    }
}

#[async_trait]
impl VersionStore for JsonFileCatalog {
    async fn find(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Option<ProjectVersionRecord>, DomainError> {
        let document = self.document.lock().await;
        Ok(document
            .versions
            .iter()
            .find(|record| {
                record.group_id() == group_id
                    && record.artifact_id() == artifact_id
                    && record.version_id() == version_id
            })
            .cloned())
    }

    async fn find_by_coordinates(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<ProjectVersionRecord>, DomainError> {
        let document = self.document.lock().await;
        Ok(document
            .versions
            .iter()
            .filter(|record| record.group_id() == group_id && record.artifact_id() == artifact_id)
            .cloned()
            .collect())
    }

    async fn create_or_update(
        &self,
        record: &ProjectVersionRecord,
    ) -> Result<ProjectVersionRecord, DomainError> {
        let mut document = self.document.lock().await;
        match document.versions.iter_mut().find(|r| {
            r.group_id() == record.group_id()
                && r.artifact_id() == record.artifact_id()
                && r.version_id() == record.version_id()
        }) {
            Some(existing) => *existing = record.clone(),
            None => document.versions.push(record.clone()),
        }
        self.persist(&document).await?;
        Ok(record.clone())
    }

    async fn exclude_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
        reason: &str,
    ) -> Result<ProjectVersionRecord, DomainError> {
        let mut document = self.document.lock().await;
        let record = match document.versions.iter_mut().find(|r| {
            r.group_id() == group_id
                && r.artifact_id() == artifact_id
                && r.version_id() == version_id
        }) {
            Some(existing) => {
                existing.exclude(reason);
                existing.clone()
            }
            None => {
                let mut created =
                    ProjectVersionRecord::new(group_id, artifact_id, version_id.clone());
                created.exclude(reason);
                document.versions.push(created.clone());
                created
            }
        };
        self.persist(&document).await?;
        Ok(record)
    }
}
