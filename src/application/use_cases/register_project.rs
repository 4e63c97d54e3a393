use std::sync::Arc;

use tracing::info;

use crate::application::ProjectStore;
use crate::domain::{DomainError, ProjectData};

/// Project onboarding: records the mapping between a project's business key
/// and its repository coordinates.
///
/// Enforces the catalog invariant up front: one project id maps to exactly
/// one coordinate, and one coordinate to exactly one project id.
pub struct RegisterProjectUseCase {
    project_store: Arc<dyn ProjectStore>,
}

impl RegisterProjectUseCase {
    pub fn new(project_store: Arc<dyn ProjectStore>) -> Self {
        Self { project_store }
    }

    pub async fn execute(
        &self,
        project_id: &str,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<ProjectData, DomainError> {
        if project_id.is_empty() {
            return Err(DomainError::invalid_input("projectId must not be empty"));
        }

        if let Some(existing) = self.project_store.find(group_id, artifact_id).await? {
            if existing.project_id() != project_id {
                return Err(DomainError::invalid_input(format!(
                    "Coordinates {}-{} already belong to project {}",
                    group_id,
                    artifact_id,
                    existing.project_id()
                )));
            }
            return Ok(existing);
        }

        if let Some(existing) = self.project_store.find_by_project_id(project_id).await? {
            if !existing.matches_coordinates(group_id, artifact_id) {
                return Err(DomainError::invalid_input(format!(
                    "Project {} already registered with coordinates {}",
                    project_id,
                    existing.coordinates()
                )));
            }
        }

        let project = ProjectData::new(project_id, group_id, artifact_id);
        self.project_store.create_or_update(&project).await?;

        info!("Registered project {} at {}-{}", project_id, group_id, artifact_id);
        Ok(project)
    }
}
