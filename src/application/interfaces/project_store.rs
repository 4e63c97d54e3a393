use async_trait::async_trait;

use crate::domain::{DomainError, ProjectData};

/// Persistence for project records (business key + coordinates).
///
/// The refresh path only reads project data; writes happen during project
/// onboarding.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Option<ProjectData>, DomainError>;

    async fn find_by_project_id(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectData>, DomainError>;

    async fn all(&self) -> Result<Vec<ProjectData>, DomainError>;

    async fn create_or_update(&self, project: &ProjectData) -> Result<(), DomainError>;
}
