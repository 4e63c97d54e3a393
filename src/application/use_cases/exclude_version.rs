use std::sync::Arc;

use tracing::info;

use crate::application::VersionStore;
use crate::domain::{DomainError, ProjectVersionRecord, VersionId};

/// Marks a (coordinate, version) as permanently skipped for normal refresh.
///
/// Idempotent: re-excluding overwrites the stored reason. Dependency data is
/// kept, and there is no un-exclusion path here; clearing an exclusion is an
/// explicit administrative action.
pub struct ExcludeVersionUseCase {
    version_store: Arc<dyn VersionStore>,
}

impl ExcludeVersionUseCase {
    pub fn new(version_store: Arc<dyn VersionStore>) -> Self {
        Self { version_store }
    }

    pub async fn execute(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
        reason: &str,
    ) -> Result<ProjectVersionRecord, DomainError> {
        let record = self
            .version_store
            .exclude_version(group_id, artifact_id, version_id, reason)
            .await?;

        info!(
            "Excluded {}-{}-{}: {}",
            group_id, artifact_id, version_id, reason
        );
        Ok(record)
    }
}
