use std::sync::Arc;

use crate::application::VersionStore;
use crate::domain::{DomainError, ProjectVersionRecord, VersionId};

/// Read-side queries over per-version catalog records.
pub struct QueryVersionsUseCase {
    version_store: Arc<dyn VersionStore>,
}

impl QueryVersionsUseCase {
    pub fn new(version_store: Arc<dyn VersionStore>) -> Self {
        Self { version_store }
    }

    pub async fn list(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<ProjectVersionRecord>, DomainError> {
        self.version_store
            .find_by_coordinates(group_id, artifact_id)
            .await
    }

    pub async fn find(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Option<ProjectVersionRecord>, DomainError> {
        self.version_store
            .find(group_id, artifact_id, version_id)
            .await
    }

    /// The highest concrete, non-excluded version for a coordinate.
    ///
    /// Versions that parse as three-part semver are ordered numerically;
    /// anything else falls back behind them in lexicographic order. The
    /// snapshot marker never wins.
    pub async fn latest(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Option<ProjectVersionRecord>, DomainError> {
        let records = self
            .version_store
            .find_by_coordinates(group_id, artifact_id)
            .await?;

        Ok(records
            .into_iter()
            .filter(|record| !record.is_excluded() && !record.version_id().is_snapshot())
            .max_by_key(|record| version_rank(record.version_id())))
    }
}

fn version_rank(version_id: &VersionId) -> (bool, Option<(u64, u64, u64)>, String) {
    let semver = version_id.semver();
    (semver.is_some(), semver, version_id.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_rank_prefers_numeric_ordering() {
        let low = version_rank(&VersionId::parse("2.9.0"));
        let high = version_rank(&VersionId::parse("2.111.0"));
        assert!(high > low);

        // Non-semver identifiers rank behind any semver one.
        let odd = version_rank(&VersionId::parse("2020-release"));
        assert!(low > odd);
    }
}
