use async_trait::async_trait;

use crate::domain::{DomainError, ProjectVersionRecord, VersionId};

/// Persistence for per-version catalog records.
///
/// `create_or_update` is a logical upsert of the whole record; the store is
/// the only mutable shared resource and one record is the unit of atomicity.
/// At-most-one-in-flight refresh per (coordinate, version) is enforced by
/// the dispatching layer, not here.
#[async_trait]
pub trait VersionStore: Send + Sync {
    async fn find(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Option<ProjectVersionRecord>, DomainError>;

    async fn find_by_coordinates(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<ProjectVersionRecord>, DomainError>;

    async fn create_or_update(
        &self,
        record: &ProjectVersionRecord,
    ) -> Result<ProjectVersionRecord, DomainError>;

    /// Marks a version permanently skipped for normal refresh, creating the
    /// record when absent. Idempotent; re-excluding overwrites the reason.
    async fn exclude_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
        reason: &str,
    ) -> Result<ProjectVersionRecord, DomainError>;
}
