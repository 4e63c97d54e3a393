use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{DomainError, ProjectVersion, VersionId};

/// Client for the upstream artifact repository.
///
/// An empty list or `None` is a valid not-found result; an `Err` means the
/// collaborator itself is unreachable or malformed and is propagated to the
/// caller as a fault rather than folded into an event response.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// All versions published for a coordinate.
    async fn find_versions(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<VersionId>, DomainError>;

    /// Resolves one version identifier (possibly the snapshot marker) to a
    /// concrete upstream marker, when it exists.
    async fn find_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Option<VersionId>, DomainError>;

    /// The direct dependency set declared by a coordinate + version.
    async fn find_dependencies(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<HashSet<ProjectVersion>, DomainError>;
}
