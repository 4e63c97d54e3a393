use serde::{Deserialize, Serialize};

use super::VersionId;

/// A dependency reference: a pointer into another project's version space.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectVersion {
    pub group_id: String,
    pub artifact_id: String,
    pub version_id: VersionId,
}

impl ProjectVersion {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version_id: impl Into<VersionId>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version_id: version_id.into(),
        }
    }

    /// Rendering used in user-facing messages, e.g.
    /// `examples.metadata-test-dependencies-1.0.0`.
    pub fn gav(&self) -> String {
        format!("{}-{}-{}", self.group_id, self.artifact_id, self.version_id)
    }
}

/// One catalog record per (coordinate, version): the version's dependency
/// set and its exclusion state.
///
/// Created on first successful validation, mutated in place by later
/// refreshes (the dependency set is replaced wholesale, never merged), and
/// never deleted by the refresh path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectVersionRecord {
    group_id: String,
    artifact_id: String,
    version_id: VersionId,
    dependencies: Vec<ProjectVersion>,
    excluded: bool,
    exclusion_reason: Option<String>,
}

impl ProjectVersionRecord {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version_id: impl Into<VersionId>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version_id: version_id.into(),
            dependencies: Vec::new(),
            excluded: false,
            exclusion_reason: None,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version_id(&self) -> &VersionId {
        &self.version_id
    }

    pub fn dependencies(&self) -> &[ProjectVersion] {
        &self.dependencies
    }

    /// Replaces the whole dependency set. Last writer wins; there is no
    /// merging of dependency sets across refreshes.
    pub fn set_dependencies(&mut self, dependencies: Vec<ProjectVersion>) {
        self.dependencies = dependencies;
    }

    pub fn is_excluded(&self) -> bool {
        self.excluded
    }

    pub fn exclusion_reason(&self) -> Option<&str> {
        self.exclusion_reason.as_deref()
    }

    /// Marks the version excluded. Re-excluding overwrites the reason;
    /// dependency data is kept.
    pub fn exclude(&mut self, reason: impl Into<String>) {
        self.excluded = true;
        self.exclusion_reason = Some(reason.into());
    }
}
