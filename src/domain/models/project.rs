use serde::{Deserialize, Serialize};

/// A project known to the depot: a business key plus the repository
/// coordinates it publishes under.
///
/// A project id maps to exactly one `(group_id, artifact_id)` coordinate and
/// vice versa; the onboarding and validation paths both enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectData {
    project_id: String,
    group_id: String,
    artifact_id: String,
}

impl ProjectData {
    pub fn new(
        project_id: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn matches_coordinates(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id == group_id && self.artifact_id == artifact_id
    }

    /// Coordinate rendering used in user-facing messages, e.g.
    /// `examples.metadata-test`.
    pub fn coordinates(&self) -> String {
        format!("{}-{}", self.group_id, self.artifact_id)
    }
}
