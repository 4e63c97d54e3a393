use serde::{Deserialize, Serialize};

use super::VersionId;

/// A request to (re)process one artifact coordinate + version.
///
/// `parent_event_id` threads a causal chain across cascading refreshes for
/// tracing; it is opaque data, propagated but never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshNotification {
    pub project_id: Option<String>,
    pub group_id: String,
    pub artifact_id: String,
    pub version_id: VersionId,
    /// When set, every declared dependency must itself be resolvable the
    /// same way the parent is; when unset, dependencies are only checked for
    /// presence in the store.
    pub transitive: bool,
    pub parent_event_id: Option<String>,
}

impl RefreshNotification {
    pub fn new(
        project_id: Option<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version_id: impl Into<VersionId>,
        transitive: bool,
    ) -> Self {
        Self {
            project_id,
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version_id: version_id.into(),
            transitive,
            parent_event_id: None,
        }
    }

    pub fn with_parent_event(mut self, parent_event_id: impl Into<String>) -> Self {
        self.parent_event_id = Some(parent_event_id.into());
        self
    }

    /// Coordinate rendering used in user-facing messages.
    pub fn coordinates(&self) -> String {
        format!("{}-{}", self.group_id, self.artifact_id)
    }

    /// The project id as it appears in validation messages: the literal
    /// `null` when absent, the empty string when empty.
    pub fn project_id_for_display(&self) -> &str {
        self.project_id.as_deref().unwrap_or("null")
    }
}
