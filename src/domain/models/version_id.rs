use std::fmt;

use serde::{Deserialize, Serialize};

/// The distinguished version identifier meaning "always resolve to the
/// latest build" of an artifact, as opposed to a fixed release version.
pub const MASTER_SNAPSHOT: &str = "master-SNAPSHOT";

/// A version identifier: either a concrete release version or the mutable
/// snapshot marker.
///
/// Modeled as a tagged variant rather than a sentinel string so every
/// resolution path has to handle the snapshot case explicitly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VersionId {
    Snapshot,
    Concrete(String),
}

impl VersionId {
    pub fn parse(value: &str) -> Self {
        if value == MASTER_SNAPSHOT {
            VersionId::Snapshot
        } else {
            VersionId::Concrete(value.to_string())
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, VersionId::Snapshot)
    }

    pub fn as_str(&self) -> &str {
        match self {
            VersionId::Snapshot => MASTER_SNAPSHOT,
            VersionId::Concrete(v) => v,
        }
    }

    /// Numeric `(major, minor, patch)` view for concrete three-part versions.
    /// Snapshots and non-numeric identifiers have no semver view.
    pub fn semver(&self) -> Option<(u64, u64, u64)> {
        let VersionId::Concrete(value) = self else {
            return None;
        };
        let mut parts = value.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some((major, minor, patch))
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for VersionId {
    fn from(value: String) -> Self {
        VersionId::parse(&value)
    }
}

impl From<&str> for VersionId {
    fn from(value: &str) -> Self {
        VersionId::parse(value)
    }
}

impl From<VersionId> for String {
    fn from(value: VersionId) -> Self {
        value.as_str().to_string()
    }
}
