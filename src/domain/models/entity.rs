use serde::{Deserialize, Serialize};

/// A model entity extracted from a validated artifact version.
///
/// The depot treats entity content as opaque JSON; parsing it out of the
/// artifact payload is the provider's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    path: String,
    classifier_path: String,
    content: serde_json::Value,
}

impl Entity {
    pub fn new(
        path: impl Into<String>,
        classifier_path: impl Into<String>,
        content: serde_json::Value,
    ) -> Self {
        Self {
            path: path.into(),
            classifier_path: classifier_path.into(),
            content,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn classifier_path(&self) -> &str {
        &self.classifier_path
    }

    pub fn content(&self) -> &serde_json::Value {
        &self.content
    }
}
