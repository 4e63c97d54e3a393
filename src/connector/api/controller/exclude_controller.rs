use anyhow::Result;

use crate::domain::VersionId;

use super::super::Container;

pub struct ExcludeController<'a> {
    container: &'a Container,
}

impl<'a> ExcludeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn exclude(
        &self,
        group_id: String,
        artifact_id: String,
        version: String,
        reason: String,
    ) -> Result<String> {
        let version_id = VersionId::parse(&version);
        let use_case = self.container.exclude_use_case();
        let record = use_case
            .execute(&group_id, &artifact_id, &version_id, &reason)
            .await?;

        Ok(format!(
            "Excluded {}-{}-{}: {}",
            record.group_id(),
            record.artifact_id(),
            record.version_id(),
            record.exclusion_reason().unwrap_or(&reason)
        ))
    }
}
