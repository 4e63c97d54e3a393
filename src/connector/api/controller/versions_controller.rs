use anyhow::Result;

use crate::domain::{ProjectVersionRecord, VersionId};

use super::super::Container;

pub struct VersionsController<'a> {
    container: &'a Container,
}

impl<'a> VersionsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self, group_id: String, artifact_id: String) -> Result<String> {
        let use_case = self.container.query_use_case();
        let records = use_case.list(&group_id, &artifact_id).await?;

        if records.is_empty() {
            return Ok(format!("No versions found for {}-{}.", group_id, artifact_id));
        }

        let mut output = format!("Versions of {}-{}:\n", group_id, artifact_id);
        for record in &records {
            output.push_str(&self.format_record(record));
            output.push('\n');
        }
        Ok(output.trim_end().to_string())
    }

    pub async fn show(
        &self,
        group_id: String,
        artifact_id: String,
        version: String,
    ) -> Result<String> {
        let version_id = VersionId::parse(&version);
        let use_case = self.container.query_use_case();

        match use_case.find(&group_id, &artifact_id, &version_id).await? {
            Some(record) => Ok(self.format_record_with_dependencies(&record)),
            None => Ok(format!(
                "No version record for {}-{}-{}.",
                group_id, artifact_id, version_id
            )),
        }
    }

    pub async fn latest(&self, group_id: String, artifact_id: String) -> Result<String> {
        let use_case = self.container.query_use_case();

        match use_case.latest(&group_id, &artifact_id).await? {
            Some(record) => Ok(self.format_record_with_dependencies(&record)),
            None => Ok(format!(
                "No released versions found for {}-{}.",
                group_id, artifact_id
            )),
        }
    }

    fn format_record(&self, record: &ProjectVersionRecord) -> String {
        let mut line = format!(
            "  {} ({} dependencies)",
            record.version_id(),
            record.dependencies().len()
        );
        if record.is_excluded() {
            line.push_str(&format!(
                " [excluded: {}]",
                record.exclusion_reason().unwrap_or("no reason recorded")
            ));
        }
        line
    }

    fn format_record_with_dependencies(&self, record: &ProjectVersionRecord) -> String {
        let mut output = format!(
            "{}-{}-{}",
            record.group_id(),
            record.artifact_id(),
            record.version_id()
        );
        if record.is_excluded() {
            output.push_str(&format!(
                " [excluded: {}]",
                record.exclusion_reason().unwrap_or("no reason recorded")
            ));
        }
        if record.dependencies().is_empty() {
            output.push_str("\n  no dependencies");
        } else {
            for dependency in record.dependencies() {
                output.push_str(&format!("\n  depends on {}", dependency.gav()));
            }
        }
        output
    }
}
