use anyhow::Result;

use super::super::Container;

pub struct ProjectController<'a> {
    container: &'a Container,
}

impl<'a> ProjectController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn register(
        &self,
        project_id: String,
        group_id: String,
        artifact_id: String,
    ) -> Result<String> {
        let use_case = self.container.register_use_case();
        let project = use_case
            .execute(&project_id, &group_id, &artifact_id)
            .await?;

        Ok(format!(
            "Registered project {} at {}",
            project.project_id(),
            project.coordinates()
        ))
    }
}
