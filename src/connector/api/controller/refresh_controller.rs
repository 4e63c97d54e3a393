use anyhow::Result;

use crate::domain::{EventResponse, EventStatus, RefreshNotification};

use super::super::Container;

pub struct RefreshController<'a> {
    container: &'a Container,
}

impl<'a> RefreshController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn refresh(
        &self,
        group_id: String,
        artifact_id: String,
        version: String,
        project_id: Option<String>,
        transitive: bool,
        parent_event_id: Option<String>,
    ) -> Result<String> {
        let mut notification = RefreshNotification::new(
            project_id,
            group_id,
            artifact_id,
            version.as_str(),
            transitive,
        );
        notification.parent_event_id = parent_event_id;

        let use_case = self.container.refresh_use_case();
        let response = use_case.handle_event(&notification).await?;

        Ok(self.format_response(&response))
    }

    pub async fn validate(
        &self,
        group_id: String,
        artifact_id: String,
        version: String,
        project_id: Option<String>,
    ) -> Result<String> {
        let notification =
            RefreshNotification::new(project_id, group_id, artifact_id, version.as_str(), false);

        let use_case = self.container.refresh_use_case();
        let errors = use_case.validate_event(&notification).await?;

        if errors.is_empty() {
            Ok("Notification is valid.".to_string())
        } else {
            Ok(errors.join("\n"))
        }
    }

    fn format_response(&self, response: &EventResponse) -> String {
        let mut output = match response.status() {
            EventStatus::Processed => "Refresh processed.".to_string(),
            EventStatus::Failed => "Refresh failed.".to_string(),
            EventStatus::None => "Nothing to do.".to_string(),
        };

        for message in response.messages() {
            output.push_str(&format!("\n  {}", message));
        }
        for error in response.errors() {
            output.push_str(&format!("\n  error: {}", error));
        }

        output
    }
}
