use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{
    ExcludeController, ProjectController, QueueController, RefreshController, VersionsController,
};

pub struct Router<'a> {
    project_controller: ProjectController<'a>,
    refresh_controller: RefreshController<'a>,
    exclude_controller: ExcludeController<'a>,
    versions_controller: VersionsController<'a>,
    queue_controller: QueueController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            project_controller: ProjectController::new(container),
            refresh_controller: RefreshController::new(container),
            exclude_controller: ExcludeController::new(container),
            versions_controller: VersionsController::new(container),
            queue_controller: QueueController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Register {
                project_id,
                group_id,
                artifact_id,
            } => {
                self.project_controller
                    .register(project_id, group_id, artifact_id)
                    .await
            }
            Commands::Refresh {
                group_id,
                artifact_id,
                version,
                project_id,
                transitive,
                parent_event_id,
            } => {
                self.refresh_controller
                    .refresh(
                        group_id,
                        artifact_id,
                        version,
                        project_id,
                        transitive,
                        parent_event_id,
                    )
                    .await
            }
            Commands::Validate {
                group_id,
                artifact_id,
                version,
                project_id,
            } => {
                self.refresh_controller
                    .validate(group_id, artifact_id, version, project_id)
                    .await
            }
            Commands::Exclude {
                group_id,
                artifact_id,
                version,
                reason,
            } => {
                self.exclude_controller
                    .exclude(group_id, artifact_id, version, reason)
                    .await
            }
            Commands::Versions {
                group_id,
                artifact_id,
            } => self.versions_controller.list(group_id, artifact_id).await,
            Commands::Show {
                group_id,
                artifact_id,
                version,
            } => {
                self.versions_controller
                    .show(group_id, artifact_id, version)
                    .await
            }
            Commands::Latest {
                group_id,
                artifact_id,
            } => self.versions_controller.latest(group_id, artifact_id).await,
            Commands::Drain => self.queue_controller.drain().await,
        }
    }
}
