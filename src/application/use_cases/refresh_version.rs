use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{
    ArtifactHandlerRegistry, ArtifactRepository, NotificationQueue, ProjectStore, VersionStore,
};
use crate::domain::{
    DomainError, EventResponse, ProjectVersion, ProjectVersionRecord, RefreshNotification,
    VersionId,
};

/// The version refresh pipeline: turns one notification into catalog state
/// changes plus an accumulated response.
///
/// Expected failures (validation errors, unresolvable versions, missing
/// dependencies, exclusion vetoes) are reported inside the returned
/// [`EventResponse`]; only collaborator faults surface as `Err`, in which
/// case the caller is expected to retry the whole notification.
pub struct RefreshVersionUseCase {
    project_store: Arc<dyn ProjectStore>,
    version_store: Arc<dyn VersionStore>,
    artifact_repository: Arc<dyn ArtifactRepository>,
    queue: Arc<dyn NotificationQueue>,
    handlers: Arc<ArtifactHandlerRegistry>,
}

impl RefreshVersionUseCase {
    pub fn new(
        project_store: Arc<dyn ProjectStore>,
        version_store: Arc<dyn VersionStore>,
        artifact_repository: Arc<dyn ArtifactRepository>,
        queue: Arc<dyn NotificationQueue>,
        handlers: Arc<ArtifactHandlerRegistry>,
    ) -> Self {
        Self {
            project_store,
            version_store,
            artifact_repository,
            queue,
            handlers,
        }
    }

    /// Checks a notification against the catalog without touching the
    /// artifact repository or mutating any store.
    ///
    /// Returns human-readable error strings; empty means valid. Guards the
    /// coordinate-uniqueness invariant: a notification's project id must
    /// match the project already holding those coordinates.
    pub async fn validate_event(
        &self,
        notification: &RefreshNotification,
    ) -> Result<Vec<String>, DomainError> {
        let found = self
            .project_store
            .find(&notification.group_id, &notification.artifact_id)
            .await?;

        let Some(project) = found else {
            return Ok(vec![format!(
                "No Project with coordinates {} found",
                notification.coordinates()
            )]);
        };

        if notification.project_id.as_deref() != Some(project.project_id()) {
            return Ok(vec![format!(
                "Invalid projectId [{}]. Existing project [{}] has same [{}] coordinates",
                notification.project_id_for_display(),
                project.project_id(),
                notification.coordinates()
            )]);
        }

        Ok(Vec::new())
    }

    /// Handles one refresh notification end to end.
    pub async fn handle_event(
        &self,
        notification: &RefreshNotification,
    ) -> Result<EventResponse, DomainError> {
        let mut response = EventResponse::new();

        let validation_errors = self.validate_event(notification).await?;
        if !validation_errors.is_empty() {
            response.add_errors(validation_errors);
            return Ok(response);
        }

        let group_id = &notification.group_id;
        let artifact_id = &notification.artifact_id;
        let version_id = &notification.version_id;

        if !self
            .version_exists_upstream(group_id, artifact_id, version_id)
            .await?
        {
            response.add_error(format!(
                "Version {} does not exists for {}",
                version_id,
                notification.coordinates()
            ));
            return Ok(response);
        }

        let existing = self
            .version_store
            .find(group_id, artifact_id, version_id)
            .await?;
        if let Some(record) = &existing {
            // Sticky veto: an excluded version fails every refresh attempt
            // until an administrator clears the exclusion.
            if record.is_excluded() {
                warn!(
                    "Refusing refresh of excluded version {}-{}",
                    notification.coordinates(),
                    version_id
                );
                response.add_error(
                    record
                        .exclusion_reason()
                        .unwrap_or("version is excluded")
                        .to_string(),
                );
                return Ok(response);
            }
        }

        let mut dependencies: Vec<ProjectVersion> = self
            .artifact_repository
            .find_dependencies(group_id, artifact_id, version_id)
            .await?
            .into_iter()
            .collect();
        dependencies.sort();

        debug!(
            "Resolved {} dependencies for {}-{}",
            dependencies.len(),
            notification.coordinates(),
            version_id
        );

        let mut dependency_errors = Vec::new();
        for dependency in &dependencies {
            dependency_errors.extend(self.validate_dependency(notification, dependency).await?);
        }

        // The record is written even when dependencies failed: partial
        // persistence keeps retries from restating already-valid data.
        let mut record = existing
            .unwrap_or_else(|| ProjectVersionRecord::new(group_id, artifact_id, version_id.clone()));
        record.set_dependencies(dependencies);
        self.version_store.create_or_update(&record).await?;

        if !dependency_errors.is_empty() {
            response.add_errors(dependency_errors);
            return Ok(response);
        }

        for handler in self.handlers.handlers() {
            debug!(
                "Dispatching {} handler for {}-{}",
                handler.artifact_type(),
                notification.coordinates(),
                version_id
            );
            let handler_response = handler
                .refresh_version(group_id, artifact_id, version_id)
                .await?;
            response.combine(handler_response);
        }

        response.mark_processed();
        info!(
            "Refreshed {}-{} ({} dependencies)",
            notification.coordinates(),
            version_id,
            record.dependencies().len()
        );
        Ok(response)
    }

    /// Confirms a version genuinely exists upstream: the snapshot marker by
    /// resolving it, a concrete id by membership in the published list.
    async fn version_exists_upstream(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<bool, DomainError> {
        match version_id {
            VersionId::Snapshot => Ok(self
                .artifact_repository
                .find_version(group_id, artifact_id, version_id)
                .await?
                .is_some()),
            VersionId::Concrete(_) => Ok(self
                .artifact_repository
                .find_versions(group_id, artifact_id)
                .await?
                .contains(version_id)),
        }
    }

    /// Checks one declared dependency, returning the errors it contributes.
    ///
    /// Store presence is required regardless of the transitive flag: missing
    /// dependencies are never ingested implicitly, they must be refreshed by
    /// their own notifications first. A transitive refresh additionally
    /// validates the dependency coordinate the way the parent was validated.
    async fn validate_dependency(
        &self,
        notification: &RefreshNotification,
        dependency: &ProjectVersion,
    ) -> Result<Vec<String>, DomainError> {
        let in_store = self
            .version_store
            .find(
                &dependency.group_id,
                &dependency.artifact_id,
                &dependency.version_id,
            )
            .await?
            .is_some();

        if !in_store {
            self.enqueue_dependency_refresh(notification, dependency)
                .await?;
            return Ok(vec![format!(
                "Dependency {} not found in store",
                dependency.gav()
            )]);
        }

        if !notification.transitive {
            return Ok(Vec::new());
        }

        if self
            .project_store
            .find(&dependency.group_id, &dependency.artifact_id)
            .await?
            .is_none()
        {
            return Ok(vec![format!(
                "No Project with coordinates {}-{} found",
                dependency.group_id, dependency.artifact_id
            )]);
        }

        if !self
            .version_exists_upstream(
                &dependency.group_id,
                &dependency.artifact_id,
                &dependency.version_id,
            )
            .await?
        {
            // Reported with the dependency's original version string, even
            // for the snapshot marker.
            return Ok(vec![format!(
                "Version {} does not exists for {}-{}",
                dependency.version_id, dependency.group_id, dependency.artifact_id
            )]);
        }

        if let Some(record) = self
            .version_store
            .find(
                &dependency.group_id,
                &dependency.artifact_id,
                &dependency.version_id,
            )
            .await?
        {
            if record.is_excluded() {
                return Ok(vec![record
                    .exclusion_reason()
                    .unwrap_or("version is excluded")
                    .to_string()]);
            }
        }

        Ok(Vec::new())
    }

    /// Queues a follow-up refresh for a store-missing dependency, linked to
    /// the triggering notification through the parent event id. Dependencies
    /// of unknown projects are skipped; a refresh could never accept them.
    async fn enqueue_dependency_refresh(
        &self,
        notification: &RefreshNotification,
        dependency: &ProjectVersion,
    ) -> Result<(), DomainError> {
        let Some(project) = self
            .project_store
            .find(&dependency.group_id, &dependency.artifact_id)
            .await?
        else {
            debug!(
                "Not queueing refresh for {}: no project with those coordinates",
                dependency.gav()
            );
            return Ok(());
        };

        let mut cascade = RefreshNotification::new(
            Some(project.project_id().to_string()),
            dependency.group_id.clone(),
            dependency.artifact_id.clone(),
            dependency.version_id.clone(),
            notification.transitive,
        );
        cascade.parent_event_id = notification.parent_event_id.clone();

        let event_id = self.queue.push(cascade).await?;
        info!(
            "Queued refresh {} for missing dependency {}",
            event_id,
            dependency.gav()
        );
        Ok(())
    }
}
