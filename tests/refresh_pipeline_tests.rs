use std::sync::Arc;

use serde_json::json;

use depot::{
    ArtifactHandlerRegistry, EntitiesHandler, Entity, EntityStore, EventStatus,
    InMemoryArtifactRepository, InMemoryEntityProvider, InMemoryEntityStore, InMemoryProjectStore,
    InMemoryQueue, InMemoryVersionStore, NotificationQueue, ProjectData, ProjectStore,
    ProjectVersion, ProjectVersionRecord, RefreshNotification, RefreshVersionUseCase, VersionId,
    VersionStore,
};

const GROUP: &str = "examples.metadata";
const ARTIFACT: &str = "test";
const DEP_ARTIFACT: &str = "test-dependencies";

struct Harness {
    project_store: Arc<InMemoryProjectStore>,
    version_store: Arc<InMemoryVersionStore>,
    repository: Arc<InMemoryArtifactRepository>,
    queue: Arc<InMemoryQueue>,
    entity_provider: Arc<InMemoryEntityProvider>,
    entity_store: Arc<InMemoryEntityStore>,
    use_case: RefreshVersionUseCase,
}

/// Builds the pipeline with PROD-1 registered at examples.metadata-test and
/// PROD-2 at examples.metadata-test-dependencies.
async fn harness() -> Harness {
    let project_store = Arc::new(InMemoryProjectStore::new());
    let version_store = Arc::new(InMemoryVersionStore::new());
    let repository = Arc::new(InMemoryArtifactRepository::new());
    let queue = Arc::new(InMemoryQueue::new());
    let entity_provider = Arc::new(InMemoryEntityProvider::new());
    let entity_store = Arc::new(InMemoryEntityStore::new());

    project_store
        .create_or_update(&ProjectData::new("PROD-1", GROUP, ARTIFACT))
        .await
        .expect("seed project");
    project_store
        .create_or_update(&ProjectData::new("PROD-2", GROUP, DEP_ARTIFACT))
        .await
        .expect("seed dependency project");

    let mut handlers = ArtifactHandlerRegistry::new();
    handlers.register(Arc::new(EntitiesHandler::new(
        entity_provider.clone(),
        entity_store.clone(),
    )));

    let use_case = RefreshVersionUseCase::new(
        project_store.clone(),
        version_store.clone(),
        repository.clone(),
        queue.clone(),
        Arc::new(handlers),
    );

    Harness {
        project_store,
        version_store,
        repository,
        queue,
        entity_provider,
        entity_store,
        use_case,
    }
}

fn notification(version: &str) -> RefreshNotification {
    RefreshNotification::new(Some("PROD-1".to_string()), GROUP, ARTIFACT, version, false)
}

#[tokio::test]
async fn refresh_fails_for_unknown_coordinates() {
    let h = harness().await;
    let event = RefreshNotification::new(
        Some("PROD-1".to_string()),
        "i.am.not.in",
        ARTIFACT,
        "1.0.0",
        false,
    );

    let response = h.use_case.handle_event(&event).await.expect("handle");

    assert_eq!(response.status(), EventStatus::Failed);
    assert_eq!(
        response.errors(),
        ["No Project with coordinates i.am.not.in-test found"]
    );
}

#[tokio::test]
async fn validate_event_rejects_wrong_missing_and_empty_project_ids() {
    let h = harness().await;

    let wrong = RefreshNotification::new(Some("prod-d".to_string()), GROUP, ARTIFACT, "1.0.0", false);
    let errors = h.use_case.validate_event(&wrong).await.expect("validate");
    assert_eq!(
        errors,
        ["Invalid projectId [prod-d]. Existing project [PROD-1] has same [examples.metadata-test] coordinates"]
    );

    let missing = RefreshNotification::new(None, GROUP, ARTIFACT, "1.0.0", false);
    let errors = h.use_case.validate_event(&missing).await.expect("validate");
    assert_eq!(
        errors,
        ["Invalid projectId [null]. Existing project [PROD-1] has same [examples.metadata-test] coordinates"]
    );

    let empty = RefreshNotification::new(Some(String::new()), GROUP, ARTIFACT, "1.0.0", false);
    let errors = h.use_case.validate_event(&empty).await.expect("validate");
    assert_eq!(
        errors,
        ["Invalid projectId []. Existing project [PROD-1] has same [examples.metadata-test] coordinates"]
    );

    let valid = notification("1.0.0");
    let errors = h.use_case.validate_event(&valid).await.expect("validate");
    assert!(errors.is_empty());
}

#[tokio::test]
async fn handle_event_applies_the_same_validation_as_validate_event() {
    let h = harness().await;
    let event = RefreshNotification::new(None, GROUP, ARTIFACT, "1.0.0", false);

    let response = h.use_case.handle_event(&event).await.expect("handle");

    assert_eq!(response.status(), EventStatus::Failed);
    assert_eq!(
        response.errors(),
        ["Invalid projectId [null]. Existing project [PROD-1] has same [examples.metadata-test] coordinates"]
    );
}

#[tokio::test]
async fn refresh_fails_when_repository_has_no_versions() {
    let h = harness().await;

    let response = h
        .use_case
        .handle_event(&notification("1.0.0"))
        .await
        .expect("handle");

    assert_eq!(response.status(), EventStatus::Failed);
    assert_eq!(
        response.errors(),
        ["Version 1.0.0 does not exists for examples.metadata-test"]
    );
}

#[tokio::test]
async fn refresh_fails_for_unpublished_version_and_leaves_store_untouched() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;

    let response = h
        .use_case
        .handle_event(&notification("4.0.0"))
        .await
        .expect("handle");

    assert_eq!(response.status(), EventStatus::Failed);
    assert_eq!(
        response.errors(),
        ["Version 4.0.0 does not exists for examples.metadata-test"]
    );

    let stored = h
        .version_store
        .find(GROUP, ARTIFACT, &VersionId::parse("4.0.0"))
        .await
        .expect("find");
    assert!(stored.is_none(), "failed resolution must not create a record");
}

#[tokio::test]
async fn excluded_version_fails_with_the_stored_reason() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.111.0").await;
    h.version_store
        .exclude_version(
            GROUP,
            ARTIFACT,
            &VersionId::parse("2.111.0"),
            "version missing in repository",
        )
        .await
        .expect("exclude");

    let response = h
        .use_case
        .handle_event(&notification("2.111.0"))
        .await
        .expect("handle");

    assert_eq!(response.status(), EventStatus::Failed);
    assert_eq!(response.errors(), ["version missing in repository"]);

    // The veto is sticky across attempts.
    let again = h
        .use_case
        .handle_event(&notification("2.111.0"))
        .await
        .expect("handle");
    assert_eq!(again.errors(), ["version missing in repository"]);
}

#[tokio::test]
async fn missing_dependency_fails_but_persists_the_fetched_dependency_set() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;
    h.repository
        .set_dependencies(
            GROUP,
            ARTIFACT,
            "2.3.1",
            [ProjectVersion::new(GROUP, DEP_ARTIFACT, "1.0.0")],
        )
        .await;

    let response = h
        .use_case
        .handle_event(&notification("2.3.1"))
        .await
        .expect("handle");

    assert_eq!(response.status(), EventStatus::Failed);
    assert_eq!(
        response.errors(),
        ["Dependency examples.metadata-test-dependencies-1.0.0 not found in store"]
    );

    let record = h
        .version_store
        .find(GROUP, ARTIFACT, &VersionId::parse("2.3.1"))
        .await
        .expect("find")
        .expect("record persisted despite dependency failure");
    assert_eq!(
        record.dependencies(),
        [ProjectVersion::new(GROUP, DEP_ARTIFACT, "1.0.0")]
    );
}

#[tokio::test]
async fn missing_dependency_queues_a_cascade_refresh_with_the_parent_event() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;
    h.repository
        .set_dependencies(
            GROUP,
            ARTIFACT,
            "2.3.1",
            [ProjectVersion::new(GROUP, DEP_ARTIFACT, "1.0.0")],
        )
        .await;

    let event = notification("2.3.1").with_parent_event("origin-42");
    h.use_case.handle_event(&event).await.expect("handle");

    assert_eq!(h.queue.size().await.expect("size"), 1);
    let cascade = h.queue.pop().await.expect("pop").expect("queued cascade");
    assert_eq!(cascade.project_id.as_deref(), Some("PROD-2"));
    assert_eq!(cascade.group_id, GROUP);
    assert_eq!(cascade.artifact_id, DEP_ARTIFACT);
    assert_eq!(cascade.version_id, VersionId::parse("1.0.0"));
    assert_eq!(cascade.parent_event_id.as_deref(), Some("origin-42"));
}

#[tokio::test]
async fn no_cascade_is_queued_for_a_dependency_without_a_project() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;
    h.repository
        .set_dependencies(
            GROUP,
            ARTIFACT,
            "2.3.1",
            [ProjectVersion::new("some.other.group", "orphan", "1.0.0")],
        )
        .await;

    let response = h
        .use_case
        .handle_event(&notification("2.3.1"))
        .await
        .expect("handle");

    assert_eq!(
        response.errors(),
        ["Dependency some.other.group-orphan-1.0.0 not found in store"]
    );
    assert_eq!(h.queue.size().await.expect("size"), 0);
}

#[tokio::test]
async fn successful_refresh_stores_dependencies_and_runs_handlers() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;
    h.repository
        .set_dependencies(
            GROUP,
            ARTIFACT,
            "2.3.1",
            [ProjectVersion::new(GROUP, DEP_ARTIFACT, "1.0.0")],
        )
        .await;
    h.version_store
        .create_or_update(&ProjectVersionRecord::new(GROUP, DEP_ARTIFACT, "1.0.0"))
        .await
        .expect("seed dependency record");

    let version = VersionId::parse("2.3.1");
    h.entity_provider
        .set_entities(
            GROUP,
            ARTIFACT,
            &version,
            vec![
                Entity::new("model::Person", "meta::pure", json!({"name": "Person"})),
                Entity::new("model::Firm", "meta::pure", json!({"name": "Firm"})),
            ],
        )
        .await;

    let response = h
        .use_case
        .handle_event(&notification("2.3.1"))
        .await
        .expect("handle");

    assert_eq!(response.status(), EventStatus::Processed);
    assert!(response.errors().is_empty());
    assert_eq!(
        response.messages(),
        ["2 entities stored for examples.metadata-test-2.3.1"]
    );

    let record = h
        .version_store
        .find(GROUP, ARTIFACT, &version)
        .await
        .expect("find")
        .expect("record stored");
    assert_eq!(
        record.dependencies(),
        [ProjectVersion::new(GROUP, DEP_ARTIFACT, "1.0.0")]
    );

    let entities = h
        .entity_store
        .find_entities(GROUP, ARTIFACT, &version)
        .await
        .expect("entities");
    assert_eq!(entities.len(), 2);
}

#[tokio::test]
async fn refresh_replaces_the_dependency_set_wholesale() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;

    let mut record = ProjectVersionRecord::new(GROUP, ARTIFACT, "2.3.1");
    record.set_dependencies(vec![ProjectVersion::new(GROUP, "stale", "0.0.1")]);
    h.version_store
        .create_or_update(&record)
        .await
        .expect("seed stale record");

    // Upstream now declares no dependencies at all.
    let response = h
        .use_case
        .handle_event(&notification("2.3.1"))
        .await
        .expect("handle");

    assert_eq!(response.status(), EventStatus::Processed);
    let refreshed = h
        .version_store
        .find(GROUP, ARTIFACT, &VersionId::parse("2.3.1"))
        .await
        .expect("find")
        .expect("record");
    assert!(refreshed.dependencies().is_empty());
}

#[tokio::test]
async fn snapshot_refresh_resolves_through_the_repository() {
    let h = harness().await;

    // Not resolvable yet.
    let response = h
        .use_case
        .handle_event(&notification("master-SNAPSHOT"))
        .await
        .expect("handle");
    assert_eq!(
        response.errors(),
        ["Version master-SNAPSHOT does not exists for examples.metadata-test"]
    );

    h.repository.add_snapshot(GROUP, ARTIFACT).await;
    let response = h
        .use_case
        .handle_event(&notification("master-SNAPSHOT"))
        .await
        .expect("handle");
    assert_eq!(response.status(), EventStatus::Processed);
}

#[tokio::test]
async fn master_refresh_accepts_a_snapshot_dependency_present_in_store() {
    let h = harness().await;
    h.repository.add_snapshot(GROUP, ARTIFACT).await;
    h.repository.add_snapshot(GROUP, DEP_ARTIFACT).await;
    h.repository
        .set_dependencies(
            GROUP,
            ARTIFACT,
            "master-SNAPSHOT",
            [ProjectVersion::new(GROUP, DEP_ARTIFACT, "master-SNAPSHOT")],
        )
        .await;
    h.version_store
        .create_or_update(&ProjectVersionRecord::new(
            GROUP,
            DEP_ARTIFACT,
            "master-SNAPSHOT",
        ))
        .await
        .expect("seed dependency record");

    let mut event = notification("master-SNAPSHOT");
    event.transitive = true;

    let response = h.use_case.handle_event(&event).await.expect("handle");
    assert_eq!(response.status(), EventStatus::Processed);
}

#[tokio::test]
async fn transitive_refresh_checks_the_dependency_upstream() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;
    h.repository
        .set_dependencies(
            GROUP,
            ARTIFACT,
            "2.3.1",
            [ProjectVersion::new(GROUP, DEP_ARTIFACT, "1.0.0")],
        )
        .await;
    // The dependency is in the store but was never published upstream.
    h.version_store
        .create_or_update(&ProjectVersionRecord::new(GROUP, DEP_ARTIFACT, "1.0.0"))
        .await
        .expect("seed dependency record");

    let mut event = notification("2.3.1");
    event.transitive = true;
    let response = h.use_case.handle_event(&event).await.expect("handle");
    assert_eq!(response.status(), EventStatus::Failed);
    assert_eq!(
        response.errors(),
        ["Version 1.0.0 does not exists for examples.metadata-test-dependencies"]
    );

    // Without the transitive flag store presence is enough.
    let response = h
        .use_case
        .handle_event(&notification("2.3.1"))
        .await
        .expect("handle");
    assert_eq!(response.status(), EventStatus::Processed);
}

#[tokio::test]
async fn transitive_refresh_rejects_an_excluded_dependency() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;
    h.repository.add_version(GROUP, DEP_ARTIFACT, "1.0.0").await;
    h.repository
        .set_dependencies(
            GROUP,
            ARTIFACT,
            "2.3.1",
            [ProjectVersion::new(GROUP, DEP_ARTIFACT, "1.0.0")],
        )
        .await;
    h.version_store
        .exclude_version(
            GROUP,
            DEP_ARTIFACT,
            &VersionId::parse("1.0.0"),
            "dependency is quarantined",
        )
        .await
        .expect("exclude dependency");

    let mut event = notification("2.3.1");
    event.transitive = true;
    let response = h.use_case.handle_event(&event).await.expect("handle");

    assert_eq!(response.status(), EventStatus::Failed);
    assert_eq!(response.errors(), ["dependency is quarantined"]);
}

#[tokio::test]
async fn dependency_errors_accumulate_across_the_whole_set() {
    let h = harness().await;
    h.repository.add_version(GROUP, ARTIFACT, "2.3.1").await;
    h.project_store
        .create_or_update(&ProjectData::new("PROD-3", GROUP, "art101"))
        .await
        .expect("seed third project");
    h.repository
        .set_dependencies(
            GROUP,
            ARTIFACT,
            "2.3.1",
            [
                ProjectVersion::new(GROUP, DEP_ARTIFACT, "1.0.0"),
                ProjectVersion::new(GROUP, "art101", "2.0.0"),
            ],
        )
        .await;

    let response = h
        .use_case
        .handle_event(&notification("2.3.1"))
        .await
        .expect("handle");

    assert_eq!(response.status(), EventStatus::Failed);
    // Dependencies are reported in sorted order.
    assert_eq!(
        response.errors(),
        [
            "Dependency examples.metadata-art101-2.0.0 not found in store",
            "Dependency examples.metadata-test-dependencies-1.0.0 not found in store"
        ]
    );
    assert_eq!(h.queue.size().await.expect("size"), 2);
}
