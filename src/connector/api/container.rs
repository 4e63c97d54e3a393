use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{
    ArtifactHandlerRegistry, ArtifactRepository, DrainQueueUseCase, ExcludeVersionUseCase,
    NotificationQueue, ProjectStore, QueryVersionsUseCase, RefreshVersionUseCase,
    RegisterProjectUseCase, VersionStore,
};
use crate::{
    EntitiesHandler, HttpArtifactRepository, InMemoryArtifactRepository, InMemoryEntityProvider,
    InMemoryEntityStore, InMemoryProjectStore, InMemoryQueue, InMemoryVersionStore,
    JsonFileCatalog,
};

pub struct ContainerConfig {
    pub data_dir: String,
    /// Base URL of the artifact repository service; falls back to the
    /// `DEPOT_REPOSITORY_URL` environment variable, then the local default.
    pub repository_url: Option<String>,
    pub mock_repository: bool,
    pub memory_storage: bool,
}

pub struct Container {
    project_store: Arc<dyn ProjectStore>,
    version_store: Arc<dyn VersionStore>,
    queue: Arc<dyn NotificationQueue>,
    refresh_use_case: Arc<RefreshVersionUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let (project_store, version_store): (Arc<dyn ProjectStore>, Arc<dyn VersionStore>) =
            if config.memory_storage {
                debug!("Using in-memory catalog storage");
                (
                    Arc::new(InMemoryProjectStore::new()),
                    Arc::new(InMemoryVersionStore::new()),
                )
            } else {
                let catalog_path = PathBuf::from(&config.data_dir).join("depot-catalog.json");
                debug!("Using JSON catalog at {:?}", catalog_path);
                let catalog = JsonFileCatalog::open(&catalog_path)?;
                (catalog.clone(), catalog)
            };

        let artifact_repository: Arc<dyn ArtifactRepository> = if config.mock_repository {
            debug!("Using in-memory artifact repository");
            Arc::new(InMemoryArtifactRepository::new())
        } else {
            let client = match config.repository_url.as_deref() {
                Some(url) => HttpArtifactRepository::new(url),
                None => HttpArtifactRepository::from_env(),
            };
            debug!("Using artifact repository at {}", client.base_url());
            Arc::new(client)
        };

        let queue: Arc<dyn NotificationQueue> = Arc::new(InMemoryQueue::new());

        // Registered once here; the orchestrator treats the registry as
        // read-only afterwards.
        let mut handlers = ArtifactHandlerRegistry::new();
        handlers.register(Arc::new(EntitiesHandler::new(
            Arc::new(InMemoryEntityProvider::new()),
            Arc::new(InMemoryEntityStore::new()),
        )));

        let refresh_use_case = Arc::new(RefreshVersionUseCase::new(
            project_store.clone(),
            version_store.clone(),
            artifact_repository,
            queue.clone(),
            Arc::new(handlers),
        ));

        Ok(Self {
            project_store,
            version_store,
            queue,
            refresh_use_case,
            config,
        })
    }

    pub fn refresh_use_case(&self) -> Arc<RefreshVersionUseCase> {
        self.refresh_use_case.clone()
    }

    pub fn exclude_use_case(&self) -> ExcludeVersionUseCase {
        ExcludeVersionUseCase::new(self.version_store.clone())
    }

    pub fn register_use_case(&self) -> RegisterProjectUseCase {
        RegisterProjectUseCase::new(self.project_store.clone())
    }

    pub fn query_use_case(&self) -> QueryVersionsUseCase {
        QueryVersionsUseCase::new(self.version_store.clone())
    }

    pub fn drain_use_case(&self) -> DrainQueueUseCase {
        DrainQueueUseCase::new(self.queue.clone(), self.refresh_use_case.clone())
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }
}
