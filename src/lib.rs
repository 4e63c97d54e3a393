pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ArtifactHandler, ArtifactHandlerRegistry, ArtifactRepository, ArtifactType, DrainQueueUseCase,
    EntityProvider, EntityStore, ExcludeVersionUseCase, NotificationQueue, ProjectStore,
    QueryVersionsUseCase, RefreshVersionUseCase, RegisterProjectUseCase, VersionStore,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, EntitiesHandler, HttpArtifactRepository,
    InMemoryArtifactRepository, InMemoryEntityProvider, InMemoryEntityStore, InMemoryProjectStore,
    InMemoryQueue, InMemoryVersionStore, JsonFileCatalog, Router,
};

pub use domain::{
    DomainError, Entity, EventResponse, EventStatus, ProjectData, ProjectVersion,
    ProjectVersionRecord, RefreshNotification, VersionId, MASTER_SNAPSHOT,
};
