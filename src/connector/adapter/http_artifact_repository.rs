use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::application::ArtifactRepository;
use crate::domain::{DomainError, ProjectVersion, VersionId};

/// Default target: a repository service running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DependencyDto {
    group_id: String,
    artifact_id: String,
    version_id: String,
}

/// HTTP client for an artifact repository exposing a JSON metadata API.
///
/// Implements [`ArtifactRepository`] so the refresh pipeline stays decoupled
/// from transport and serialization details. Endpoint shape:
///
/// ```text
/// GET {base}/repository/{group}/{artifact}/versions                    -> ["1.0.0", ...]
/// GET {base}/repository/{group}/{artifact}/versions/{id}               -> "1.0.0" | 404
/// GET {base}/repository/{group}/{artifact}/versions/{id}/dependencies  -> [{"groupId", ...}]
/// ```
///
/// A 404 is a valid not-found result; transport errors and any other
/// non-success status become [`DomainError::RepositoryError`] faults, which
/// the refresh pipeline propagates so the notification can be retried.
pub struct HttpArtifactRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpArtifactRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Construct from `DEPOT_REPOSITORY_URL`, defaulting to the local
    /// repository service.
    pub fn from_env() -> Self {
        let base =
            std::env::var("DEPOT_REPOSITORY_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, DomainError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            DomainError::repository(format!("Repository not reachable at {url}: {e}"))
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DomainError::repository(format!(
                "Repository returned {} for {url}",
                response.status()
            )));
        }

        let body = response.json::<T>().await.map_err(|e| {
            DomainError::repository(format!("Malformed repository response from {url}: {e}"))
        })?;
        Ok(Some(body))
    }
}

#[async_trait]
impl ArtifactRepository for HttpArtifactRepository {
    async fn find_versions(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<VersionId>, DomainError> {
        let url = format!(
            "{}/repository/{}/{}/versions",
            self.base_url, group_id, artifact_id
        );
        let versions: Option<Vec<String>> = self.get_json(&url).await?;
        Ok(versions
            .unwrap_or_default()
            .iter()
            .map(|v| VersionId::parse(v))
            .collect())
    }

    async fn find_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<Option<VersionId>, DomainError> {
        let url = format!(
            "{}/repository/{}/{}/versions/{}",
            self.base_url, group_id, artifact_id, version_id
        );
        let resolved: Option<String> = self.get_json(&url).await?;
        Ok(resolved.map(|v| VersionId::parse(&v)))
    }

    async fn find_dependencies(
        &self,
        group_id: &str,
        artifact_id: &str,
        version_id: &VersionId,
    ) -> Result<HashSet<ProjectVersion>, DomainError> {
        let url = format!(
            "{}/repository/{}/{}/versions/{}/dependencies",
            self.base_url, group_id, artifact_id, version_id
        );
        let dependencies: Option<Vec<DependencyDto>> = self.get_json(&url).await?;
        Ok(dependencies
            .unwrap_or_default()
            .into_iter()
            .map(|dto| ProjectVersion::new(dto.group_id, dto.artifact_id, dto.version_id.as_str()))
            .collect())
    }
}
