use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use super::{SourceHost, UpstreamError, UpstreamResponse};
use crate::config::UpstreamConfig;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// [`SourceHost`] backed by the GitHub REST API (or anything speaking its dialect)
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(config.base_url.clone()));
        }

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<UpstreamResponse, UpstreamError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(UpstreamResponse::new(status, body.to_vec()))
    }
}

#[async_trait::async_trait]
impl SourceHost for GitHubClient {
    async fn list_user_repositories(
        &self,
        username: &str,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(&["users", username, "repos"])?;
        self.get(url).await
    }

    async fn list_repository_branches(
        &self,
        username: &str,
        repository: &str,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(&["repos", username, repository, "branches"])?;
        self.get(url).await
    }
}
