use serde::de::DeserializeOwned;

use super::UpstreamError;

/// Status code and raw body of an upstream reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Exactly 200; other 2xx statuses do not count
    pub fn is_200(&self) -> bool {
        self.status == 200
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, UpstreamError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// The source-hosting API the service reads repositories and branches from.
///
/// Implementations report every HTTP status as a successful
/// [`UpstreamResponse`]; only failures to reach the host or read its reply
/// surface as [`UpstreamError`].
#[async_trait::async_trait]
pub trait SourceHost: Send + Sync {
    /// `GET {base}/users/{username}/repos`
    async fn list_user_repositories(&self, username: &str)
        -> Result<UpstreamResponse, UpstreamError>;

    /// `GET {base}/repos/{username}/{repository}/branches`
    async fn list_repository_branches(
        &self,
        username: &str,
        repository: &str,
    ) -> Result<UpstreamResponse, UpstreamError>;
}
