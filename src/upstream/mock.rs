use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::Mutex;

use super::{SourceHost, UpstreamError, UpstreamResponse};

/// In-memory [`SourceHost`] that replays canned replies and records calls
#[derive(Debug, Default)]
pub struct MockSourceHost {
    repositories: Option<UpstreamResponse>,
    branches: HashMap<String, UpstreamResponse>,
    failing_branches: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl MockSourceHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repositories(mut self, status: u16, body: Value) -> Self {
        self.repositories = Some(UpstreamResponse::new(status, body.to_string()));
        self
    }

    pub fn with_raw_repositories(mut self, status: u16, body: &str) -> Self {
        self.repositories = Some(UpstreamResponse::new(status, body));
        self
    }

    pub fn with_branches(mut self, repository: &str, status: u16, body: Value) -> Self {
        self.branches.insert(
            repository.to_string(),
            UpstreamResponse::new(status, body.to_string()),
        );
        self
    }

    pub fn with_raw_branches(mut self, repository: &str, status: u16, body: &str) -> Self {
        self.branches
            .insert(repository.to_string(), UpstreamResponse::new(status, body));
        self
    }

    /// Make the branch call for `repository` fail at the transport level
    pub fn with_unreachable_branches(mut self, repository: &str) -> Self {
        self.failing_branches.push(repository.to_string());
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl SourceHost for MockSourceHost {
    async fn list_user_repositories(
        &self,
        username: &str,
    ) -> Result<UpstreamResponse, UpstreamError> {
        self.calls
            .lock()
            .await
            .push(format!("users/{}/repos", username));

        self.repositories
            .clone()
            .ok_or_else(|| UpstreamError::Transport("connection refused".to_string()))
    }

    async fn list_repository_branches(
        &self,
        username: &str,
        repository: &str,
    ) -> Result<UpstreamResponse, UpstreamError> {
        self.calls
            .lock()
            .await
            .push(format!("repos/{}/{}/branches", username, repository));

        if self.failing_branches.iter().any(|r| r == repository) {
            return Err(UpstreamError::Transport("connection reset".to_string()));
        }

        Ok(self
            .branches
            .get(repository)
            .cloned()
            .unwrap_or_else(|| UpstreamResponse::new(404, r#"{"message":"Not Found"}"#)))
    }
}
