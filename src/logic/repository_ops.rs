use thiserror::Error;

use crate::model::{Branch, Repository, UpstreamBranch, UpstreamRepository};
use crate::upstream::{SourceHost, UpstreamError};

/// Why a repository listing could not be produced
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("user '{0}' not found upstream")]
    UserNotFound(String),

    #[error("upstream answered with status {0}")]
    UpstreamStatus(u16),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Repository aggregation over a [`SourceHost`]
pub struct RepositoryOperations;

impl RepositoryOperations {
    /// List the user's non-fork repositories, each with its branches.
    ///
    /// Calls are issued one after another: the repository list first, then one
    /// branch list per surviving repository in upstream order.
    pub async fn list_user_repositories<S: SourceHost + ?Sized>(
        host: &S,
        username: &str,
    ) -> Result<Vec<Repository>, FetchError> {
        let response = host.list_user_repositories(username).await?;

        match response.status {
            200 => {}
            404 => return Err(FetchError::UserNotFound(username.to_string())),
            status => return Err(FetchError::UpstreamStatus(status)),
        }

        let listed: Vec<UpstreamRepository> = response.json()?;

        let mut repositories = Vec::new();
        for repo in listed.into_iter().filter(|repo| !repo.fork) {
            let branches = Self::list_branches(host, username, &repo.name).await;
            repositories.push(Repository::new(repo.name, repo.owner.login, branches));
        }

        Ok(repositories)
    }

    /// Best-effort branch listing: any failure yields an empty list
    pub async fn list_branches<S: SourceHost + ?Sized>(
        host: &S,
        username: &str,
        repository: &str,
    ) -> Vec<Branch> {
        let response = match host.list_repository_branches(username, repository).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Branch fetch for {}/{} failed: {}", username, repository, e);
                return Vec::new();
            }
        };

        if !response.is_200() {
            log::warn!(
                "Branch fetch for {}/{} returned status {}",
                username,
                repository,
                response.status
            );
            return Vec::new();
        }

        match response.json::<Vec<UpstreamBranch>>() {
            Ok(branches) => branches.into_iter().map(Branch::from).collect(),
            Err(e) => {
                log::warn!("Branch list for {}/{} unreadable: {}", username, repository, e);
                Vec::new()
            }
        }
    }
}
