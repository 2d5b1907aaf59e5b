//! Payloads returned by the upstream source-hosting API.
//!
//! Only the fields the service reads are declared; everything else in the
//! upstream documents is ignored during decoding.

use serde::Deserialize;

use super::Branch;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamOwner {
    pub login: String,
}

/// One element of `GET /users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamRepository {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    pub owner: UpstreamOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamCommit {
    pub sha: String,
}

/// One element of `GET /repos/{owner}/{repo}/branches`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamBranch {
    pub name: String,
    pub commit: UpstreamCommit,
}

impl From<UpstreamBranch> for Branch {
    fn from(branch: UpstreamBranch) -> Self {
        Branch::new(branch.name, branch.commit.sha)
    }
}
