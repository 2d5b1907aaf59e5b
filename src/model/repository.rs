use serde::{Deserialize, Serialize};

/// A branch and the SHA of the commit it currently points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_name: String,
    pub last_commit_sha: String,
}

impl Branch {
    pub fn new(branch_name: impl Into<String>, last_commit_sha: impl Into<String>) -> Self {
        Self {
            branch_name: branch_name.into(),
            last_commit_sha: last_commit_sha.into(),
        }
    }
}

/// A non-fork repository with its branches, as returned by `GET /repositories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub repository_name: String,
    pub owner_login: String,
    pub branches: Vec<Branch>,
}

impl Repository {
    pub fn new(
        repository_name: impl Into<String>,
        owner_login: impl Into<String>,
        branches: Vec<Branch>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            owner_login: owner_login.into(),
            branches,
        }
    }
}
