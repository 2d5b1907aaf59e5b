use thiserror::Error;

/// Errors raised while talking to the upstream API.
///
/// HTTP status codes are not errors at this layer; they are returned in
/// [`UpstreamResponse`](super::UpstreamResponse) for the caller to interpret.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),

    #[error("upstream transport error: {0}")]
    Transport(String),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.to_string())
    }
}
