use serde::{Deserialize, Serialize};

/// Uniform JSON body for every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub status: u16,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(status: u16, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }
}
