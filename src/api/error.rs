use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::logic::FetchError;
use crate::model::ErrorMessage;

pub const UNSUPPORTED_MEDIA_TYPE: &str = "Unsupported media type.";
pub const USER_NOT_FOUND: &str = "User not found.";
pub const GENERIC_ERROR: &str = "An error occurred.";

/// An error rendered as `{status, message}` JSON with a matching HTTP status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    pub fn not_acceptable() -> Self {
        Self::new(StatusCode::NOT_ACCEPTABLE, UNSUPPORTED_MEDIA_TYPE)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn missing_header(name: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            &format!("Required header '{}' is missing.", name),
        )
    }

    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            &format!("Required parameter '{}' is missing.", name),
        )
    }

    pub fn body(&self) -> ErrorMessage {
        ErrorMessage::new(self.status.as_u16(), &self.message)
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::UserNotFound(_) => Self::new(StatusCode::NOT_FOUND, USER_NOT_FOUND),
            FetchError::UpstreamStatus(_) | FetchError::Upstream(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}
