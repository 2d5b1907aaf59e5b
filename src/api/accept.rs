use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::ACCEPT, request::Parts, HeaderMap},
};

use crate::api::error::ApiError;
use crate::upstream::JSON_MEDIA_TYPE;

/// Axum extractor that only lets requests asking for JSON through
///
/// The `Accept` header must be exactly `application/json` (ASCII case aside).
/// Wildcards, parameters and lists of media types are all refused with 406;
/// a missing header is a 400.
#[derive(Debug, Clone, Copy)]
pub struct AcceptsJson;

#[async_trait]
impl<S> FromRequestParts<S> for AcceptsJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        check_accept(&parts.headers)
    }
}

fn check_accept(headers: &HeaderMap) -> Result<AcceptsJson, ApiError> {
    let accept = headers
        .get(ACCEPT)
        .ok_or_else(|| ApiError::missing_header("Accept"))?;

    // A present but non-ASCII value is still present
    if accept
        .as_bytes()
        .eq_ignore_ascii_case(JSON_MEDIA_TYPE.as_bytes())
    {
        Ok(AcceptsJson)
    } else {
        Err(ApiError::not_acceptable())
    }
}
