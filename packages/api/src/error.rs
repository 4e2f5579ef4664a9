//! Errors raised while talking to the Data Service over HTTP.

use registration::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("server returned status {status}")]
    Status { status: u16, body: String },
}

impl From<ApiError> for ServiceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Request(e) if e.is_decode() => ServiceError::Decode(e.to_string()),
            ApiError::Request(e) => ServiceError::Transport(e.to_string()),
            ApiError::Status { status, body } => ServiceError::Status { status, body },
        }
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the body text.
pub(crate) async fn check_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read response text".to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
