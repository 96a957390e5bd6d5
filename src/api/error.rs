use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::database::repository::RepoError;
use crate::utils::logging::log_store_error;

/// Every way a request can fail. Each variant maps to one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing.
    #[error("{0}")]
    Validation(String),
    /// The body is not the JSON shape the endpoint expects.
    #[error("Invalid request body")]
    InvalidBody(String),
    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The store could not be used.
    #[error("{0}")]
    Internal(String),
}

/// JSON error payload: `{error}` or `{error, details}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short message.
    pub error: String,
    /// Parser output for malformed bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match &self {
            ApiError::InvalidBody(details) => Some(details.clone()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::ProjectNotFound(_) => ApiError::NotFound("Project not found".to_string()),
            RepoError::Unavailable => {
                log_store_error("request", &err.to_string());
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

/// Parses an optional JSON body. An empty body reads as `T::default()`.
pub(crate) fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}
