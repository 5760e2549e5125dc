//! HTTP-facing error taxonomy.
//!
//! Each variant maps to exactly one status code and one fixed client message.
//! Underlying store errors are logged here and never echoed to clients.

use crate::envelope::{
    Envelope, INTERNAL_ERROR_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE,
    UNAVAILABLE_MESSAGE, UNPROCESSABLE_MESSAGE,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use recordbook_core::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    /// Known path, unsupported method.
    #[error("method not allowed")]
    MethodNotAllowed,
    /// Undecodable body or a payload that fails record validation.
    #[error("unprocessable entity: {0}")]
    Unprocessable(String),
    #[error("store failure: {0}")]
    Store(#[source] RepoError),
    /// Blocking task panicked or was cancelled.
    #[error("worker failure: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) | Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            Self::NotFound => NOT_FOUND_MESSAGE,
            Self::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE,
            Self::Unprocessable(_) => UNPROCESSABLE_MESSAGE,
            Self::Store(_) | Self::Worker(_) => INTERNAL_ERROR_MESSAGE,
            Self::Unavailable(_) => UNAVAILABLE_MESSAGE,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { .. } => Self::NotFound,
            RepoError::Validation(err) => Self::Unprocessable(err.to_string()),
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(
                "event=http_error module=api status=error http_status={} error={}",
                status.as_u16(),
                self
            );
        } else {
            warn!(
                "event=http_error module=api status=rejected http_status={} error={}",
                status.as_u16(),
                self
            );
        }
        Envelope::error(status, self.client_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use recordbook_core::{RepoError, ValidationError};

    #[test]
    fn repo_errors_map_to_fixed_statuses() {
        let not_found: ApiError = RepoError::NotFound {
            entity: "user",
            id: 3,
        }
        .into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid: ApiError =
            RepoError::Validation(ValidationError::Empty { field: "username" }).into();
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let store: ApiError = RepoError::InvalidData("bad row".to_string()).into();
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_messages_hide_store_details() {
        let store: ApiError = RepoError::InvalidData("users.id = -1".to_string()).into();
        assert_eq!(store.client_message(), "Internal server error");
        assert!(store.to_string().contains("users.id"));
    }
}
