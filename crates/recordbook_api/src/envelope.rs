//! Fixed JSON response envelope.
//!
//! # Invariants
//! - Every body is `{"status": int, "data": any|null, "message": string}`.
//! - The transport status and the `status` field come from the same
//!   `StatusCode` value.
//! - Success envelopes carry an empty `message`; error envelopes carry
//!   `data: null`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Serialize, Serializer};

pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const UNPROCESSABLE_MESSAGE: &str = "Unprocessable entity";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const UNAVAILABLE_MESSAGE: &str = "Service unavailable";

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn with_status(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data: Some(data),
            message: String::new(),
        }
    }

    /// 200 with `data`.
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, data)
    }

    /// 201 with `data`.
    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, data)
    }
}

impl Envelope<()> {
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::{Envelope, NOT_FOUND_MESSAGE};
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let value = serde_json::to_value(Envelope::created(json!({"id": 1}))).unwrap();
        assert_eq!(
            value,
            json!({"status": 201, "data": {"id": 1}, "message": ""})
        );
    }

    #[test]
    fn error_envelope_has_null_data() {
        let value =
            serde_json::to_value(Envelope::error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE))
                .unwrap();
        assert_eq!(
            value,
            json!({"status": 404, "data": null, "message": "Resource not found"})
        );
    }

    #[test]
    fn response_status_matches_body_status() {
        let response = axum::response::IntoResponse::into_response(Envelope::ok(vec![1, 2]));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
