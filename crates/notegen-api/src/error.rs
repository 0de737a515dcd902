//! API error mapping.
//!
//! Client errors carry their descriptive message to the caller; server
//! errors are logged in full and surfaced as a generic message, except
//! extraction failures, whose underlying library message is part of the
//! contract of the parse endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use notegen_core::Error;

/// HTTP-facing error with a status class and caller-visible message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::NoteNotFound(id) => ApiError::NotFound(format!("Note not found: {}", id)),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::UnsupportedFileType(t) => {
                ApiError::BadRequest(format!("Unsupported file type: {}", t))
            }
            Error::Unauthorized(msg) => ApiError::Unauthorized(msg),
            Error::Extraction(msg) => ApiError::Internal(format!("Error parsing file: {}", msg)),
            other => {
                error!(
                    subsystem = "api",
                    component = "error",
                    error = %other,
                    "Request failed with internal error"
                );
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let api: ApiError = Error::InvalidInput("Query is required".into()).into();
        assert!(matches!(api, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_note_not_found_maps_to_not_found() {
        let api: ApiError = Error::NoteNotFound(Uuid::nil()).into();
        assert!(matches!(api, ApiError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_file_type_maps_to_bad_request() {
        let api: ApiError = Error::UnsupportedFileType("video/mp4".into()).into();
        match api {
            ApiError::BadRequest(msg) => assert!(msg.contains("video/mp4")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_inference_error_is_generic_internal() {
        let api: ApiError = Error::Inference("model crashed with secret detail".into()).into();
        match api {
            ApiError::Internal(msg) => {
                assert_eq!(msg, "Internal server error");
            }
            other => panic!("expected Internal, got {:?}", other),
        }
    }

    #[test]
    fn test_extraction_error_keeps_library_message() {
        let api: ApiError = Error::Extraction("bad xref table".into()).into();
        match api {
            ApiError::Internal(msg) => assert!(msg.contains("bad xref table")),
            other => panic!("expected Internal, got {:?}", other),
        }
    }
}
