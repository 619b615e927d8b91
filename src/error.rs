use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

#[derive(Debug)]
pub enum ChickenError {
    // I/O errors (listener bind, log directory)
    Io(std::io::Error),

    // Request validation errors
    InvalidCount(String),
    ClientNotFound(String),

    // Startup errors
    Logging(String),
}

impl fmt::Display for ChickenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChickenError::Io(e) => write!(f, "I/O error: {}", e),
            ChickenError::InvalidCount(raw) => write!(f, "Invalid chicken count: {:?}", raw),
            ChickenError::ClientNotFound(client) => write!(f, "Unknown client: {}", client),
            ChickenError::Logging(msg) => write!(f, "Logging setup failed: {}", msg),
        }
    }
}

impl std::error::Error for ChickenError {}

// Conversions
impl From<std::io::Error> for ChickenError {
    fn from(err: std::io::Error) -> Self {
        ChickenError::Io(err)
    }
}

// Axum integration
impl IntoResponse for ChickenError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ChickenError::InvalidCount(ref raw) => {
                tracing::debug!(raw = %raw, "Rejecting malformed chicken count");
                (StatusCode::BAD_REQUEST, serde_json::json!({ "cluck": "nope" }))
            }
            ChickenError::ClientNotFound(_) => {
                (StatusCode::NOT_FOUND, serde_json::json!({ "cluck": "who?" }))
            }
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "status": "error", "error": "Internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ChickenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_count_is_bad_request() {
        let response = ChickenError::InvalidCount("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_client_not_found_is_not_found() {
        let response = ChickenError::ClientNotFound("10.0.0.1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_io_error_is_internal() {
        let err: ChickenError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert!(err.to_string().contains("port taken"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_invalid_count() {
        let err = ChickenError::InvalidCount("12abc".to_string());
        assert_eq!(err.to_string(), "Invalid chicken count: \"12abc\"");
    }
}
