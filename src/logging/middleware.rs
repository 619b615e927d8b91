use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::time::Instant;
use uuid::Uuid;

use crate::config::constants::UNKNOWN_CLIENT;
use crate::utils::header_utils::extract_forwarded_for;

/// Request ID wrapper for tracking requests through the system
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Header carrying the correlation ID in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied ID that is echoed back
const MAX_REQUEST_ID_LEN: usize = 64;

/// The caller's request ID, if it is short, non-empty printable ASCII
fn caller_request_id(req: &Request) -> Option<String> {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .map(HeaderValue::as_bytes)
        .filter(|bytes| {
            !bytes.is_empty()
                && bytes.len() <= MAX_REQUEST_ID_LEN
                && bytes.iter().all(u8::is_ascii_graphic)
        })
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .map(str::to_string)
}

/// Tag each request with a correlation ID and return it to the caller
///
/// Well-formed IDs from the caller are kept; anything else is replaced by a
/// fresh UUID v4.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = caller_request_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());
    let header_value = HeaderValue::from_str(&request_id).ok();

    req.extensions_mut().insert(RequestId(request_id));

    let mut response = next.run(req).await;
    if let Some(value) = header_value {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Middleware to log all HTTP requests to the access log
pub async fn access_log_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| q.to_string());

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let client_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());
    let forwarded_for = extract_forwarded_for(req.headers());
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = next.run(req).await;

    let status = response.status();
    let duration = start.elapsed();
    let chicken_count = response
        .headers()
        .get("x-chicken-count")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    tracing::info!(
        target: "access_log",
        request_id = %request_id,
        client_ip = %client_ip,
        forwarded_for = ?forwarded_for,
        method = %method,
        path = %path,
        query = ?query,
        status = status.as_u16(),
        duration_ms = duration.as_millis() as u64,
        chicken_count = ?chicken_count,
        user_agent = %user_agent,
        "HTTP request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "cluck" }))
            .layer(middleware::from_fn(access_log_middleware))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_request_id_generated() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get("X-Request-ID").unwrap().to_str().unwrap();
        assert_eq!(id.len(), 36, "UUID should be 36 characters");
        assert_eq!(id.matches('-').count(), 4);
    }

    #[tokio::test]
    async fn test_request_id_echoed() {
        let request = Request::builder()
            .uri("/")
            .header("X-Request-ID", "req-123")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers().get("X-Request-ID").unwrap(), "req-123");
    }

    #[tokio::test]
    async fn test_oversized_request_id_replaced() {
        let request = Request::builder()
            .uri("/")
            .header("X-Request-ID", "x".repeat(MAX_REQUEST_ID_LEN + 1))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        let id = response.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
        assert_eq!(id.len(), 36, "oversized ID should become a UUID");
    }

    #[tokio::test]
    async fn test_request_id_with_spaces_replaced() {
        let request = Request::builder()
            .uri("/")
            .header("X-Request-ID", "two words")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_ne!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "two words");
    }

    #[tokio::test]
    async fn test_access_log_passes_response_through() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_success());
    }

    #[test]
    fn test_request_id_wrapper() {
        let id = RequestId("test-id-123".to_string());
        let id_clone = id.clone();
        assert_eq!(id_clone.0, "test-id-123");
    }
}
