use axum::http::HeaderMap;
use std::net::SocketAddr;

use crate::config::constants::UNKNOWN_CLIENT;

/// Extract the first address from an X-Forwarded-For header
///
/// # Examples
///
/// ```
/// use axum::http::HeaderMap;
/// use chicken_server::utils::header_utils::extract_forwarded_for;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
/// assert_eq!(extract_forwarded_for(&headers), Some("203.0.113.7".to_string()));
/// ```
pub fn extract_forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .map(str::to_string)
}

/// Resolve the identifier a request is counted under on the leaderboard
///
/// The peer IP is used unless `trust_forwarded_for` is set and the request
/// carries an X-Forwarded-For header. Falls back to `"unknown"`.
pub fn extract_client_id(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded_for: bool,
) -> String {
    if trust_forwarded_for {
        if let Some(forwarded) = extract_forwarded_for(headers) {
            return forwarded;
        }
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
