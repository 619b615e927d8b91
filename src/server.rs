use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        ConnectInfo, Path, Query, State,
    },
    http::HeaderMap,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use crate::ascii_art;
use crate::chickens::{clamp_count, generate_chicken_list, generate_chickens, parse_count};
use crate::config::constants::{DEFAULT_CHICKENS, LEADERBOARD_LIMIT};
use crate::error::{ChickenError, Result};
use crate::leaderboard::Leaderboard;
use crate::logging::{access_log_middleware, request_id_middleware};
use crate::models::{
    ChickenListResponse, ChickenQuery, ClientStatsResponse, HealthResponse, LeaderboardEntry,
    RaveResponse, WelcomeResponse,
};
use crate::utils::header_utils::extract_client_id;

/// Routes listed by the welcome endpoint
pub const ENDPOINTS: [&str; 7] = [
    "/chicken",
    "/chicken/{count}",
    "/chicken/json",
    "/health",
    "/leaderboard",
    "/leaderboard/{client}",
    "/ascii/rave",
];

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub leaderboard: Leaderboard,
    pub trust_forwarded_for: bool,
}

impl AppState {
    pub fn new(leaderboard: Leaderboard) -> Self {
        Self {
            leaderboard,
            trust_forwarded_for: false,
        }
    }
}

// Helper Functions

fn resolve_client(
    state: &AppState,
    headers: &HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> String {
    let peer = connect_info.map(|ConnectInfo(addr)| addr);
    extract_client_id(headers, peer, state.trust_forwarded_for)
}

/// Clamp, record and generate in that order; returns the clamped count
fn record_chickens(state: &AppState, client: &str, requested: i64) -> usize {
    let count = clamp_count(requested);
    state.leaderboard.record(client, count as u64);

    tracing::debug!(client = %client, requested, count, "Serving chickens");

    count
}

fn chicken_text_response(requested: i64, count: usize) -> Response {
    (
        [("x-chicken-count", count.to_string())],
        generate_chickens(requested),
    )
        .into_response()
}

// HTTP Handlers

/// Welcome message listing the available endpoints
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Chicken-as-a-Service!".to_string(),
        endpoints: ENDPOINTS.to_vec(),
    })
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "chicken".to_string(),
    })
}

/// The default helping of chickens as plain text
async fn serve_chickens(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> Response {
    let client = resolve_client(&state, &headers, connect_info);
    let requested = DEFAULT_CHICKENS as i64;
    let count = record_chickens(&state, &client, requested);

    chicken_text_response(requested, count)
}

/// A caller-chosen number of chickens as plain text
async fn serve_chicken_count(
    State(state): State<AppState>,
    raw_count: std::result::Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> Result<Response> {
    // Parse before touching the leaderboard
    let Path(raw_count) = raw_count.map_err(|e| ChickenError::InvalidCount(e.body_text()))?;
    let requested = parse_count(&raw_count)?;

    let client = resolve_client(&state, &headers, connect_info);
    let count = record_chickens(&state, &client, requested);

    Ok(chicken_text_response(requested, count))
}

/// Chickens as a JSON list, optionally sized with `?count=`
async fn serve_chicken_json(
    State(state): State<AppState>,
    query: std::result::Result<Query<ChickenQuery>, QueryRejection>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> Result<Json<ChickenListResponse>> {
    let Query(query) = query.map_err(|e| ChickenError::InvalidCount(e.body_text()))?;

    // `?count=` with no value means the default helping
    let requested = match query.count.as_deref().filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_count(raw)?,
        None => DEFAULT_CHICKENS as i64,
    };

    let client = resolve_client(&state, &headers, connect_info);
    let count = record_chickens(&state, &client, requested);

    Ok(Json(ChickenListResponse {
        chickens: generate_chicken_list(requested),
        count,
    }))
}

/// Frames for the client-side rave animation
async fn rave_frames() -> Json<RaveResponse> {
    Json(ascii_art::rave())
}

/// Top chicken consumers
async fn leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    Json(state.leaderboard.top(LEADERBOARD_LIMIT))
}

/// Tally for a single client
async fn client_stats(
    State(state): State<AppState>,
    Path(client): Path<String>,
) -> Result<Json<ClientStatsResponse>> {
    let chickens = state
        .leaderboard
        .get(&client)
        .ok_or_else(|| ChickenError::ClientNotFound(client.clone()))?;

    Ok(Json(ClientStatsResponse { client, chickens }))
}

/// Create and configure the HTTP server router
pub fn create_router(state: AppState) -> Router<()> {
    // Public novelty API: every origin, method and header is allowed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/chicken", get(serve_chickens))
        .route("/chicken/json", get(serve_chicken_json))
        .route("/chicken/:count", get(serve_chicken_count))
        .route("/ascii/rave", get(rave_frames))
        .route("/leaderboard", get(leaderboard))
        .route("/leaderboard/:client", get(client_stats))
        .with_state(state)
        .layer(middleware::from_fn(access_log_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Leaderboard::new())
    }

    #[test]
    fn test_record_chickens_records_clamped_amount() {
        let state = state();

        assert_eq!(record_chickens(&state, "a", 75_000), 50_000);
        assert_eq!(record_chickens(&state, "a", -3), 0);
        assert_eq!(record_chickens(&state, "a", 12), 12);

        assert_eq!(state.leaderboard.get("a"), Some(50_012));
    }

    #[test]
    fn test_resolve_client_without_connect_info() {
        let state = state();
        assert_eq!(resolve_client(&state, &HeaderMap::new(), None), "unknown");
    }

    #[test]
    fn test_resolve_client_honours_trust_setting() {
        let mut state = state();
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "198.51.100.4".parse().unwrap());
        let peer = Some(ConnectInfo("10.1.1.1:9000".parse().unwrap()));

        assert_eq!(resolve_client(&state, &headers, peer), "10.1.1.1");

        state.trust_forwarded_for = true;
        assert_eq!(resolve_client(&state, &headers, peer), "198.51.100.4");
    }

    #[test]
    fn test_chicken_text_response_header() {
        let response = chicken_text_response(3, 3);
        assert_eq!(response.headers().get("x-chicken-count").unwrap(), "3");
        assert!(response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }

    #[test]
    fn test_endpoints_are_unique() {
        let mut endpoints = ENDPOINTS.to_vec();
        endpoints.sort_unstable();
        endpoints.dedup();
        assert_eq!(endpoints.len(), ENDPOINTS.len());
    }
}
