use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ChickenListResponse {
    pub chickens: Vec<&'static str>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct RaveResponse {
    pub frames: &'static [&'static str],
    pub screaming_chicken: &'static str,
    pub frame_count: usize,
    pub recommended_fps: u32,
}

/// One ranked row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub client: String,
    pub chickens: u64,
    pub rank: usize,
}

#[derive(Debug, Serialize)]
pub struct ClientStatsResponse {
    pub client: String,
    pub chickens: u64,
}
