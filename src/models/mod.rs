pub mod requests;
pub mod responses;

pub use requests::ChickenQuery;
pub use responses::{
    ChickenListResponse, ClientStatsResponse, HealthResponse, LeaderboardEntry, RaveResponse,
    WelcomeResponse,
};
