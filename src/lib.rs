// Library modules for the binary and integration tests
pub mod ascii_art;
pub mod chickens;
pub mod cli;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod logging;
pub mod models;
pub mod server;
pub mod utils;
