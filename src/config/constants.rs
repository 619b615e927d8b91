/// The token every generation endpoint repeats
pub const CHICKEN_WORD: &str = "chicken";

/// Upper bound for a single generation request
///
/// Requests above this are clamped, never rejected.
pub const MAX_CHICKENS: usize = 50_000;

/// Count served by `/chicken` and `/chicken/json` when none is given
pub const DEFAULT_CHICKENS: usize = 1_000;

/// Number of entries returned by `/leaderboard`
pub const LEADERBOARD_LIMIT: usize = 10;

/// Client identifier used when the peer address is unavailable
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Recommended playback rate for the rave frames
pub const RAVE_FPS: u32 = 4;
