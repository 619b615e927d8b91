use serde::Deserialize;

/// Query string accepted by `/chicken/json`
///
/// `count` stays a raw string so a malformed value can be answered with the
/// same 400 payload as the path variant.
#[derive(Debug, Default, Deserialize)]
pub struct ChickenQuery {
    #[serde(default)]
    pub count: Option<String>,
}
