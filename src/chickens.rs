use std::num::IntErrorKind;

use crate::config::constants::{CHICKEN_WORD, MAX_CHICKENS};
use crate::error::{ChickenError, Result};

/// Clamp a requested count into `[0, MAX_CHICKENS]`
pub fn clamp_count(requested: i64) -> usize {
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).map_or(MAX_CHICKENS, |n| n.min(MAX_CHICKENS))
    }
}

/// Generate a string of chickens separated by single spaces
///
/// # Examples
///
/// ```
/// use chicken_server::chickens::generate_chickens;
///
/// assert_eq!(generate_chickens(3), "chicken chicken chicken");
/// assert_eq!(generate_chickens(-7), "");
/// ```
pub fn generate_chickens(requested: i64) -> String {
    generate_chicken_list(requested).join(" ")
}

/// Generate a list of chickens, clamped the same way as [`generate_chickens`]
pub fn generate_chicken_list(requested: i64) -> Vec<&'static str> {
    vec![CHICKEN_WORD; clamp_count(requested)]
}

/// Parse a user-supplied count
///
/// Integers too large for `i64` saturate in the direction of their sign so
/// that they get clamped later instead of rejected.
pub fn parse_count(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(count) => Ok(count),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ChickenError::InvalidCount(raw.to_string())),
        },
    }
}
