use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::PreferenceError;

/// Default debounce delay, in seconds, as stored.
pub const DEFAULT_DELAY_MOVE_TIME: &str = "1";

/// User preferences controlling the repositioning engine.
///
/// The serialized key names match the platform storage keys, so a
/// preference file written by one surface is readable by all of them.
/// The delay is kept as the raw stored string; parsing happens at the
/// point of use so a bad value can fall back instead of poisoning the
/// whole preference set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Debounce delay in seconds, stored as a string.
    #[serde(rename = "delayMoveTime", default = "default_delay_move_time")]
    pub delay_move_time: String,
    /// When set, tabs collect at the right edge instead of the left.
    #[serde(rename = "rightToLeft", default)]
    pub right_to_left: bool,
    /// Enables debug logging of activations, decisions, and outcomes.
    #[serde(rename = "debugMode", default)]
    pub debug_mode: bool,
}

fn default_delay_move_time() -> String {
    DEFAULT_DELAY_MOVE_TIME.to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            delay_move_time: default_delay_move_time(),
            right_to_left: false,
            debug_mode: false,
        }
    }
}

impl Preferences {
    /// The stored debounce delay, falling back to [`Preferences::default_delay`]
    /// when the stored value does not parse as a non-negative number.
    pub fn delay(&self) -> Duration {
        parse_delay(&self.delay_move_time).unwrap_or_else(|_| Self::default_delay())
    }

    /// The delay used when the stored value is unusable.
    pub fn default_delay() -> Duration {
        Duration::from_secs(1)
    }
}

/// Parses a stored delay value (seconds as a string) into a wait duration.
///
/// Rejects anything that is not a finite, non-negative number.
pub fn parse_delay(raw: &str) -> Result<Duration, PreferenceError> {
    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PreferenceError::InvalidDelay(raw.to_string()))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(PreferenceError::InvalidDelay(raw.to_string()));
    }
    // try_from also rejects values too large to represent as a Duration
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| PreferenceError::InvalidDelay(raw.to_string()))
}
