use std::fmt;

use super::tab::{TabId, WindowId};

// === TabHostError ===

/// Errors reported by the browser platform for tab queries and moves.
#[derive(Debug)]
pub enum TabHostError {
    /// The window has no resolvable active tab.
    NoActiveTab(WindowId),
    /// The tab disappeared before the call completed (e.g. closed mid-flight).
    TabNotFound(TabId),
    /// The platform rejected the call.
    CallFailed(String),
}

impl fmt::Display for TabHostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabHostError::NoActiveTab(window_id) => {
                write!(f, "No active tab in window {}", window_id)
            }
            TabHostError::TabNotFound(tab_id) => write!(f, "Tab not found: {}", tab_id),
            TabHostError::CallFailed(msg) => write!(f, "Platform call failed: {}", msg),
        }
    }
}

impl std::error::Error for TabHostError {}

// === PreferenceError ===

/// Errors related to preference storage and validation.
#[derive(Debug)]
pub enum PreferenceError {
    /// An I/O error occurred while reading or writing the preference file.
    IoError(String),
    /// Failed to serialize or deserialize preferences.
    SerializationError(String),
    /// The delay value does not parse as a non-negative number of seconds.
    InvalidDelay(String),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::IoError(msg) => write!(f, "Preference I/O error: {}", msg),
            PreferenceError::SerializationError(msg) => {
                write!(f, "Preference serialization error: {}", msg)
            }
            PreferenceError::InvalidDelay(raw) => write!(f, "Invalid delay value: {}", raw),
        }
    }
}

impl std::error::Error for PreferenceError {}
