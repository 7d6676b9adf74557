// Preference-gated debug logging.
// Messages only reach the log when the user's stored debug switch is on.
// Tab details must go through `Tab::summarize` so full urls never land in
// the log output.

use crate::types::preferences::Preferences;

/// Emits a debug message when debug mode is enabled in the preferences.
pub fn debug_log(prefs: &Preferences, message: &str) {
    if prefs.debug_mode {
        log::debug!("{}", message);
    }
}
