// Tabflow options surface
// Prefills from the store, validates, writes back. Validation happens before
// any write so a bad delay never reaches the preference file.

use crate::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
use crate::types::errors::PreferenceError;
use crate::types::preferences::{parse_delay, Preferences};

/// Raw options form state as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsForm {
    pub delay_move_time: String,
    pub right_to_left: bool,
    pub debug_mode: bool,
}

impl OptionsForm {
    /// Prefills the form from stored preferences (defaults when unset).
    pub fn restore(store: &PreferenceStore) -> Self {
        let prefs = store.read();
        Self {
            delay_move_time: prefs.delay_move_time,
            right_to_left: prefs.right_to_left,
            debug_mode: prefs.debug_mode,
        }
    }

    /// Validates the form and writes it to the store.
    ///
    /// Rejects a delay that is not a finite, non-negative number of seconds
    /// without touching the stored preferences. Returns the preferences as
    /// written.
    pub fn save(&self, store: &PreferenceStore) -> Result<Preferences, PreferenceError> {
        parse_delay(&self.delay_move_time)?;

        let prefs = Preferences {
            delay_move_time: self.delay_move_time.trim().to_string(),
            right_to_left: self.right_to_left,
            debug_mode: self.debug_mode,
        };
        store.write(&prefs)?;
        Ok(prefs)
    }
}
