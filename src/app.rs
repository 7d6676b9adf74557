//! App core for Tabflow.
//!
//! Central struct wiring the platform host to the debouncer and cycler,
//! and routing host signals (activations, commands) to them.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::managers::activation_debouncer::ActivationDebouncer;
use crate::managers::tab_cycler::TabCycler;
use crate::platform::host::TabHost;
use crate::services::debug_log::debug_log;
use crate::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
use crate::types::tab::{ActivationEvent, WindowId};

/// Command name delivered by the host for "cycle to the next tab".
pub const COMMAND_NEXT_TAB: &str = "next";

/// Central application struct holding the host handle and all components.
pub struct App<H: TabHost + 'static> {
    pub host: Arc<H>,
    pub preference_store: Arc<PreferenceStore>,
    pub debouncer: ActivationDebouncer<H>,
    pub cycler: TabCycler<H>,
}

impl<H: TabHost + 'static> App<H> {
    /// Creates a new App around a platform host.
    ///
    /// `preference_path_override` points the store at a custom file, mainly
    /// for tests and demos.
    pub fn new(host: Arc<H>, preference_path_override: Option<String>) -> Self {
        let preference_store = Arc::new(PreferenceStore::new(preference_path_override));
        let debouncer =
            ActivationDebouncer::new(Arc::clone(&host), Arc::clone(&preference_store));
        let cycler = TabCycler::new(Arc::clone(&host));
        Self {
            host,
            preference_store,
            debouncer,
            cycler,
        }
    }

    /// Entry point for the host's "tab became active" signal.
    pub fn on_tab_activated(&self, event: ActivationEvent) -> JoinHandle<()> {
        self.debouncer.schedule(event)
    }

    /// Entry point for named host commands. Unknown commands are ignored.
    pub async fn on_command(&self, command: &str, window_id: WindowId) {
        if command != COMMAND_NEXT_TAB {
            return;
        }
        if let Err(err) = self.cycler.cycle_next(window_id).await {
            let prefs = self.preference_store.read();
            debug_log(&prefs, &format!("next-tab command failed: {}", err));
        }
    }
}
