//! Activation debouncer.
//!
//! Debounces "tab became active" signals: every activation schedules its own
//! delayed evaluation, and a per-window token decides at fire time whether
//! the evaluation is still the latest one. Nothing is cancelled eagerly;
//! a superseded evaluation wakes up, notices its token is stale, and ends
//! as a no-op.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::managers::move_executor::MoveExecutor;
use crate::managers::placement_engine;
use crate::platform::host::TabHost;
use crate::services::debug_log::debug_log;
use crate::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
use crate::types::decision::MoveOutcome;
use crate::types::errors::TabHostError;
use crate::types::preferences::{parse_delay, Preferences};
use crate::types::tab::{ActivationEvent, Tab, WindowId};

/// Schedules one placement evaluation per activation signal.
///
/// Evaluation failures are confined here: whatever goes wrong, the
/// debouncer keeps accepting future activations.
pub struct ActivationDebouncer<H: TabHost + 'static> {
    host: Arc<H>,
    store: Arc<PreferenceStore>,
    tokens: Arc<Mutex<HashMap<WindowId, u64>>>,
}

impl<H: TabHost + 'static> ActivationDebouncer<H> {
    pub fn new(host: Arc<H>, store: Arc<PreferenceStore>) -> Self {
        Self {
            host,
            store,
            tokens: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Schedules an evaluation of this activation after the stored delay.
    ///
    /// Returns the task handle so callers can await completion; dropping
    /// it detaches the evaluation, which is the normal mode of operation.
    pub fn schedule(&self, event: ActivationEvent) -> JoinHandle<()> {
        let token = self.bump_token(event.window_id);
        let host = Arc::clone(&self.host);
        let store = Arc::clone(&self.store);
        let tokens = Arc::clone(&self.tokens);

        tokio::spawn(async move {
            let prefs = store.read();
            tokio::time::sleep(scheduled_delay(&prefs)).await;

            let current = tokens
                .lock()
                .unwrap()
                .get(&event.window_id)
                .copied()
                .unwrap_or(0);
            if current != token {
                debug_log(
                    &prefs,
                    &format!(
                        "activation of tab {} superseded before evaluation",
                        event.tab_id
                    ),
                );
                return;
            }

            evaluate(host, store, event).await;
        })
    }

    /// Bumps the window's activation token and returns the new value.
    /// The returned token stays current until the next activation in the
    /// same window.
    fn bump_token(&self, window_id: WindowId) -> u64 {
        let mut tokens = self.tokens.lock().unwrap();
        let counter = tokens.entry(window_id).or_insert(0);
        *counter += 1;
        *counter
    }
}

/// Delay to wait before evaluating, falling back to the default when the
/// stored value is unusable.
fn scheduled_delay(prefs: &Preferences) -> Duration {
    match parse_delay(&prefs.delay_move_time) {
        Ok(delay) => delay,
        Err(err) => {
            debug_log(prefs, &format!("{}; using default delay", err));
            Preferences::default_delay()
        }
    }
}

/// One full evaluation cycle: snapshot, decide, execute.
///
/// Preferences and tab state are fetched fresh here; nothing captured at
/// schedule time is reused. All errors are swallowed at this boundary.
async fn evaluate<H: TabHost>(host: Arc<H>, store: Arc<PreferenceStore>, event: ActivationEvent) {
    let prefs = store.read();

    let active: Option<Tab> = match host.active_tab(event.window_id).await {
        Ok(tab) => Some(tab),
        Err(TabHostError::NoActiveTab(_)) => None,
        Err(err) => {
            debug_log(&prefs, &format!("active tab query failed: {}", err));
            return;
        }
    };

    let window_tabs = match host.window_tabs(event.window_id).await {
        Ok(tabs) => tabs,
        Err(err) => {
            debug_log(&prefs, &format!("window tab query failed: {}", err));
            return;
        }
    };

    let decision = placement_engine::decide(&event, &window_tabs, active.as_ref(), &prefs);

    let active = match active {
        Some(tab) => tab,
        None => {
            debug_log(
                &prefs,
                &format!("no active tab for activation of tab {}", event.tab_id),
            );
            return;
        }
    };

    debug_log(
        &prefs,
        &format!(
            "active tab {:?}, decision {:?}",
            active.summarize(),
            decision
        ),
    );

    let executor = MoveExecutor::new(host);
    match executor.execute(&decision, &active, &prefs).await {
        MoveOutcome::Failed(err) => {
            debug_log(&prefs, &format!("move failed for tab {}: {}", active.id, err));
        }
        outcome => {
            debug_log(&prefs, &format!("outcome for tab {}: {:?}", active.id, outcome));
        }
    }
}
