//! Next-tab cycling for the host's command signal.

use std::sync::Arc;

use crate::platform::host::TabHost;
use crate::types::errors::TabHostError;
use crate::types::tab::{TabId, WindowId};

/// Cycles activation through a window's tabs in index order.
pub struct TabCycler<H: TabHost> {
    host: Arc<H>,
}

impl<H: TabHost> TabCycler<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self { host }
    }

    /// Activates the tab after the currently active one, wrapping to the
    /// first tab at the end of the window.
    ///
    /// Returns the activated tab id, or `None` when the window is empty or
    /// has no active tab.
    pub async fn cycle_next(&self, window_id: WindowId) -> Result<Option<TabId>, TabHostError> {
        let mut tabs = self.host.window_tabs(window_id).await?;
        if tabs.is_empty() {
            return Ok(None);
        }
        tabs.sort_by_key(|t| t.index);

        let active = match self.host.active_tab(window_id).await {
            Ok(tab) => tab,
            Err(TabHostError::NoActiveTab(_)) => return Ok(None),
            Err(err) => return Err(err),
        };

        let position = tabs.iter().position(|t| t.id == active.id).unwrap_or(0);
        let next = &tabs[(position + 1) % tabs.len()];
        self.host.activate_tab(next.id).await?;
        Ok(Some(next.id))
    }
}
