//! In-memory tab host for demos and tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::types::errors::TabHostError;
use crate::types::tab::{GroupId, Tab, TabId, WindowId, TAB_GROUP_NONE};

use super::host::TabHost;

/// In-memory implementation of [`TabHost`].
///
/// Windows hold their tabs in index order; `index` fields are rewritten
/// after every mutation so they stay contiguous. Failure injection and the
/// group-eviction-on-move quirk are switchable so executor and debouncer
/// behavior can be exercised without a real browser.
pub struct MemoryTabHost {
    state: Mutex<HostState>,
}

#[derive(Default)]
struct HostState {
    windows: HashMap<WindowId, Vec<Tab>>,
    active: HashMap<WindowId, TabId>,
    evict_on_move: bool,
    fail_moves: bool,
    fail_grouping: bool,
    move_calls: u32,
    group_calls: u32,
}

impl MemoryTabHost {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HostState::default()),
        }
    }

    /// Seeds a window with tabs.
    ///
    /// Window ids and indexes are rewritten to match the given order. The
    /// first tab becomes active unless the window already has an active tab.
    pub fn insert_window(&self, window_id: WindowId, mut tabs: Vec<Tab>) {
        let mut state = self.state.lock().unwrap();
        for (i, tab) in tabs.iter_mut().enumerate() {
            tab.window_id = window_id;
            tab.index = i as u32;
        }
        if let Some(first) = tabs.first() {
            state.active.entry(window_id).or_insert(first.id);
        }
        state.windows.insert(window_id, tabs);
    }

    /// Marks a tab as the active tab of a window. The id is not validated;
    /// pointing at a nonexistent tab simulates a window whose active tab
    /// has just closed.
    pub fn set_active(&self, window_id: WindowId, tab_id: TabId) {
        self.state.lock().unwrap().active.insert(window_id, tab_id);
    }

    /// When set, any move of a grouped tab strips its group membership,
    /// mimicking the platform quirk of boundary-crossing moves.
    pub fn set_evict_on_move(&self, evict: bool) {
        self.state.lock().unwrap().evict_on_move = evict;
    }

    /// When set, all `move_tab` calls are rejected.
    pub fn set_fail_moves(&self, fail: bool) {
        self.state.lock().unwrap().fail_moves = fail;
    }

    /// When set, all `group_tab` calls are rejected.
    pub fn set_fail_grouping(&self, fail: bool) {
        self.state.lock().unwrap().fail_grouping = fail;
    }

    /// Number of `move_tab` calls received, including rejected ones.
    pub fn move_calls(&self) -> u32 {
        self.state.lock().unwrap().move_calls
    }

    /// Number of `group_tab` calls received, including rejected ones.
    pub fn group_calls(&self) -> u32 {
        self.state.lock().unwrap().group_calls
    }

    /// Tab ids of a window in current index order.
    pub fn tab_order(&self, window_id: WindowId) -> Vec<TabId> {
        let state = self.state.lock().unwrap();
        state
            .windows
            .get(&window_id)
            .map(|tabs| tabs.iter().map(|t| t.id).collect())
            .unwrap_or_default()
    }

    /// Current snapshot of a single tab, searched across all windows.
    pub fn tab(&self, tab_id: TabId) -> Option<Tab> {
        let state = self.state.lock().unwrap();
        state
            .windows
            .values()
            .flat_map(|tabs| tabs.iter())
            .find(|t| t.id == tab_id)
            .cloned()
    }

    /// Id of a window's active tab, if one is set.
    pub fn active_tab_id(&self, window_id: WindowId) -> Option<TabId> {
        self.state.lock().unwrap().active.get(&window_id).copied()
    }
}

impl Default for MemoryTabHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TabHost for MemoryTabHost {
    async fn active_tab(&self, window_id: WindowId) -> Result<Tab, TabHostError> {
        let state = self.state.lock().unwrap();
        let active_id = state
            .active
            .get(&window_id)
            .copied()
            .ok_or(TabHostError::NoActiveTab(window_id))?;
        state
            .windows
            .get(&window_id)
            .and_then(|tabs| tabs.iter().find(|t| t.id == active_id))
            .cloned()
            .ok_or(TabHostError::NoActiveTab(window_id))
    }

    async fn window_tabs(&self, window_id: WindowId) -> Result<Vec<Tab>, TabHostError> {
        let state = self.state.lock().unwrap();
        Ok(state.windows.get(&window_id).cloned().unwrap_or_default())
    }

    async fn move_tab(
        &self,
        tab_id: TabId,
        window_id: WindowId,
        index: i64,
    ) -> Result<Tab, TabHostError> {
        let mut state = self.state.lock().unwrap();
        state.move_calls += 1;
        if state.fail_moves {
            return Err(TabHostError::CallFailed("move rejected".to_string()));
        }
        let evict = state.evict_on_move;
        let tabs = state
            .windows
            .get_mut(&window_id)
            .ok_or(TabHostError::TabNotFound(tab_id))?;
        let position = tabs
            .iter()
            .position(|t| t.id == tab_id)
            .ok_or(TabHostError::TabNotFound(tab_id))?;

        let mut tab = tabs.remove(position);
        // Negative index is the append-at-end sentinel
        let target = if index < 0 {
            tabs.len()
        } else {
            (index as usize).min(tabs.len())
        };
        if evict && tab.group_id != TAB_GROUP_NONE {
            tab.group_id = TAB_GROUP_NONE;
        }
        tabs.insert(target, tab);
        for (i, t) in tabs.iter_mut().enumerate() {
            t.index = i as u32;
        }
        Ok(tabs[target].clone())
    }

    async fn group_tab(&self, group_id: GroupId, tab_id: TabId) -> Result<(), TabHostError> {
        let mut state = self.state.lock().unwrap();
        state.group_calls += 1;
        if state.fail_grouping {
            return Err(TabHostError::CallFailed(
                "group assignment rejected".to_string(),
            ));
        }
        for tabs in state.windows.values_mut() {
            if let Some(tab) = tabs.iter_mut().find(|t| t.id == tab_id) {
                tab.group_id = group_id;
                return Ok(());
            }
        }
        Err(TabHostError::TabNotFound(tab_id))
    }

    async fn activate_tab(&self, tab_id: TabId) -> Result<(), TabHostError> {
        let mut state = self.state.lock().unwrap();
        let window_id = state
            .windows
            .iter()
            .find(|(_, tabs)| tabs.iter().any(|t| t.id == tab_id))
            .map(|(window_id, _)| *window_id)
            .ok_or(TabHostError::TabNotFound(tab_id))?;
        state.active.insert(window_id, tab_id);
        Ok(())
    }
}
