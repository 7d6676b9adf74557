//! Browser host seam.
//!
//! The engine never owns tab state: it reads snapshots and requests moves
//! through this trait, and the platform is free to reject calls or hand back
//! data that is stale by the time it arrives.

use async_trait::async_trait;

use crate::types::errors::TabHostError;
use crate::types::tab::{GroupId, Tab, TabId, WindowId};

/// The browser platform surface the engine drives.
///
/// Every call is a suspension point; unrelated evaluations and other host
/// events may interleave arbitrarily between calls.
#[async_trait]
pub trait TabHost: Send + Sync {
    /// Returns the currently active tab of a window.
    ///
    /// Fails with [`TabHostError::NoActiveTab`] when the window has none.
    async fn active_tab(&self, window_id: WindowId) -> Result<Tab, TabHostError>;

    /// Returns all tabs of a window. May be empty.
    async fn window_tabs(&self, window_id: WindowId) -> Result<Vec<Tab>, TabHostError>;

    /// Moves a tab to `index` within a window and returns the tab as the
    /// platform reports it after the move.
    ///
    /// [`MOVE_INDEX_END`](crate::types::tab::MOVE_INDEX_END) appends at the
    /// end. The reported tab may have lost its group membership: crossing a
    /// group boundary can evict the tab as a side effect of the move.
    async fn move_tab(
        &self,
        tab_id: TabId,
        window_id: WindowId,
        index: i64,
    ) -> Result<Tab, TabHostError>;

    /// Adds a tab to a group.
    async fn group_tab(&self, group_id: GroupId, tab_id: TabId) -> Result<(), TabHostError>;

    /// Makes a tab the active tab of its window.
    async fn activate_tab(&self, tab_id: TabId) -> Result<(), TabHostError>;
}
