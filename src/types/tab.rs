use serde::{Deserialize, Serialize};

/// Platform-issued tab identifier, unique within a browser session.
pub type TabId = i64;

/// Platform-issued window identifier.
pub type WindowId = i64;

/// Platform-issued tab-group identifier.
pub type GroupId = i64;

/// Group id the platform reports for tabs that belong to no group.
pub const TAB_GROUP_NONE: GroupId = -1;

/// Move target meaning "append at the end of the window".
pub const MOVE_INDEX_END: i64 = -1;

/// Snapshot of a browser tab as reported by the platform.
///
/// Tabs are owned and mutated exclusively by the platform; this struct is a
/// point-in-time copy that may be stale by the time a move is requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: TabId,
    pub window_id: WindowId,
    /// Zero-based position within the window, insertion-ordered and contiguous.
    pub index: u32,
    pub group_id: GroupId,
    pub pinned: bool,
    pub title: String,
    pub url: String,
}

impl Tab {
    /// Whether the platform reports this tab as belonging to a group.
    pub fn is_grouped(&self) -> bool {
        self.group_id != TAB_GROUP_NONE
    }

    /// Returns a concise, non-sensitive summary of this tab for logging.
    /// Keeps only the hostname of the url to avoid leaking paths or queries.
    pub fn summarize(&self) -> TabSummary {
        let host = url::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()));
        TabSummary {
            id: self.id,
            index: self.index,
            window_id: self.window_id,
            group_id: self.group_id,
            pinned: self.pinned,
            title: self.title.clone(),
            host,
        }
    }
}

/// Logging projection of a [`Tab`] without the full url.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TabSummary {
    pub id: TabId,
    pub index: u32,
    pub window_id: WindowId,
    pub group_id: GroupId,
    pub pinned: bool,
    pub title: String,
    pub host: Option<String>,
}

/// The tab/window pair captured at the moment a tab became active.
///
/// Immutable once captured; used after the debounce delay to verify the
/// activation is still the one the user settled on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivationEvent {
    pub tab_id: TabId,
    pub window_id: WindowId,
}

/// Which edge of a tab group a grouped active tab is pinned to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupSide {
    Left,
    Right,
}
