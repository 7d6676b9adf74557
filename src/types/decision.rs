use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::TabHostError;
use super::tab::{GroupId, GroupSide};

/// Why the engine chose not to move the active tab this cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoopReason {
    /// No active tab could be resolved for the activation's window.
    NoActiveTab,
    /// The active tab is pinned.
    Pinned,
    /// The active tab already sits at its group edge.
    AlreadyAtEdge,
    /// A different tab was activated during the delay window.
    ActivationSuperseded,
    /// The window holds no other tab to displace.
    OnlyTab,
}

impl fmt::Display for NoopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NoopReason::NoActiveTab => "no-active-tab",
            NoopReason::Pinned => "pinned",
            NoopReason::AlreadyAtEdge => "already-at-edge",
            NoopReason::ActivationSuperseded => "activation-superseded",
            NoopReason::OnlyTab => "only-tab",
        };
        write!(f, "{}", reason)
    }
}

/// The engine's verdict for one activation evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    /// Leave the tab where it is.
    Noop(NoopReason),
    /// Move the tab to this index within its window.
    /// [`MOVE_INDEX_END`](super::tab::MOVE_INDEX_END) appends at the end.
    MoveToIndex(i64),
    /// Move the tab to an edge of its group, carrying the computed target
    /// index and the group membership to re-assert after the move.
    MoveToGroupEdge {
        group_id: GroupId,
        side: GroupSide,
        index: i64,
    },
}

/// Result of carrying out a [`Decision`] against the platform.
#[derive(Debug)]
pub enum MoveOutcome {
    /// The decision was a no-op; no platform call was made.
    Skipped(NoopReason),
    /// The tab was moved and kept its group membership (if any).
    Moved { index: i64 },
    /// The move evicted the tab from its group; one corrective
    /// group-assignment call was issued.
    Regrouped { group_id: GroupId, index: i64 },
    /// The platform rejected the move. Never retried.
    Failed(TabHostError),
}
