//! Decision engine for debounced tab repositioning.
//!
//! Pure functions over a window snapshot: no platform calls, no timers, no
//! shared state. The debouncer fetches snapshots and preferences; this
//! module decides whether and where the active tab should go.

use crate::types::decision::{Decision, NoopReason};
use crate::types::preferences::Preferences;
use crate::types::tab::{ActivationEvent, GroupId, GroupSide, Tab, MOVE_INDEX_END};

/// Decides whether and where to move the tab that settled as active.
///
/// Rules apply in order, short-circuiting at the first match:
/// 1. no resolvable active tab yields a noop;
/// 2. pinned tabs never move;
/// 3. a tab sharing its group with at least one other tab goes to the
///    group edge chosen by the directionality preference, unless it is
///    already there;
/// 4. an ungrouped tab only moves if it is still the tab captured in the
///    activation event;
/// 5. left-to-right: the target is the slot of the first other tab in the
///    window (a window with no other tab yields a noop);
/// 6. right-to-left: the target is the end of the window.
pub fn decide(
    event: &ActivationEvent,
    window_tabs: &[Tab],
    active_tab: Option<&Tab>,
    prefs: &Preferences,
) -> Decision {
    let active = match active_tab {
        Some(tab) => tab,
        None => return Decision::Noop(NoopReason::NoActiveTab),
    };

    if active.pinned {
        return Decision::Noop(NoopReason::Pinned);
    }

    if is_in_group(active, window_tabs) {
        let side = if prefs.right_to_left {
            GroupSide::Right
        } else {
            GroupSide::Left
        };
        return decide_group_edge(active, window_tabs, side);
    }

    // The user may have activated a different tab while the delay was
    // running; only the activation they settled on gets to move.
    if active.id != event.tab_id {
        return Decision::Noop(NoopReason::ActivationSuperseded);
    }

    if prefs.right_to_left {
        return Decision::MoveToIndex(MOVE_INDEX_END);
    }

    // Front of window means the slot of the first other tab, not absolute
    // index 0.
    match window_tabs
        .iter()
        .filter(|t| t.id != active.id)
        .min_by_key(|t| t.index)
    {
        Some(first_other) => Decision::MoveToIndex(i64::from(first_other.index)),
        None => Decision::Noop(NoopReason::OnlyTab),
    }
}

/// True when the tab belongs to a group that holds at least one other tab
/// in this window. A group containing only the active tab itself behaves
/// like no group at all.
pub fn is_in_group(active: &Tab, window_tabs: &[Tab]) -> bool {
    active.is_grouped()
        && window_tabs
            .iter()
            .any(|t| t.group_id == active.group_id && t.id != active.id)
}

/// Lowest (left) or highest (right) index among tabs sharing `group_id`.
/// Ties at a boundary resolve to the first match in ascending index order.
pub fn group_anchor_index(
    group_id: GroupId,
    window_tabs: &[Tab],
    side: GroupSide,
) -> Option<u32> {
    let members = window_tabs
        .iter()
        .filter(|t| t.group_id == group_id)
        .map(|t| t.index);
    match side {
        GroupSide::Left => members.min(),
        GroupSide::Right => members.max(),
    }
}

fn decide_group_edge(active: &Tab, window_tabs: &[Tab], side: GroupSide) -> Decision {
    let anchor = match group_anchor_index(active.group_id, window_tabs, side) {
        Some(index) => index,
        // is_in_group already proved the group has a member in this window
        None => return Decision::Noop(NoopReason::AlreadyAtEdge),
    };

    // Both sides compare against the boundary member's own index: the
    // rightmost tab of a group is at its right edge even though the move
    // target for everyone else is one slot past it.
    if active.index == anchor {
        return Decision::Noop(NoopReason::AlreadyAtEdge);
    }

    let index = match side {
        GroupSide::Left => i64::from(anchor),
        GroupSide::Right => i64::from(anchor) + 1,
    };
    Decision::MoveToGroupEdge {
        group_id: active.group_id,
        side,
        index,
    }
}
