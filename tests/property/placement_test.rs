//! Property-based tests for the placement decision engine.
//!
//! These pin down the decision rules over arbitrary window snapshots:
//! pinned tabs never move, grouped tabs always target the boundary computed
//! from their group's extreme indexes, and edge decisions are idempotent.

use proptest::prelude::*;

use tabflow::managers::placement_engine::{decide, group_anchor_index, is_in_group};
use tabflow::types::decision::{Decision, NoopReason};
use tabflow::types::preferences::Preferences;
use tabflow::types::tab::{ActivationEvent, GroupSide, Tab, MOVE_INDEX_END, TAB_GROUP_NONE};

/// Windows of 1..10 tabs with ids 1..=n, contiguous indexes, arbitrary
/// pinning, and group ids drawn from {none, 1, 2}.
fn window_strategy() -> impl Strategy<Value = Vec<Tab>> {
    prop::collection::vec((any::<bool>(), 0i64..3), 1..10).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (pinned, group))| Tab {
                id: i as i64 + 1,
                window_id: 1,
                index: i as u32,
                group_id: if group == 0 { TAB_GROUP_NONE } else { group },
                pinned,
                title: format!("Tab {}", i + 1),
                url: format!("https://example.com/{}", i + 1),
            })
            .collect()
    })
}

fn prefs(right_to_left: bool) -> Preferences {
    Preferences {
        right_to_left,
        ..Preferences::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pinned_active_tab_always_noops(
        window in window_strategy(),
        pick in any::<prop::sample::Index>(),
        right_to_left in any::<bool>(),
    ) {
        let mut window = window;
        let i = pick.index(window.len());
        window[i].pinned = true;
        let active = window[i].clone();
        let event = ActivationEvent { tab_id: active.id, window_id: 1 };

        let decision = decide(&event, &window, Some(&active), &prefs(right_to_left));
        prop_assert_eq!(decision, Decision::Noop(NoopReason::Pinned));
    }

    #[test]
    fn grouped_targets_follow_the_edge_formula(
        window in window_strategy(),
        pick in any::<prop::sample::Index>(),
        right_to_left in any::<bool>(),
    ) {
        let active = window[pick.index(window.len())].clone();
        prop_assume!(!active.pinned);
        prop_assume!(is_in_group(&active, &window));

        let side = if right_to_left { GroupSide::Right } else { GroupSide::Left };
        let anchor = group_anchor_index(active.group_id, &window, side).unwrap();
        let expected_target = match side {
            GroupSide::Left => i64::from(anchor),
            GroupSide::Right => i64::from(anchor) + 1,
        };
        let event = ActivationEvent { tab_id: active.id, window_id: 1 };

        match decide(&event, &window, Some(&active), &prefs(right_to_left)) {
            Decision::Noop(NoopReason::AlreadyAtEdge) => {
                prop_assert_eq!(active.index, anchor);
            }
            Decision::MoveToGroupEdge { group_id, index, .. } => {
                prop_assert_ne!(active.index, anchor);
                prop_assert_eq!(group_id, active.group_id);
                prop_assert_eq!(index, expected_target);
            }
            other => prop_assert!(false, "unexpected decision: {:?}", other),
        }
    }

    #[test]
    fn edge_noop_is_idempotent(
        window in window_strategy(),
        pick in any::<prop::sample::Index>(),
        right_to_left in any::<bool>(),
    ) {
        let active = window[pick.index(window.len())].clone();
        let event = ActivationEvent { tab_id: active.id, window_id: 1 };
        let preferences = prefs(right_to_left);

        let first = decide(&event, &window, Some(&active), &preferences);
        prop_assume!(first == Decision::Noop(NoopReason::AlreadyAtEdge));

        // Nothing changed, so the verdict must not change either
        let second = decide(&event, &window, Some(&active), &preferences);
        prop_assert_eq!(second, first);
    }

    #[test]
    fn ungrouped_rtl_always_targets_the_end(
        window in window_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let active = window[pick.index(window.len())].clone();
        prop_assume!(!active.pinned);
        prop_assume!(!is_in_group(&active, &window));
        let event = ActivationEvent { tab_id: active.id, window_id: 1 };

        let decision = decide(&event, &window, Some(&active), &prefs(true));
        prop_assert_eq!(decision, Decision::MoveToIndex(MOVE_INDEX_END));
    }

    #[test]
    fn ungrouped_ltr_targets_first_other_slot(
        window in window_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let active = window[pick.index(window.len())].clone();
        prop_assume!(!active.pinned);
        prop_assume!(!is_in_group(&active, &window));
        let event = ActivationEvent { tab_id: active.id, window_id: 1 };

        let expected = window
            .iter()
            .filter(|t| t.id != active.id)
            .map(|t| t.index)
            .min();

        let decision = decide(&event, &window, Some(&active), &prefs(false));
        match expected {
            Some(index) => prop_assert_eq!(decision, Decision::MoveToIndex(i64::from(index))),
            None => prop_assert_eq!(decision, Decision::Noop(NoopReason::OnlyTab)),
        }
    }
}
