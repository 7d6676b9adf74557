use std::sync::Arc;

use tabflow::managers::move_executor::MoveExecutor;
use tabflow::platform::memory::MemoryTabHost;
use tabflow::types::decision::{Decision, MoveOutcome, NoopReason};
use tabflow::types::errors::TabHostError;
use tabflow::types::preferences::Preferences;
use tabflow::types::tab::{GroupId, GroupSide, Tab, TabId, MOVE_INDEX_END, TAB_GROUP_NONE};

fn tab(id: TabId, group_id: GroupId) -> Tab {
    Tab {
        id,
        window_id: 1,
        index: 0,
        group_id,
        pinned: false,
        title: format!("Tab {}", id),
        url: format!("https://example.com/{}", id),
    }
}

/// Host with one window of three tabs: two in group 5, one ungrouped.
fn seeded_host() -> Arc<MemoryTabHost> {
    let host = Arc::new(MemoryTabHost::new());
    host.insert_window(1, vec![tab(1, 5), tab(2, 5), tab(3, TAB_GROUP_NONE)]);
    host
}

#[tokio::test]
async fn noop_decision_makes_no_platform_calls() {
    let host = seeded_host();
    let executor = MoveExecutor::new(Arc::clone(&host));
    let active = host.tab(3).unwrap();

    let outcome = executor
        .execute(
            &Decision::Noop(NoopReason::Pinned),
            &active,
            &Preferences::default(),
        )
        .await;

    assert!(matches!(outcome, MoveOutcome::Skipped(NoopReason::Pinned)));
    assert_eq!(host.move_calls(), 0);
    assert_eq!(host.group_calls(), 0);
}

#[tokio::test]
async fn move_to_index_repositions_tab() {
    let host = seeded_host();
    let executor = MoveExecutor::new(Arc::clone(&host));
    let active = host.tab(3).unwrap();

    let outcome = executor
        .execute(&Decision::MoveToIndex(0), &active, &Preferences::default())
        .await;

    assert!(matches!(outcome, MoveOutcome::Moved { index: 0 }));
    assert_eq!(host.tab_order(1), vec![3, 1, 2]);
    assert_eq!(host.move_calls(), 1);
}

#[tokio::test]
async fn move_to_end_sentinel_appends() {
    let host = seeded_host();
    let executor = MoveExecutor::new(Arc::clone(&host));
    let active = host.tab(1).unwrap();

    let outcome = executor
        .execute(
            &Decision::MoveToIndex(MOVE_INDEX_END),
            &active,
            &Preferences::default(),
        )
        .await;

    assert!(matches!(outcome, MoveOutcome::Moved { index: 2 }));
    assert_eq!(host.tab_order(1), vec![2, 3, 1]);
}

#[tokio::test]
async fn group_edge_move_without_eviction_needs_no_regroup() {
    let host = seeded_host();
    let executor = MoveExecutor::new(Arc::clone(&host));
    let active = host.tab(2).unwrap();

    let outcome = executor
        .execute(
            &Decision::MoveToGroupEdge {
                group_id: 5,
                side: GroupSide::Left,
                index: 0,
            },
            &active,
            &Preferences::default(),
        )
        .await;

    assert!(matches!(outcome, MoveOutcome::Moved { index: 0 }));
    assert_eq!(host.tab_order(1), vec![2, 1, 3]);
    assert_eq!(host.group_calls(), 0);
    assert_eq!(host.tab(2).unwrap().group_id, 5);
}

#[tokio::test]
async fn eviction_triggers_exactly_one_corrective_regroup() {
    let host = seeded_host();
    host.set_evict_on_move(true);
    let executor = MoveExecutor::new(Arc::clone(&host));
    let active = host.tab(2).unwrap();

    let outcome = executor
        .execute(
            &Decision::MoveToGroupEdge {
                group_id: 5,
                side: GroupSide::Left,
                index: 0,
            },
            &active,
            &Preferences::default(),
        )
        .await;

    assert!(matches!(
        outcome,
        MoveOutcome::Regrouped {
            group_id: 5,
            index: 0
        }
    ));
    assert_eq!(host.move_calls(), 1);
    assert_eq!(host.group_calls(), 1);
    // Original membership is restored
    assert_eq!(host.tab(2).unwrap().group_id, 5);
}

#[tokio::test]
async fn failed_regroup_does_not_fail_the_move() {
    let host = seeded_host();
    host.set_evict_on_move(true);
    host.set_fail_grouping(true);
    let executor = MoveExecutor::new(Arc::clone(&host));
    let active = host.tab(2).unwrap();

    let outcome = executor
        .execute(
            &Decision::MoveToGroupEdge {
                group_id: 5,
                side: GroupSide::Left,
                index: 0,
            },
            &active,
            &Preferences::default(),
        )
        .await;

    // The move itself stands; only the corrective call was rejected.
    assert!(matches!(outcome, MoveOutcome::Regrouped { .. }));
    assert_eq!(host.group_calls(), 1);
    assert_eq!(host.tab_order(1), vec![2, 1, 3]);
}

#[tokio::test]
async fn rejected_move_is_reported_not_retried() {
    let host = seeded_host();
    host.set_fail_moves(true);
    let executor = MoveExecutor::new(Arc::clone(&host));
    let active = host.tab(3).unwrap();

    let outcome = executor
        .execute(&Decision::MoveToIndex(0), &active, &Preferences::default())
        .await;

    assert!(matches!(
        outcome,
        MoveOutcome::Failed(TabHostError::CallFailed(_))
    ));
    assert_eq!(host.move_calls(), 1);
    assert_eq!(host.tab_order(1), vec![1, 2, 3]);
}

#[tokio::test]
async fn moving_a_closed_tab_fails() {
    let host = seeded_host();
    let executor = MoveExecutor::new(Arc::clone(&host));
    // Tab that no longer exists in the window
    let ghost = tab(99, TAB_GROUP_NONE);

    let outcome = executor
        .execute(&Decision::MoveToIndex(0), &ghost, &Preferences::default())
        .await;

    assert!(matches!(
        outcome,
        MoveOutcome::Failed(TabHostError::TabNotFound(99))
    ));
}
