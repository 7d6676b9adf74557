//! Move executor: carries a [`Decision`] out against the platform.
//!
//! Single attempt, best effort. A rejected move is reported through the
//! outcome and never retried; a later activation simply produces a fresh
//! decision against fresh state.

use std::sync::Arc;

use crate::platform::host::TabHost;
use crate::services::debug_log::debug_log;
use crate::types::decision::{Decision, MoveOutcome};
use crate::types::preferences::Preferences;
use crate::types::tab::Tab;

pub struct MoveExecutor<H: TabHost> {
    host: Arc<H>,
}

impl<H: TabHost> MoveExecutor<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self { host }
    }

    /// Executes a decision for the given active tab.
    ///
    /// Issues at most one move call, plus one corrective group-assignment
    /// call when a group-edge move evicted the tab from its group. A failed
    /// corrective call is logged only; the move itself still counts.
    pub async fn execute(
        &self,
        decision: &Decision,
        active_tab: &Tab,
        prefs: &Preferences,
    ) -> MoveOutcome {
        match decision {
            Decision::Noop(reason) => MoveOutcome::Skipped(*reason),
            Decision::MoveToIndex(index) => {
                match self
                    .host
                    .move_tab(active_tab.id, active_tab.window_id, *index)
                    .await
                {
                    Ok(moved) => MoveOutcome::Moved {
                        index: i64::from(moved.index),
                    },
                    Err(err) => MoveOutcome::Failed(err),
                }
            }
            Decision::MoveToGroupEdge {
                group_id, index, ..
            } => {
                let moved = match self
                    .host
                    .move_tab(active_tab.id, active_tab.window_id, *index)
                    .await
                {
                    Ok(tab) => tab,
                    Err(err) => return MoveOutcome::Failed(err),
                };

                if moved.group_id != *group_id {
                    // The move carried the tab out of its group; put it back.
                    if let Err(err) = self.host.group_tab(*group_id, moved.id).await {
                        debug_log(
                            prefs,
                            &format!(
                                "failed to reassign tab {} to group {}: {}",
                                moved.id, group_id, err
                            ),
                        );
                    }
                    return MoveOutcome::Regrouped {
                        group_id: *group_id,
                        index: i64::from(moved.index),
                    };
                }

                MoveOutcome::Moved {
                    index: i64::from(moved.index),
                }
            }
        }
    }
}
