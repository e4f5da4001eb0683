//! View state container and event transitions
//!
//! All mutation of the view goes through [`ViewState::apply`], one event
//! per completed operation. The transitions are pure, which keeps the
//! interleaving behavior (stale page results, partial group sweeps)
//! testable without a runtime.

use ledgerview_client::{Group, Ledger};

use crate::pagination::PageCursor;

/// User message shown when a ledger page fetch fails
pub const LEDGERS_LOAD_ERROR: &str = "Could not load ledgers. Please try again later.";

/// User message shown when a group page fetch fails
pub const GROUPS_LOAD_ERROR: &str = "Could not load groups. Please try again later.";

// ==================== Selection ====================

/// Tracks which ledger, if any, is open for editing.
///
/// Invariant: `editing == true` implies a ledger is selected.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ledger: Option<Ledger>,
    editing: bool,
}

impl Selection {
    /// The ledger currently selected for editing
    pub fn ledger(&self) -> Option<&Ledger> {
        self.ledger.as_ref()
    }

    /// Whether the edit surface is open
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    fn begin(&mut self, ledger: Ledger) {
        self.ledger = Some(ledger);
        self.editing = true;
    }

    fn clear(&mut self) {
        self.editing = false;
        self.ledger = None;
    }
}

// ==================== Events ====================

/// One completed (or initiated) operation against the view
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// A page was requested; moves the cursor and tags the in-flight fetch
    PageRequested { page: u32 },
    /// A ledger page fetch resolved successfully
    PageLoaded {
        page: u32,
        ledgers: Vec<Ledger>,
        total_pages: u32,
    },
    /// A ledger page fetch failed
    PageFailed { page: u32 },
    /// One group page arrived during the sweep
    GroupPageLoaded { groups: Vec<Group> },
    /// The group sweep finished cleanly
    GroupSweepCompleted,
    /// The group sweep stopped on a failure; staged pages are still kept
    GroupSweepFailed,
    /// A ledger was opened for editing
    EditBegun { ledger: Ledger },
    /// The edit surface was dismissed
    EditCancelled,
    /// The edit dialog saved; fold the updated record back into the list
    EditCommitted { ledger: Ledger },
}

// ==================== State ====================

/// In-memory state of the ledger view
#[derive(Debug, Default)]
pub struct ViewState {
    /// Current page of ledger records, replaced wholesale on each load
    pub ledgers: Vec<Ledger>,
    /// Complete group list, committed wholesale at the end of a sweep
    pub groups: Vec<Group>,
    /// Selection/edit coordinator state
    pub selection: Selection,
    /// Pagination cursor
    pub pages: PageCursor,
    /// Static user-facing error message, if any fetch has failed
    pub error: Option<&'static str>,
    /// Groups staged during an in-progress sweep
    staged_groups: Vec<Group>,
    /// Page index of the most recently requested fetch; results tagged
    /// with an older index are discarded
    requested_page: u32,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            requested_page: 1,
            ..Self::default()
        }
    }

    /// Apply one event to the state
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::PageRequested { page } => {
                self.requested_page = self.pages.go_to(page);
            }
            ViewEvent::PageLoaded {
                page,
                ledgers,
                total_pages,
            } => {
                if page != self.requested_page {
                    log::debug!(
                        "discarding stale page {} result, page {} is current",
                        page,
                        self.requested_page
                    );
                    return;
                }
                self.ledgers = ledgers;
                self.pages.set_total(total_pages);
                // set_total may have pulled the cursor back; keep the tag in step
                self.requested_page = self.pages.current();
            }
            ViewEvent::PageFailed { page } => {
                if page != self.requested_page {
                    log::debug!("discarding stale page {} failure", page);
                    return;
                }
                self.error = Some(LEDGERS_LOAD_ERROR);
            }
            ViewEvent::GroupPageLoaded { groups } => {
                self.staged_groups.extend(groups);
            }
            ViewEvent::GroupSweepCompleted => {
                self.groups = std::mem::take(&mut self.staged_groups);
            }
            ViewEvent::GroupSweepFailed => {
                self.groups = std::mem::take(&mut self.staged_groups);
                self.error = Some(GROUPS_LOAD_ERROR);
            }
            ViewEvent::EditBegun { ledger } => {
                self.selection.begin(ledger);
            }
            ViewEvent::EditCancelled => {
                self.selection.clear();
            }
            ViewEvent::EditCommitted { ledger } => {
                if let Some(slot) = self.ledgers.iter_mut().find(|l| l.id == ledger.id) {
                    *slot = ledger;
                }
            }
        }
    }

    /// Page index the view is currently waiting on
    pub fn requested_page(&self) -> u32 {
        self.requested_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: i64, name: &str) -> Group {
        Group {
            id,
            name: name.to_string(),
        }
    }

    fn ledger(id: i64, name: &str) -> Ledger {
        Ledger {
            id,
            name: name.to_string(),
            mobile_no: "9876543210".to_string(),
            opening_balance: "100.00".to_string(),
            group: group(1, "Assets"),
            debit_credit: "DEBIT".to_string(),
        }
    }

    fn loaded_state() -> ViewState {
        let mut state = ViewState::new();
        state.apply(ViewEvent::PageLoaded {
            page: 1,
            ledgers: vec![ledger(1, "Cash"), ledger(2, "Bank")],
            total_pages: 3,
        });
        state
    }

    #[test]
    fn test_page_loaded_replaces_wholesale() {
        let mut state = loaded_state();
        assert_eq!(state.ledgers.len(), 2);
        assert_eq!(state.pages.total(), 3);

        state.apply(ViewEvent::PageRequested { page: 2 });
        state.apply(ViewEvent::PageLoaded {
            page: 2,
            ledgers: vec![ledger(3, "Petty Cash")],
            total_pages: 3,
        });
        assert_eq!(state.ledgers.len(), 1);
        assert_eq!(state.ledgers[0].id, 3);
        assert_eq!(state.pages.current(), 2);
    }

    #[test]
    fn test_stale_page_result_discarded() {
        let mut state = loaded_state();
        state.apply(ViewEvent::PageRequested { page: 2 });
        // The page-1 fetch from before the click resolves late.
        state.apply(ViewEvent::PageLoaded {
            page: 1,
            ledgers: vec![ledger(9, "Stale")],
            total_pages: 3,
        });
        assert!(state.ledgers.iter().all(|l| l.id != 9));
        assert_eq!(state.pages.current(), 2);
    }

    #[test]
    fn test_stale_failure_discarded() {
        let mut state = loaded_state();
        state.apply(ViewEvent::PageRequested { page: 2 });
        state.apply(ViewEvent::PageFailed { page: 1 });
        assert!(state.error.is_none());
    }

    #[test]
    fn test_page_failed_keeps_stale_rows() {
        let mut state = loaded_state();
        let before = state.ledgers.clone();
        state.apply(ViewEvent::PageRequested { page: 2 });
        state.apply(ViewEvent::PageFailed { page: 2 });
        assert_eq!(state.ledgers, before);
        assert_eq!(state.error, Some(LEDGERS_LOAD_ERROR));
    }

    #[test]
    fn test_shrunken_collection_clamps_cursor() {
        let mut state = loaded_state();
        state.apply(ViewEvent::PageRequested { page: 3 });
        state.apply(ViewEvent::PageLoaded {
            page: 3,
            ledgers: vec![ledger(5, "Tail")],
            total_pages: 2,
        });
        assert_eq!(state.pages.current(), 2);
        assert_eq!(state.requested_page(), 2);
    }

    #[test]
    fn test_group_sweep_accumulates_in_arrival_order() {
        let mut state = ViewState::new();
        state.apply(ViewEvent::GroupPageLoaded {
            groups: vec![group(1, "Assets"), group(2, "Liabilities")],
        });
        state.apply(ViewEvent::GroupPageLoaded {
            groups: vec![group(3, "Income")],
        });
        // Nothing visible until the sweep commits.
        assert!(state.groups.is_empty());

        state.apply(ViewEvent::GroupSweepCompleted);
        let ids: Vec<i64> = state.groups.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_group_sweep_failure_commits_partial() {
        let mut state = ViewState::new();
        state.apply(ViewEvent::GroupPageLoaded {
            groups: vec![group(1, "Assets")],
        });
        state.apply(ViewEvent::GroupSweepFailed);
        assert_eq!(state.groups.len(), 1);
        assert_eq!(state.error, Some(GROUPS_LOAD_ERROR));
    }

    #[test]
    fn test_edit_lifecycle() {
        let mut state = loaded_state();
        assert!(!state.selection.is_editing());

        state.apply(ViewEvent::EditBegun {
            ledger: ledger(1, "Cash"),
        });
        assert!(state.selection.is_editing());
        assert_eq!(state.selection.ledger().unwrap().id, 1);

        state.apply(ViewEvent::EditCancelled);
        assert!(!state.selection.is_editing());
        assert!(state.selection.ledger().is_none());
    }

    #[test]
    fn test_commit_replaces_single_entry_in_place() {
        let mut state = loaded_state();
        let mut updated = ledger(1, "Cash (renamed)");
        updated.opening_balance = "250.00".to_string();

        state.apply(ViewEvent::EditCommitted {
            ledger: updated.clone(),
        });
        assert_eq!(state.ledgers.len(), 2);
        assert_eq!(state.ledgers[0], updated);
        assert_eq!(state.ledgers[1], ledger(2, "Bank"));
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut state = loaded_state();
        let updated = ledger(1, "Cash (renamed)");

        state.apply(ViewEvent::EditCommitted {
            ledger: updated.clone(),
        });
        let once = state.ledgers.clone();
        state.apply(ViewEvent::EditCommitted { ledger: updated });
        assert_eq!(state.ledgers, once);
    }

    #[test]
    fn test_commit_with_unknown_id_is_a_noop() {
        let mut state = loaded_state();
        let before = state.ledgers.clone();
        state.apply(ViewEvent::EditCommitted {
            ledger: ledger(42, "Elsewhere"),
        });
        assert_eq!(state.ledgers, before);
    }

    #[test]
    fn test_commit_does_not_close_edit_surface() {
        let mut state = loaded_state();
        state.apply(ViewEvent::EditBegun {
            ledger: ledger(1, "Cash"),
        });
        state.apply(ViewEvent::EditCommitted {
            ledger: ledger(1, "Cash (renamed)"),
        });
        assert!(state.selection.is_editing());
    }
}
