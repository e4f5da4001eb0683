//! View state and data-loading logic for ledgerview
//!
//! [`LedgerView`] owns the in-memory state of one ledger table view and
//! drives the two backend fetches against a [`LedgerApiTrait`]
//! implementation: page-indexed ledger loads and the exhaustive group
//! sweep. All state transitions funnel through [`ViewState::apply`].
//!
//! [`LedgerApiTrait`]: ledgerview_client::LedgerApiTrait

pub mod error;
pub mod pagination;
pub mod state;

use ledgerview_client::{ApiRef, GroupPager};
use ledgerview_config::Config;
use std::sync::RwLock;

pub use error::{CoreError, CoreResult, ErrorCode};
pub use pagination::PageCursor;
pub use state::{Selection, ViewEvent, ViewState, GROUPS_LOAD_ERROR, LEDGERS_LOAD_ERROR};

// Re-export the records the view serves
pub use ledgerview_client::{Group, Ledger};

/// One ledger table view: pagination, records, groups, and edit state
pub struct LedgerView {
    config: Config,
    api: ApiRef,
    state: RwLock<ViewState>,
}

impl LedgerView {
    /// Create a view with config and API client
    pub fn new(config: Config, api: ApiRef) -> Self {
        Self {
            config,
            api,
            state: RwLock::new(ViewState::new()),
        }
    }

    fn apply(&self, event: ViewEvent) {
        self.state.write().unwrap().apply(event);
    }

    // ==================== Ledger Page Loader ====================

    /// Load one page of ledgers, replacing the current rows on success.
    ///
    /// On failure the rows are left untouched and the static user
    /// message is recorded on the view. A result arriving for a page
    /// that is no longer the requested one is discarded either way.
    pub async fn load_page(&self, page: u32) -> CoreResult<()> {
        let page = {
            let mut state = self.state.write().unwrap();
            state.apply(ViewEvent::PageRequested { page });
            state.pages.current()
        };
        let page_size = self.config.pagination.items_per_page;

        match self.api.fetch_ledger_page(page, page_size).await {
            Ok(response) => {
                log::info!(
                    "loaded ledger page {} ({} records, {} pages total)",
                    page,
                    response.results.len(),
                    response.total_pages
                );
                self.apply(ViewEvent::PageLoaded {
                    page,
                    ledgers: response.results,
                    total_pages: response.total_pages,
                });
                Ok(())
            }
            Err(e) => {
                log::error!("failed to fetch ledger page {}: {}", page, e);
                self.apply(ViewEvent::PageFailed { page });
                Err(CoreError::LedgerFetch { page, source: e })
            }
        }
    }

    /// Re-fetch the page the cursor is currently on
    pub async fn reload(&self) -> CoreResult<()> {
        let page = self.state.read().unwrap().pages.current();
        self.load_page(page).await
    }

    // ==================== Group Loader ====================

    /// Collect the complete group list by draining the `next`-linked
    /// listing to exhaustion. Runs once at mount; a mid-sweep failure
    /// stops the sweep but still commits the pages fetched so far.
    pub async fn load_groups(&self) -> CoreResult<()> {
        let mut pager = GroupPager::new(
            self.api.clone(),
            self.config.pagination.max_group_pages,
        );

        while let Some(result) = pager.next_page().await {
            match result {
                Ok(page) => {
                    self.apply(ViewEvent::GroupPageLoaded {
                        groups: page.results,
                    });
                }
                Err(e) => {
                    log::error!(
                        "group sweep stopped after {} pages: {}",
                        pager.pages_fetched(),
                        e
                    );
                    self.apply(ViewEvent::GroupSweepFailed);
                    return Err(CoreError::GroupFetch {
                        loaded: pager.pages_fetched(),
                        source: e,
                    });
                }
            }
        }

        log::info!("group sweep complete after {} pages", pager.pages_fetched());
        self.apply(ViewEvent::GroupSweepCompleted);
        Ok(())
    }

    // ==================== Selection/Edit Coordinator ====================

    /// Open the edit surface for `ledger`. No network call.
    pub fn begin_edit(&self, ledger: Ledger) {
        self.apply(ViewEvent::EditBegun { ledger });
    }

    /// Dismiss the edit surface and clear the selection
    pub fn cancel_edit(&self) {
        self.apply(ViewEvent::EditCancelled);
    }

    /// Fold an already-persisted edit back into the current rows.
    ///
    /// Replaces the single entry whose id matches; a record from another
    /// page is silently ignored. Does not close the edit surface. With
    /// `edit.refetch_on_save` enabled the current page is re-fetched
    /// afterwards instead of trusting the caller's record alone.
    pub async fn commit_edit(&self, updated: Ledger) -> CoreResult<()> {
        self.apply(ViewEvent::EditCommitted { ledger: updated });

        if self.config.edit.refetch_on_save {
            self.reload().await
        } else {
            Ok(())
        }
    }

    // ==================== Pagination Controller ====================

    /// Load the next page, if there is one
    pub async fn next_page(&self) -> CoreResult<()> {
        let target = {
            let state = self.state.read().unwrap();
            if !state.pages.has_next() {
                return Ok(());
            }
            state.pages.current() + 1
        };
        self.load_page(target).await
    }

    /// Load the previous page, if there is one
    pub async fn prev_page(&self) -> CoreResult<()> {
        let target = {
            let state = self.state.read().unwrap();
            if !state.pages.has_prev() {
                return Ok(());
            }
            state.pages.current() - 1
        };
        self.load_page(target).await
    }

    /// Jump to `page`, clamped into the known page range
    pub async fn go_to_page(&self, page: u32) -> CoreResult<()> {
        self.load_page(page).await
    }

    // ==================== Accessors ====================

    /// Rows of the currently loaded page
    pub fn ledgers(&self) -> Vec<Ledger> {
        self.state.read().unwrap().ledgers.clone()
    }

    /// The complete group list collected at mount
    pub fn groups(&self) -> Vec<Group> {
        self.state.read().unwrap().groups.clone()
    }

    /// The ledger currently open for editing, if any
    pub fn editing_ledger(&self) -> Option<Ledger> {
        self.state.read().unwrap().selection.ledger().cloned()
    }

    /// Whether the edit surface is open
    pub fn is_editing(&self) -> bool {
        self.state.read().unwrap().selection.is_editing()
    }

    /// Current 1-based page index
    pub fn current_page(&self) -> u32 {
        self.state.read().unwrap().pages.current()
    }

    /// Total page count as last reported by the backend
    pub fn total_pages(&self) -> u32 {
        self.state.read().unwrap().pages.total()
    }

    /// Whether a "Previous" control should be enabled
    pub fn has_prev(&self) -> bool {
        self.state.read().unwrap().pages.has_prev()
    }

    /// Whether a "Next" control should be enabled
    pub fn has_next(&self) -> bool {
        self.state.read().unwrap().pages.has_next()
    }

    /// Human-readable page position, e.g. "Page 1 of 3"
    pub fn page_indicator(&self) -> String {
        self.state.read().unwrap().pages.indicator()
    }

    /// Static user-facing error message, if any fetch has failed
    pub fn error_message(&self) -> Option<&'static str> {
        self.state.read().unwrap().error
    }
}

// ==================== Tests ====================
