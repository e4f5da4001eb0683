//! Lazy pager over the `next`-linked group listing

use crate::error::ClientError;
use crate::types::GroupPageResponse;
use crate::ApiRef;

/// Listing path of the group collection
pub const GROUPS_PATH: &str = "/main-groups/";

/// A lazy, restartable sequence of group pages.
///
/// Each call to [`next_page`](GroupPager::next_page) fetches exactly one
/// page and remembers the `next` link for the following call; pages are
/// never fetched concurrently. The sequence ends when the backend stops
/// handing back a `next` link, when a fetch fails, or when the page cap
/// is hit. The cap exists because the `next`-link contract is assumed,
/// not guaranteed, to terminate.
pub struct GroupPager {
    api: ApiRef,
    next: Option<String>,
    fetched: u32,
    limit: u32,
}

impl GroupPager {
    /// Create a pager starting at the listing path
    pub fn new(api: ApiRef, limit: u32) -> Self {
        Self {
            api,
            next: Some(GROUPS_PATH.to_string()),
            fetched: 0,
            limit,
        }
    }

    /// Fetch the next page, or `None` once the sequence is exhausted.
    ///
    /// After an `Err` the sequence is exhausted as well: the failed page
    /// is not retried and no further pages are followed.
    pub async fn next_page(&mut self) -> Option<Result<GroupPageResponse, ClientError>> {
        let url = self.next.take()?;

        if self.fetched >= self.limit {
            log::warn!(
                "group listing still had a next link after {} pages, stopping",
                self.fetched
            );
            return Some(Err(ClientError::PageLimit { limit: self.limit }));
        }

        match self.api.fetch_group_page(&url).await {
            Ok(page) => {
                self.fetched += 1;
                self.next = page.next.clone();
                Some(Ok(page))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Whether the sequence has ended
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.fetched
    }

    /// Reset the pager to the start of the listing
    pub fn restart(&mut self) {
        self.next = Some(GROUPS_PATH.to_string());
        self.fetched = 0;
    }
}
