//! REST client for the ledger backend
//!
//! Two collection endpoints are consumed:
//! - `/ledgers/`: page-indexed, one page per request
//! - `/main-groups/`: `next`-linked, followed to exhaustion via [`GroupPager`]

use async_trait::async_trait;
use std::sync::Arc;

pub mod error;
pub mod groups;
pub mod http;
pub mod types;

pub use error::ClientError;
pub use groups::{GroupPager, GROUPS_PATH};
pub use http::HttpLedgerApi;

// Re-export commonly used types
pub use types::{Group, GroupPageResponse, Ledger, LedgerPageResponse};

// ==================== Client Trait ====================

/// API client reference type
pub type ApiRef = Arc<dyn LedgerApiTrait>;

/// Trait for backends serving paginated ledger and group collections
#[async_trait]
pub trait LedgerApiTrait: Send + Sync {
    /// Fetch one page of ledgers for a 1-based page index and page size
    async fn fetch_ledger_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<LedgerPageResponse, ClientError>;

    /// Fetch one page of groups from `url`, which is either the listing
    /// path or a `next` link handed back by a previous page
    async fn fetch_group_page(&self, url: &str) -> Result<GroupPageResponse, ClientError>;
}
