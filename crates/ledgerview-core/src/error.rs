//! Error types for ledgerview-core

use ledgerview_client::ClientError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A ledger page fetch failed
    LedgerFetchFailed,
    /// The group sweep stopped on a failed page
    GroupFetchFailed,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::LedgerFetchFailed => write!(f, "LEDGER_FETCH_FAILED"),
            ErrorCode::GroupFetchFailed => write!(f, "GROUP_FETCH_FAILED"),
        }
    }
}

/// Main error type for ledgerview-core
///
/// Every failure here degrades to a visible message on the view; none
/// are fatal to the process.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to load ledger page {page}")]
    LedgerFetch {
        page: u32,
        #[source]
        source: ClientError,
    },

    #[error("Failed to load groups, {loaded} pages committed")]
    GroupFetch {
        loaded: u32,
        #[source]
        source: ClientError,
    },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::LedgerFetch { .. } => ErrorCode::LedgerFetchFailed,
            CoreError::GroupFetch { .. } => ErrorCode::GroupFetchFailed,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
