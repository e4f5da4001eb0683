//! Error types for ledgerview-client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Group pagination exceeded the cap of {limit} pages")]
    PageLimit { limit: u32 },
}

impl ClientError {
    /// The URL the failing request was issued against, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            ClientError::Transport { url, .. }
            | ClientError::Status { url, .. }
            | ClientError::Decode { url, .. } => Some(url),
            ClientError::PageLimit { .. } => None,
        }
    }
}
