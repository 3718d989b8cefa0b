use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::{LyricsResponse, SubmissionInput};

/// Message shown when a failure response carries no usable `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch lyrics";

/// Everything that can end a submission cycle in the error section.
///
/// `Display` is the bare message; the controller adds the `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never got a response (DNS, refused connection, task panic).
    #[error("{0}")]
    Transport(String),
    /// The service answered outside the 2xx range.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// A 2xx body that isn't the expected JSON shape.
    #[error("{0}")]
    Malformed(String),
}

#[async_trait]
pub trait LyricsService: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Issues exactly one request for `query`.
    async fn fetch(&self, query: &SubmissionInput) -> Result<LyricsResponse, FetchError>;
}
