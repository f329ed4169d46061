//! Provider-specific error types
//!
//! Errors that can occur while fetching a page of search results.

use thiserror::Error;

/// Errors that can occur during a provider fetch
///
/// Every variant renders to a human-readable description; that description
/// is all the orchestrator ever extracts from a failure.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The HTTP request could not be sent or completed
    #[error("Failed to reach the search API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The search API answered with a non-success HTTP status
    #[error("Search API returned error status {status}: {body}")]
    Status {
        /// HTTP status code of the response
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// The response body could not be decoded
    #[error("Failed to parse search response: {0}")]
    Decode(String),

    /// The search API reported an application-level error
    #[error("Search API reported an error: {0}")]
    Api(String),

    /// Catch-all for provider implementations that are not HTTP-based
    #[error("Search provider error: {0}")]
    Internal(#[from] anyhow::Error),
}
