//! Search provider capability
//!
//! Defines the seam the orchestrator consumes: a capability that maps a
//! keyword and page number to one page of results, or fails. `ItBookClient`
//! is the HTTP implementation shipped with the crate; the orchestrator only
//! ever depends on the trait.

pub mod error;
pub mod itbook;
pub mod types;

pub use error::ProviderError;
pub use itbook::ItBookClient;
pub use types::{SearchItem, SearchResult};

use async_trait::async_trait;

/// Capability that produces one page of search results for a keyword
///
/// Implementations own transport concerns such as timeouts. The orchestrator
/// requires nothing of a failure beyond a human-readable description.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Fetch the given 1-based result page for `keyword`
    ///
    /// Keyword validation is the provider's concern; the orchestrator
    /// forwards even an empty keyword untouched.
    async fn search(&self, keyword: &str, page: u32) -> Result<SearchResult, ProviderError>;
}
