//! Search result types
//!
//! Structs that mirror the records returned by the itbook.store API.

use serde::{Deserialize, Serialize};

/// A single book record returned by the search API
///
/// The orchestrator never inspects these fields; they exist for the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Book title
    pub title: String,
    /// Book subtitle (often empty)
    #[serde(default)]
    pub subtitle: String,
    /// ISBN-13 identifier
    pub isbn13: String,
    /// Display price (e.g. "$9.99")
    #[serde(default)]
    pub price: String,
    /// Cover image URL
    #[serde(default)]
    pub image: String,
    /// Detail page URL
    #[serde(default)]
    pub url: String,
}

/// One page of search results
///
/// Produced fresh per provider call; the orchestrator folds it into its
/// accumulated state and does not retain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Book records for this page, in result order
    pub books: Vec<SearchItem>,
    /// The 1-based page this result covers, as reported by the provider
    pub page: u32,
    /// Total number of matches across all pages for the keyword
    pub total: u32,
}
