//! Observable search state
//!
//! The snapshot published to the presentation layer after every mutation,
//! plus the pure transitions the fetch protocol applies to it.

use crate::provider::{SearchItem, SearchResult};

/// Number of items per result page, fixed by the search API
pub const PAGE_SIZE: u32 = 10;

/// Informational message recorded when a fresh search matches nothing
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Observable search state
///
/// Read-only from the presentation layer's perspective. `last_error` is only
/// ever overwritten, never cleared on the orchestrator's own initiative;
/// consumers take it via `SearchOrchestrator::take_last_error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Accumulated result records, in page order then within-page order
    pub items: Vec<SearchItem>,
    /// Whether a provider fetch is currently in flight
    pub is_loading: bool,
    /// Last failure or informational message, if any
    pub last_error: Option<String>,
    /// Whether another page exists beyond `current_page`
    pub has_next_page: bool,
    /// Total number of matches reported by the provider
    pub total: u32,
    /// The page most recently applied (1-based)
    pub current_page: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            last_error: None,
            has_next_page: true,
            total: 0,
            current_page: 1,
        }
    }
}

impl SearchState {
    /// Drop accumulated results and restore initial pagination state
    ///
    /// Leaves `is_loading` and `last_error` untouched.
    pub(crate) fn clear_results(&mut self) {
        self.items.clear();
        self.total = 0;
        self.current_page = 1;
        self.has_next_page = true;
    }

    /// Fold one successful provider page into the state
    ///
    /// Trusts the page number reported by the provider over the requested
    /// one. A fresh (non-append) page replaces the item list; an empty fresh
    /// page records the no-results message. `has_next_page` is recomputed
    /// from `total` and `current_page` and is never set anywhere else.
    pub(crate) fn apply_page(&mut self, result: SearchResult, append: bool) {
        self.total = result.total;
        self.current_page = result.page;
        if append {
            self.items.extend(result.books);
        } else {
            self.items = result.books;
            if self.items.is_empty() {
                self.last_error = Some(NO_RESULTS_MESSAGE.to_string());
            }
        }
        self.has_next_page = self.total > self.current_page * PAGE_SIZE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: u32) -> SearchItem {
        SearchItem {
            title: format!("Book {}", n),
            subtitle: String::new(),
            isbn13: format!("978{:010}", n),
            price: "$9.99".to_string(),
            image: String::new(),
            url: String::new(),
        }
    }

    fn page(first: u32, count: u32, page: u32, total: u32) -> SearchResult {
        SearchResult {
            books: (first..first + count).map(item).collect(),
            page,
            total,
        }
    }

    #[test]
    fn test_default_state() {
        let state = SearchState::default();
        assert!(state.items.is_empty());
        assert!(!state.is_loading);
        assert!(state.last_error.is_none());
        assert!(state.has_next_page);
        assert_eq!(state.total, 0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_fresh_page_replaces_items() {
        let mut state = SearchState::default();
        state.apply_page(page(1, 10, 1, 25), false);
        assert_eq!(state.items.len(), 10);

        state.apply_page(page(100, 10, 1, 40), false);
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.items[0].title, "Book 100");
        assert_eq!(state.total, 40);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut state = SearchState::default();
        state.apply_page(page(1, 10, 1, 25), false);
        state.apply_page(page(11, 10, 2, 25), true);
        assert_eq!(state.items.len(), 20);
        assert_eq!(state.items[0].title, "Book 1");
        assert_eq!(state.items[10].title, "Book 11");
        assert_eq!(state.items[19].title, "Book 20");
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_has_next_page_boundaries() {
        let mut state = SearchState::default();

        // 25 results, page 3: 25 > 30 is false
        state.apply_page(page(21, 5, 3, 25), true);
        assert!(!state.has_next_page);

        // exactly filled pages leave no remainder
        state.apply_page(page(21, 10, 3, 30), true);
        assert!(!state.has_next_page);

        // one result past the page boundary
        state.apply_page(page(21, 10, 3, 31), true);
        assert!(state.has_next_page);
    }

    #[test]
    fn test_trusts_reported_page_over_requested() {
        let mut state = SearchState::default();
        // Provider clamped the request back to page 2.
        state.apply_page(page(11, 10, 2, 20), true);
        assert_eq!(state.current_page, 2);
        assert!(!state.has_next_page);
    }

    #[test]
    fn test_empty_fresh_page_records_message() {
        let mut state = SearchState::default();
        state.apply_page(page(1, 0, 1, 0), false);
        assert!(state.items.is_empty());
        assert_eq!(state.last_error.as_deref(), Some(NO_RESULTS_MESSAGE));
        assert!(!state.has_next_page);
    }

    #[test]
    fn test_empty_append_page_records_no_message() {
        let mut state = SearchState::default();
        state.apply_page(page(1, 10, 1, 25), false);
        state.apply_page(page(11, 0, 2, 25), true);
        assert!(state.last_error.is_none());
        assert_eq!(state.items.len(), 10);
    }

    #[test]
    fn test_clear_results_leaves_loading_and_error() {
        let mut state = SearchState::default();
        state.apply_page(page(1, 10, 1, 25), false);
        state.is_loading = true;
        state.last_error = Some("boom".to_string());

        state.clear_results();
        assert!(state.items.is_empty());
        assert_eq!(state.total, 0);
        assert_eq!(state.current_page, 1);
        assert!(state.has_next_page);
        assert!(state.is_loading);
        assert_eq!(state.last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_clear_results_is_idempotent() {
        let mut state = SearchState::default();
        state.apply_page(page(1, 10, 1, 25), false);

        state.clear_results();
        let once = state.clone();
        state.clear_results();
        assert_eq!(state, once);
    }
}
