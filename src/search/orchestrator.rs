//! Search orchestration state machine
//!
//! `SearchOrchestrator` owns all pagination state for one search surface.
//! A `search` call starts a fresh session and fetches page 1; each
//! `load_next_page` call appends the following page. State lives behind a
//! single lock, the provider call is the only suspension point, and the lock
//! is never held across it. Every fetch is tagged with its session id so a
//! response that lands after a newer session has started is discarded
//! instead of merging into the wrong result list.

use crate::provider::SearchProvider;
use crate::search::session::{Session, SessionId};
use crate::search::state::SearchState;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, warn};

/// Paginated search orchestrator
///
/// Failures never propagate out of `search`/`load_next_page`; both always
/// complete normally and report through the observable state instead.
pub struct SearchOrchestrator {
    provider: Arc<dyn SearchProvider>,
    inner: RwLock<Inner>,
    state_tx: watch::Sender<SearchState>,
}

#[derive(Debug, Default)]
struct Inner {
    session: Session,
    state: SearchState,
}

impl SearchOrchestrator {
    /// Create an orchestrator over the given provider
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        let (state_tx, _) = watch::channel(SearchState::default());
        Self {
            provider,
            inner: RwLock::new(Inner::default()),
            state_tx,
        }
    }

    /// Start a new search session for `keyword` and fetch its first page
    ///
    /// Clears accumulated results first. An empty keyword is forwarded to
    /// the provider as-is; validation is the provider's concern. If an
    /// earlier fetch is still in flight its response will be discarded when
    /// it lands, since this call supersedes its session.
    pub async fn search(&self, keyword: &str) {
        let session_id = {
            let mut inner = self.inner.write().await;
            inner.state.clear_results();
            let id = Session::generate_id();
            inner.session = Session::Active {
                keyword: keyword.to_string(),
                id: id.clone(),
            };
            inner.state.is_loading = true;
            self.publish(&inner.state);
            id
        };

        debug!(keyword = %keyword, "Starting new search session");
        self.run_fetch(keyword.to_string(), session_id, 1, false).await;
    }

    /// Fetch the page after the current one and append its results
    ///
    /// Silent no-op unless a session is active, no fetch is in flight, and
    /// more pages exist. The preconditions are checked and the loading flag
    /// raised under one lock acquisition, so a well-behaved caller cannot
    /// trigger overlapping next-page requests.
    pub async fn load_next_page(&self) {
        let (keyword, session_id, page) = {
            let mut inner = self.inner.write().await;
            if inner.state.is_loading || !inner.state.has_next_page {
                return;
            }
            let (keyword, id) = match &inner.session {
                Session::Active { keyword, id } => (keyword.clone(), id.clone()),
                Session::Idle => return,
            };
            let page = inner.state.current_page + 1;
            inner.state.is_loading = true;
            self.publish(&inner.state);
            (keyword, id, page)
        };

        self.run_fetch(keyword, session_id, page, true).await;
    }

    /// Drop all results and end the current session
    ///
    /// Restores initial pagination state without touching `is_loading` or
    /// `last_error`. Any in-flight fetch belongs to the ended session and
    /// will be discarded. Never contacts the provider.
    pub async fn clear_search_results(&self) {
        let mut inner = self.inner.write().await;
        inner.state.clear_results();
        inner.session = Session::Idle;
        self.publish(&inner.state);
    }

    /// A point-in-time snapshot of the observable state
    pub async fn state(&self) -> SearchState {
        self.inner.read().await.state.clone()
    }

    /// The keyword of the active session, if any
    pub async fn active_keyword(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .session
            .keyword()
            .map(str::to_string)
    }

    /// Consume the last failure or informational message
    ///
    /// The orchestrator never clears `last_error` on its own; this is the
    /// consume-and-reset hook for the presentation layer.
    pub async fn take_last_error(&self) -> Option<String> {
        let mut inner = self.inner.write().await;
        let message = inner.state.last_error.take();
        if message.is_some() {
            self.publish(&inner.state);
        }
        message
    }

    /// Subscribe to state snapshots
    ///
    /// A new snapshot is published after every state mutation.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to state snapshots as a `Stream`
    pub fn state_stream(&self) -> WatchStream<SearchState> {
        WatchStream::new(self.state_tx.subscribe())
    }

    // The fetch protocol shared by search and load_next_page. The session id
    // was captured when the fetch was issued; if it no longer matches when
    // the response lands, the response is stale and must not mutate anything
    // (the newer session owns the loading flag too).
    async fn run_fetch(&self, keyword: String, session_id: SessionId, page: u32, append: bool) {
        debug!(
            keyword = %keyword,
            page = page,
            append = append,
            "Requesting search page"
        );

        let outcome = self.provider.search(&keyword, page).await;

        let mut inner = self.inner.write().await;
        if inner.session.id() != Some(&session_id) {
            debug!(
                keyword = %keyword,
                page = page,
                "Discarding response from a superseded session"
            );
            return;
        }

        match outcome {
            Ok(result) => {
                debug!(
                    page = result.page,
                    total = result.total,
                    count = result.books.len(),
                    "Applying search page"
                );
                inner.state.apply_page(result, append);
            }
            Err(e) => {
                warn!(
                    error = %e,
                    keyword = %keyword,
                    page = page,
                    "Search request failed"
                );
                inner.state.last_error = Some(e.to_string());
            }
        }

        inner.state.is_loading = false;
        self.publish(&inner.state);
    }

    fn publish(&self, state: &SearchState) {
        self.state_tx.send_replace(state.clone());
    }
}
