//! Search session tracking
//!
//! A session spans from one `search` call to the next `search` or
//! `clear_search_results` call. Fetches are tagged with the session id at
//! issue time so responses that outlive their session can be recognized and
//! dropped instead of corrupting a newer session's results.

use uuid::Uuid;

/// Unique identifier for a search session
pub type SessionId = String;

/// The keyword (if any) the orchestrator is currently searching for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No search has been issued, or results were cleared
    #[default]
    Idle,
    /// A keyword search is in progress or settled
    Active {
        /// The user-supplied keyword driving all provider queries
        keyword: String,
        /// Tag compared against in-flight fetches; a mismatch marks a
        /// response as stale
        id: SessionId,
    },
}

impl Session {
    /// Generate a new unique session id
    /// Uses UUID v4 for uniqueness
    pub fn generate_id() -> SessionId {
        Uuid::new_v4().to_string()
    }

    /// The active keyword, if a session is in progress
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Session::Idle => None,
            Session::Active { keyword, .. } => Some(keyword),
        }
    }

    /// The active session id, if a session is in progress
    pub fn id(&self) -> Option<&SessionId> {
        match self {
            Session::Idle => None,
            Session::Active { id, .. } => Some(id),
        }
    }

    /// Whether a search session is currently active
    pub fn is_active(&self) -> bool {
        matches!(self, Session::Active { .. })
    }
}
