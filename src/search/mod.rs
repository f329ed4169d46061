//! Search orchestration module
//!
//! Contains the state machine that turns keyword searches and "load more"
//! requests into provider fetches, and the observable state it publishes.

pub mod orchestrator;
pub mod session;
pub mod state;

pub use orchestrator::SearchOrchestrator;
pub use session::{Session, SessionId};
pub use state::{SearchState, NO_RESULTS_MESSAGE, PAGE_SIZE};
