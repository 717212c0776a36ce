//! Search workflow: the state machine between user input, the lookup
//! client, and the watchlist.

mod controller;
mod service;
mod state;

pub use controller::SearchController;
pub use service::SearchWorkflow;
pub use state::{Phase, SearchState};
