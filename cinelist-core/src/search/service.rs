use std::fmt;
use std::sync::Arc;

use super::controller::SearchController;
use super::state::SearchState;
use crate::error::Result;
use crate::lookup::MovieLookup;
use crate::watchlist::Watchlist;

/// Controller wired to a lookup client.
///
/// Convenience layer for hosts that drive the workflow one event at a time
/// and do not need the submit/resolve split: `submit` performs the fetch
/// inline and applies the outcome before returning.
pub struct SearchWorkflow {
    lookup: Arc<dyn MovieLookup>,
    controller: SearchController,
}

impl SearchWorkflow {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self {
            lookup,
            controller: SearchController::new(),
        }
    }

    /// Read view for rendering.
    pub fn state(&self) -> &SearchState {
        self.controller.state()
    }

    /// See [`SearchController::change_query`].
    pub fn change_query(&mut self, text: impl Into<String>) {
        self.controller.change_query(text);
    }

    /// Submit the current query: validate, fetch, normalize, preview.
    ///
    /// A blank query is a silent no-op. A transport fault propagates after
    /// the loading flag has cleared.
    pub async fn submit(&mut self) -> Result<()> {
        let Some(query) = self.controller.submit() else {
            return Ok(());
        };
        let outcome = self.lookup.fetch_movie(&query).await;
        self.controller.resolve(outcome)
    }

    /// See [`SearchController::append`].
    pub fn append(&mut self, watchlist: &mut dyn Watchlist) {
        self.controller.append(watchlist);
    }
}

impl fmt::Debug for SearchWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchWorkflow")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}
