use cinelist_model::{Movie, MovieQuery};
use tracing::{debug, warn};

use super::state::{Phase, SearchState};
use crate::error::LookupError;
use crate::lookup::RawLookupResult;
use crate::watchlist::Watchlist;

/// Sans-IO search state machine.
///
/// The lookup is the single suspension point, and it lives outside this
/// type: [`submit`](Self::submit) hands the caller the query to fetch with
/// and [`resolve`](Self::resolve) applies the settled outcome. Two in-flight
/// lookups therefore race exactly as the UI observes it: there is no
/// cancellation, and whichever outcome resolves last determines the final
/// state.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    state: SearchState,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read view for rendering.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Update the query text. Clears the error eagerly so the "no match"
    /// message disappears as soon as the user edits the input, before any
    /// new submit. Does not touch an in-flight lookup.
    pub fn change_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
        if let Phase::Errored { .. } = self.state.phase {
            let retained = self.state.take_candidate();
            self.state.phase = restored(retained);
        }
    }

    /// Begin a lookup for the current query.
    ///
    /// Returns `None` (a no-op, state untouched) when the query trims empty.
    /// Otherwise clears the error flag, enters `Loading` retaining any
    /// previewed candidate until resolution, and returns the query the
    /// caller should fetch with.
    pub fn submit(&mut self) -> Option<MovieQuery> {
        let query = MovieQuery::parse(&self.state.query)?;
        let retained = self.state.take_candidate();
        self.state.phase = Phase::Loading { retained };
        debug!(query = %query, "search submitted");
        Some(query)
    }

    /// Apply a settled lookup outcome.
    ///
    /// The loading flag clears whichever way the call settled. An
    /// error-shaped payload becomes the errored phase; a data-shaped payload
    /// is normalized into the preview candidate. A transport fault is handed
    /// back to the caller after the previous non-loading state is restored.
    pub fn resolve(
        &mut self,
        outcome: Result<RawLookupResult, LookupError>,
    ) -> Result<(), LookupError> {
        let retained = self.state.take_candidate();
        match outcome {
            Ok(RawLookupResult::Found(raw)) => match raw.normalize() {
                Ok(movie) => {
                    debug!(id = %movie.imdb_id, title = %movie.title, "lookup matched");
                    self.state.phase = Phase::Previewing { candidate: movie };
                    Ok(())
                }
                Err(e) => {
                    self.state.phase = restored(retained);
                    Err(e)
                }
            },
            Ok(RawLookupResult::NotFound(not_found)) => {
                warn!(reason = %not_found.error, "lookup had no match");
                self.state.phase = Phase::Errored { retained };
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "lookup transport failure");
                self.state.phase = restored(retained);
                Err(e)
            }
        }
    }

    /// Accept the preview candidate into the watchlist.
    ///
    /// The query and candidate clear even when nothing is committed: with no
    /// candidate, or with a watchlist entry already carrying the candidate's
    /// IMDb id, the collection is left untouched but the form still resets.
    pub fn append(&mut self, watchlist: &mut dyn Watchlist) {
        self.state.query.clear();
        let Some(movie) = self.state.take_candidate() else {
            return;
        };

        if watchlist.contains(&movie.imdb_id) {
            debug!(id = %movie.imdb_id, "movie already in watchlist");
            return;
        }

        debug!(id = %movie.imdb_id, title = %movie.title, "movie appended");
        watchlist.append(movie);
    }
}

fn restored(retained: Option<Movie>) -> Phase {
    match retained {
        Some(candidate) => Phase::Previewing { candidate },
        None => Phase::Idle,
    }
}
