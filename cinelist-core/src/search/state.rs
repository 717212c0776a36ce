use cinelist_model::Movie;

/// Workflow phase as a tagged variant.
///
/// The retained movie rides along in `Loading` and `Errored` so the host can
/// keep showing the previous preview while a re-submit is in flight, or next
/// to the "no match" message, without ever representing loading and error at
/// the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    /// Nothing fetched, nothing in flight.
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading { retained: Option<Movie> },
    /// The last lookup produced a candidate awaiting accept/discard.
    Previewing { candidate: Movie },
    /// The last lookup had no match.
    Errored { retained: Option<Movie> },
}

/// Everything a stateless view needs to render the search form: the query
/// text, the loading and error flags, and the preview candidate.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub(crate) query: String,
    pub(crate) phase: Phase,
}

impl SearchState {
    /// Current query text, exactly as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self.phase, Phase::Errored { .. })
    }

    /// The movie the host should render as the preview, if any.
    pub fn candidate(&self) -> Option<&Movie> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Previewing { candidate } => Some(candidate),
            Phase::Loading { retained } | Phase::Errored { retained } => {
                retained.as_ref()
            }
        }
    }

    /// Pull the visible candidate out, leaving the phase `Idle`.
    pub(crate) fn take_candidate(&mut self) -> Option<Movie> {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => None,
            Phase::Previewing { candidate } => Some(candidate),
            Phase::Loading { retained } | Phase::Errored { retained } => {
                retained
            }
        }
    }
}
