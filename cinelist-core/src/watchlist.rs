use cinelist_model::{ImdbId, Movie};

/// Read/append port for the durable movie collection.
///
/// The collection outlives the search workflow; the host owns it and hands
/// the workflow a view plus the ability to append. Only
/// [`SearchController::append`](crate::SearchController::append) mutates it,
/// and it does so with a single push, so no partially-updated state is ever
/// observable.
pub trait Watchlist {
    /// The accepted movies, in insertion order.
    fn movies(&self) -> &[Movie];

    /// Whether a movie with this IMDb id has already been accepted.
    fn contains(&self, id: &ImdbId) -> bool {
        self.movies().iter().any(|movie| &movie.imdb_id == id)
    }

    /// Append a movie to the end of the collection.
    fn append(&mut self, movie: Movie);
}

/// In-memory, insertion-ordered watchlist.
#[derive(Debug, Clone, Default)]
pub struct MovieList {
    movies: Vec<Movie>,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }
}

impl Watchlist for MovieList {
    fn movies(&self) -> &[Movie] {
        &self.movies
    }

    fn append(&mut self, movie: Movie) {
        self.movies.push(movie);
    }
}
