//! External movie-metadata lookup.
//!
//! [`OmdbClient`] is the production implementation; [`MovieLookup`] is the
//! seam the search workflow is driven through so tests can substitute a
//! scripted lookup.

mod omdb;

pub use omdb::{
    OmdbClient, RawMovie, RawNotFound, IMDB_TITLE_BASE,
    PLACEHOLDER_IMAGE_URL,
};

use async_trait::async_trait;
use cinelist_model::MovieQuery;

use crate::error::Result;

/// One lookup response: either a matched movie payload or the service's
/// "no match" marker. Both are success at the transport level.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum RawLookupResult {
    /// The service matched the title.
    Found(RawMovie),
    /// The service had no match for the title.
    NotFound(RawNotFound),
}

/// Seam over the external lookup service.
///
/// Exactly one request per call: no retries, no timeout, no caching. The
/// caller guarantees the query is non-blank by construction of
/// [`MovieQuery`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieLookup: Send + Sync {
    async fn fetch_movie(&self, query: &MovieQuery) -> Result<RawLookupResult>;
}
