use crate::ids::ImdbId;

/// Normalized movie entity as it lives in the watchlist.
///
/// Produced by normalizing a raw lookup payload; the image fallback and the
/// IMDb page URL template are applied before a `Movie` is constructed, so
/// every instance carries resolved, renderable URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movie {
    pub title: String,
    pub description: String,
    /// Poster URL, already resolved to the placeholder when the source had
    /// none.
    pub image_url: String,
    /// Link to the movie's IMDb page, derived from [`Movie::imdb_id`].
    pub external_page_url: String,
    /// Unique key for watchlist deduplication.
    pub imdb_id: ImdbId,
}
