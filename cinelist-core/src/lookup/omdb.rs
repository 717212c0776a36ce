use async_trait::async_trait;
use cinelist_model::{ImdbId, Movie, MovieQuery};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{MovieLookup, RawLookupResult};
use crate::error::{LookupError, Result};
use crate::settings::Settings;

/// Poster shown when the source payload carries no usable image.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/360x270.png?text=no%20preview";

/// IMDb title page template base; the external id is appended.
pub const IMDB_TITLE_BASE: &str = "https://www.imdb.com/title";

/// Sentinel OMDb uses for a missing poster.
const NO_POSTER: &str = "N/A";

/// Matched-movie payload as OMDb sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

/// Error-shaped payload, e.g. `{"Response":"False","Error":"Movie not found!"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNotFound {
    #[serde(rename = "Error")]
    pub error: String,
}

impl RawMovie {
    /// Map the raw payload onto the internal entity, resolving the poster
    /// fallback and deriving the IMDb page URL.
    pub fn normalize(self) -> Result<Movie> {
        let imdb_id = ImdbId::new(self.imdb_id)
            .map_err(|e| LookupError::Parse(e.to_string()))?;
        let image_url = match self.poster {
            Some(poster) if !poster.is_empty() && poster != NO_POSTER => {
                poster
            }
            _ => PLACEHOLDER_IMAGE_URL.to_string(),
        };

        Ok(Movie {
            title: self.title,
            description: self.plot,
            image_url,
            external_page_url: format!("{IMDB_TITLE_BASE}/{imdb_id}"),
            imdb_id,
        })
    }
}

/// Client for the OMDb title lookup endpoint.
///
/// Issues a single `t=<title>` request per call and hands back the raw
/// payload shape; normalization happens in the workflow that requested it.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(&settings.base_url)?,
            api_key: settings.api_key.clone(),
        })
    }

    /// Client configured from `OMDB_API_KEY` / `OMDB_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(&Settings::gather())
    }

    fn lookup_url(&self, query: &MovieQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("t", query.as_str());
        url
    }

    /// Resolve a title query to one of the two payload shapes.
    pub async fn fetch_movie(
        &self,
        query: &MovieQuery,
    ) -> Result<RawLookupResult> {
        debug!(query = %query, "issuing OMDb title lookup");

        let response = self.http.get(self.lookup_url(query)).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(LookupError::InvalidApiKey);
        }
        if !status.is_success() {
            return Err(LookupError::Api(format!(
                "unexpected status {status}"
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn fetch_movie(&self, query: &MovieQuery) -> Result<RawLookupResult> {
        OmdbClient::fetch_movie(self, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OmdbClient {
        OmdbClient::new(&Settings::with_api_key("test-key")).unwrap()
    }

    #[test]
    fn lookup_url_carries_key_and_title() {
        let url = client()
            .lookup_url(&MovieQuery::parse("Fight Club").unwrap());

        assert_eq!(url.host_str(), Some("www.omdbapi.com"));
        assert_eq!(
            url.query(),
            Some("apikey=test-key&t=Fight+Club")
        );
    }

    #[test]
    fn parses_matched_payload() {
        let payload = r#"{
            "Title": "Fight Club",
            "Year": "1999",
            "Plot": "An insomniac office worker...",
            "Poster": "https://m.media-amazon.com/images/fc.jpg",
            "imdbID": "tt0137523",
            "Response": "True"
        }"#;

        let parsed: RawLookupResult = serde_json::from_str(payload).unwrap();
        let RawLookupResult::Found(raw) = parsed else {
            panic!("expected matched payload");
        };
        assert_eq!(raw.title, "Fight Club");
        assert_eq!(raw.imdb_id, "tt0137523");
    }

    #[test]
    fn parses_error_payload() {
        let payload = r#"{"Response":"False","Error":"Movie not found!"}"#;

        let parsed: RawLookupResult = serde_json::from_str(payload).unwrap();
        let RawLookupResult::NotFound(raw) = parsed else {
            panic!("expected error payload");
        };
        assert_eq!(raw.error, "Movie not found!");
    }

    #[test]
    fn normalize_passes_poster_through() {
        let raw = RawMovie {
            title: "Fight Club".to_string(),
            plot: "An insomniac office worker...".to_string(),
            poster: Some("https://m.media-amazon.com/images/fc.jpg".to_string()),
            imdb_id: "tt0137523".to_string(),
        };

        let movie = raw.normalize().unwrap();
        assert_eq!(movie.image_url, "https://m.media-amazon.com/images/fc.jpg");
        assert_eq!(
            movie.external_page_url,
            "https://www.imdb.com/title/tt0137523"
        );
        assert_eq!(movie.imdb_id.as_str(), "tt0137523");
    }

    #[test]
    fn normalize_falls_back_on_sentinel_poster() {
        let raw = RawMovie {
            title: "Fight Club".to_string(),
            plot: String::new(),
            poster: Some("N/A".to_string()),
            imdb_id: "tt0137523".to_string(),
        };

        assert_eq!(raw.normalize().unwrap().image_url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn normalize_falls_back_on_absent_or_empty_poster() {
        let absent = RawMovie {
            title: "A".to_string(),
            plot: String::new(),
            poster: None,
            imdb_id: "tt0000001".to_string(),
        };
        let empty = RawMovie {
            title: "B".to_string(),
            plot: String::new(),
            poster: Some(String::new()),
            imdb_id: "tt0000002".to_string(),
        };

        assert_eq!(absent.normalize().unwrap().image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(empty.normalize().unwrap().image_url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn normalize_rejects_blank_id() {
        let raw = RawMovie {
            title: "A".to_string(),
            plot: String::new(),
            poster: None,
            imdb_id: "  ".to_string(),
        };

        assert!(matches!(raw.normalize(), Err(LookupError::Parse(_))));
    }
}
