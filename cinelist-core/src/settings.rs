/// Default OMDb endpoint used when `OMDB_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Lookup client settings, gathered from the environment.
///
/// There is no config file and no CLI; the two knobs the lookup needs come
/// from `OMDB_API_KEY` and (mainly for tests) `OMDB_BASE_URL`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
}

impl Settings {
    pub fn gather() -> Self {
        Self {
            api_key: std::env::var("OMDB_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OMDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_api_key(String::new())
    }
}
