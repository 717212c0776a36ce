use thiserror::Error;

/// Errors surfaced by the lookup client and the search workflow.
///
/// "No match for this title" is not an error: the service reports it as a
/// well-formed payload and the workflow surfaces it as the errored phase.
/// These variants cover the transport and contract failures underneath.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, LookupError>;
