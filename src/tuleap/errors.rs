use thiserror::Error;

/// Errors surfaced by the tracker API client.
///
/// All of these are fatal for the current run: the tool never retries, and a
/// partially fetched artifact list is never handed to the aggregator.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("response is missing pagination header {name}")]
    MissingHeader { name: &'static str },

    #[error("pagination header {name} carries a non-numeric value {value:?}")]
    InvalidHeader { name: &'static str, value: String },

    #[error("could not decode response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
