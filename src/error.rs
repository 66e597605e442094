use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode API response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The backend resolved the call but sent no usable payload.
    #[error("empty response from API")]
    EmptyResponse,

    /// Failure that carries no diagnostic text of its own.
    #[error("unknown error")]
    Unknown,
}
