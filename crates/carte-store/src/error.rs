use thiserror::Error;

/// Errors produced by the list store client.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level HTTP failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store or webhook answered with a non-success status. The body
    /// carries the endpoint-reported error detail.
    #[error("Remote endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// A response body could not be parsed.
    #[error("Invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL could not be built from the configuration.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// An item lookup by id matched nothing.
    #[error("Record not found")]
    NotFound,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
