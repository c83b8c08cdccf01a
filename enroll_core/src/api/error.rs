use reqwest::StatusCode;
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We encountered a transport-level error, for example if the server
    /// was unreachable or the connection dropped mid-request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status without a body we could
    /// interpret.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// The server turned the request down and said why.
    #[error("{}", .0.join(", "))]
    Rejected(Vec<String>),
}
