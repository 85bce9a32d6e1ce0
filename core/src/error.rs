//! Error type for request dispatch.
//!
//! # Design
//! There is a single error type. HTTP status codes are never errors: a 404 or
//! 500 response still yields its body. Only failures to talk to the server
//! (bad URL, DNS, refused connection, connect timeout, broken write or read)
//! surface here, each carrying the URL and the underlying cause.

use thiserror::Error;

/// Failure to complete a request/response exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent: invalid URL, DNS failure, refused
    /// connection, connect timeout, or a failed body write.
    #[error("request to {url} failed: {source}")]
    Send {
        url: String,
        #[source]
        source: ureq::Error,
    },

    /// The response body could not be read to the end.
    #[error("reading response from {url} failed: {source}")]
    Read {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl TransportError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            TransportError::Send { url, .. } | TransportError::Read { url, .. } => url,
        }
    }
}
