//! Unified SDK error types.
//!
//! The HTTP layer reports what happened on the wire and nothing more: a status
//! error carries the backend's status code and raw body, so business-rule
//! failures (duplicate follow, bad percentage, wrong password) reach the caller
//! exactly as the backend phrased them.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// No response was received (connect failure, timeout, broken connection).
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Status {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend answered 2xx but the body did not decode.
    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl HttpError {
    /// Status code carried by a [`HttpError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body),
            #[cfg(feature = "http")]
            Self::Transport(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True for a 401: bad credentials, or a missing/expired token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl SdkError {
    /// Status code of the underlying HTTP error, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_not_found())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_unauthorized())
    }
}

/// Result type alias for SDK operations.
pub type ApiResult<T> = Result<T, SdkError>;
