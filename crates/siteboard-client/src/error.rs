//! Fetch failure classification.

use std::fmt;

use thiserror::Error;

pub use reqwest::StatusCode;

/// Broad class of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The server answered with a non-success status.
    Remote,
    /// The request went out but no response came back.
    Connectivity,
    /// Anything else, e.g. a malformed body.
    Unknown,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Connectivity => write!(f, "connectivity"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A failed fetch against the report API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server responded with a non-2xx status.
    #[error("{endpoint} responded with {status}")]
    Status {
        /// Endpoint that was requested.
        endpoint: String,
        /// Status the server returned.
        status: StatusCode,
    },

    /// No response was received.
    #[error("no response from {base}: {source}")]
    Connect {
        /// Configured base endpoint.
        base: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// Any other failure.
    #[error("{message}")]
    Other {
        /// Description of the failure.
        message: String,
    },
}

impl FetchError {
    /// Classifies a transport error raised while requesting `endpoint`.
    pub(crate) fn from_transport(base: &str, endpoint: &str, err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status {
                endpoint: endpoint.to_owned(),
                status,
            };
        }
        if err.is_connect() || err.is_timeout() || err.is_request() {
            return Self::Connect {
                base: base.to_owned(),
                source: err,
            };
        }
        Self::Other {
            message: format!("request to {endpoint} failed: {err}"),
        }
    }

    /// Class of this failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Status { .. } => FailureKind::Remote,
            Self::Connect { .. } => FailureKind::Connectivity,
            Self::Other { .. } => FailureKind::Unknown,
        }
    }

    /// Message shown on the dashboard in place of content.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, .. } => format!(
                "Backend error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )
            .trim_end()
            .to_owned(),
            Self::Connect { base, .. } => format!(
                "Network Error: Could not connect to the backend at {base}. \
                 Is it running? Check your network connection."
            ),
            Self::Other { message } => format!("Failed to fetch data: {message}"),
        }
    }
}
