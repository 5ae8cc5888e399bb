use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the hackair workspace.
///
/// Covers input validation (timestamps, ranges), the partition ceiling, transport
/// failures toward the remote measurement API, its embedded status codes, and
/// malformed payloads.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HackairError {
    /// A timestamp string did not match the expected pattern.
    #[error("invalid time format: {input:?}")]
    InvalidTimeFormat {
        /// The offending input, verbatim.
        input: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested window would split into more sub-ranges than allowed.
    #[error("interval too large: needs more than {max} sub-ranges")]
    IntervalTooLarge {
        /// Configured ceiling on the number of sub-ranges.
        max: usize,
    },

    /// Transport-level failure reaching the remote API (connect, I/O, non-2xx HTTP).
    #[error("{provider} request failed: {msg}")]
    RemoteRequestFailed {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The remote API answered with a non-success status embedded in the body.
    #[error("remote status {code}: {message}")]
    RemoteStatus {
        /// Embedded `status_code`.
        code: u16,
        /// Embedded `message`, empty when absent.
        message: String,
    },

    /// Issues with the returned data (undecodable body, non-numeric values, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },
}

impl HackairError {
    /// Helper: build an `InvalidTimeFormat` error for the given input.
    pub fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            input: input.into(),
        }
    }

    /// Helper: build a `RemoteRequestFailed` error with the provider name and message.
    pub fn remote(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::RemoteRequestFailed {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true when the caller's input is at fault (bad timestamps, oversized
    /// window, invalid arguments) rather than the remote side.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTimeFormat { .. } | Self::InvalidArg(_) | Self::IntervalTooLarge { .. }
        )
    }
}
