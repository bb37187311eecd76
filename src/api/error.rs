//! Failure taxonomy for one counting call.
//!
//! Every variant collapses into the same fallback presentation at the
//! component boundary; the variants exist for the logs.

use thiserror::Error;

/// Errors that can occur during a counting call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, connection failure, or transport timeout.
    #[error("Transport failure: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint reachable but returned a non-success status.
    #[error("Service returned status {status}")]
    Service { status: u16 },

    /// Response body was not a usable count.
    #[error("Protocol violation: {detail}")]
    Protocol { detail: String },
}

impl ApiError {
    /// Stable identifier for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport_error",
            ApiError::Service { .. } => "service_error",
            ApiError::Protocol { .. } => "protocol_error",
        }
    }
}
