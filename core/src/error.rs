//! Error types for the list-manager API client and stores.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. `Transport` exists for the host: in the
//! host-does-IO pattern the core never performs network calls itself, but
//! hosts need a variant to report calls that never reached or returned from
//! the server through the same type.
//!
//! A stale detail-load response is deliberately NOT an error — it is
//! discarded via `LoadOutcome::Stale`, never surfaced here.

use std::fmt;

/// Errors returned by `ChecklistClient` parse methods and store `settle_*`
/// methods. On any error the store that produced it has left its local state
/// at the last known-good value.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested list or item does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The request never reached the server or no response came back.
    /// Produced by hosts executing requests, not by the core itself.
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport failure: {msg}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
