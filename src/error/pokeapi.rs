//! PokeAPI response errors.
//!
//! The remote service has no retry or backoff contract, so any non-success status surfaces
//! as one of these errors and the calling aggregator decides whether it is fatal.

use reqwest::StatusCode;
use thiserror::Error;

/// Error raised when PokeAPI answers with a non-success status code.
#[derive(Error, Debug)]
pub enum PokeApiError {
    /// The requested resource does not exist (HTTP 404).
    ///
    /// For the detail page this is the "not found" state: an unknown identifier or a
    /// Pokémon without a species record.
    #[error("PokeAPI resource not found: {url}")]
    NotFound { url: String },

    /// Any other non-success status (5xx outages, rate limiting, malformed requests).
    #[error("PokeAPI request to {url} failed with status {status}")]
    UnexpectedStatus { url: String, status: StatusCode },
}

impl PokeApiError {
    /// Classify a non-success status for the given request URL.
    pub fn from_status(url: &str, status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            Self::NotFound {
                url: url.to_string(),
            }
        } else {
            Self::UnexpectedStatus {
                url: url.to_string(),
                status,
            }
        }
    }
}
