//! # Error Types
//!
//! Queuing actions never fails. Only the two exchanges with the print service
//! and the surrounding configuration can.
//!
//! A failed exchange is reported uniformly: a refused connection and an HTTP
//! 500 both surface as [`RelayError::PrintFailed`] with the message
//! `Failed to print`. What actually went wrong is kept as the error's
//! [`source`](std::error::Error::source) for diagnostics.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for thermal-relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    /// Submitting the action queue failed
    #[error("Failed to print")]
    PrintFailed(#[source] ServiceFailure),

    /// Fetching the printer list failed
    #[error("Failed getting printer list")]
    PrinterListFailed(#[source] ServiceFailure),

    /// Invalid endpoint or environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why an exchange with the print service failed.
#[derive(Debug, Error)]
pub enum ServiceFailure {
    /// The service could not be reached, or its response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("print service responded with HTTP {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, RelayError>;
