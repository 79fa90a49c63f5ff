//! Error types and handling infrastructure for planview.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling in the binary.
//!
//! ## Design Principles
//!
//! - **User-visible messages**: terminal errors are rendered into the error panel,
//!   so display text doubles as UI copy
//! - **Fault isolation**: day-level failures are collected, never terminal
//! - **Consistency**: standardized Result type across all modules

use thiserror::Error;

/// The main error type for planview operations.
///
/// The first four variants are terminal for a render pass and surface as the
/// error panel. `DayRender` is collected per day and logged; the remaining days
/// are still rendered.
#[derive(Error, Debug)]
pub enum PlanviewError {
    /// Connection-level failure before an HTTP status was available
    #[error("{message}: {source}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status from the schedule endpoint.
    ///
    /// Display text mirrors the dashboard's original phrasing so the error
    /// panel always carries the numeric status code.
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },

    /// Response body was not a valid schedule payload
    #[error("failed to decode schedule payload: {message}")]
    Decode { message: String },

    /// The payload itself carried an application-level error field.
    ///
    /// Displays as the bare message, matching what the endpoint reported.
    #[error("{message}")]
    Payload { message: String },

    /// One day record in the schedule was malformed
    #[error("malformed day record: {message}")]
    DayRender { message: String },

    /// A view sink write failed
    #[error("view update failed: {message}")]
    Ui { message: String },

    /// Invalid command line arguments
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for planview operations.
pub type Result<T> = std::result::Result<T, PlanviewError>;

impl PlanviewError {
    /// Create a Network error from a reqwest error with additional context
    pub fn network(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            message: message.into(),
            source,
        }
    }

    /// Create a Transport error carrying the HTTP status code
    pub fn transport(status: u16) -> Self {
        Self::Transport { status }
    }

    /// Create a Decode error with a descriptive message
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a Payload error from the response's error field
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Create a DayRender error for a single malformed day record
    pub fn day_render(message: impl Into<String>) -> Self {
        Self::DayRender {
            message: message.into(),
        }
    }

    /// Create a Ui error for a failed sink write
    pub fn ui(message: impl Into<String>) -> Self {
        Self::Ui {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Body decode failures map onto the Decode variant
impl From<serde_json::Error> for PlanviewError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}
