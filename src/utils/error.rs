//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::aggregator::NameField;
use crate::utils::config::NOT_ACCEPTABLE_MESSAGE;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use thiserror::Error;

/// Errors raised by the statistics engine
///
/// Every variant belongs to the "invalid input" category: the batch
/// cannot produce a meaningful percentage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot compute {statistic} over an empty batch of users")]
    EmptyBatch { statistic: &'static str },

    #[error("no {field} names start with a Latin letter")]
    NoLatinNames { field: NameField },
}

/// Errors that can occur while decoding a users payload
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required field: results")]
    MissingResults,

    #[error("Invalid payload format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while rendering or writing a report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to build XML: {0}")]
    XmlFailed(String),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors surfaced by the HTTP boundary
///
/// Maps every lower-level failure to a status code and a plain-text
/// body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", NOT_ACCEPTABLE_MESSAGE)]
    NotAcceptable,

    #[error(transparent)]
    Payload(#[from] ParseError),

    #[error(transparent)]
    Statistics(#[from] StatsError),

    #[error(transparent)]
    Render(#[from] OutputError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::Payload(_) | ApiError::Statistics(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Rejected request ({}): {}", status.as_u16(), self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
