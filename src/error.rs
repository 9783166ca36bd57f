//! Unified error types for the content generation service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Unified error type for the content generation service.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Brand registry error.
    #[error("brand error: {0}")]
    Brand(#[from] BrandError),

    /// Content generation error.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Calendar planning error.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Brand profile and registry errors.
#[derive(Error, Debug)]
pub enum BrandError {
    /// No brand registered under the given name.
    #[error("brand '{name}' not found, create it first")]
    NotFound {
        /// The missing brand name.
        name: String,
    },

    /// A brand with this name already exists.
    #[error("brand '{name}' already exists")]
    Duplicate {
        /// The conflicting brand name.
        name: String,
    },

    /// Profile fields failed validation.
    #[error("invalid brand profile: {0}")]
    InvalidProfile(String),
}

/// Content generation errors.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Topic is empty or whitespace.
    #[error("topic must not be empty")]
    EmptyTopic,

    /// Requested slide count is outside the supported range.
    #[error("invalid slide count {requested}: must be between {min} and {max}")]
    InvalidSlideCount {
        /// Requested slide count.
        requested: usize,
        /// Minimum supported slides.
        min: usize,
        /// Maximum supported slides.
        max: usize,
    },

    /// Unknown export format.
    #[error("unknown export format '{0}', expected json, caption, or slides")]
    UnknownExportFormat(String),

    /// Performance analysis was asked for an empty history.
    #[error("no content history provided")]
    EmptyHistory,
}

/// Content calendar errors.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Week count is out of range.
    #[error("invalid weeks {requested}: must be between 1 and {max}")]
    InvalidWeeks {
        /// Requested week count.
        requested: u32,
        /// Maximum supported weeks.
        max: u32,
    },

    /// Posts per week is out of range.
    #[error("invalid posts per week {requested}: must be between 1 and {max}")]
    InvalidPostsPerWeek {
        /// Requested posts per week.
        requested: u32,
        /// Maximum posts per week.
        max: u32,
    },

    /// Date arithmetic or formatting failed.
    #[error("date formatting failed: {0}")]
    DateFormat(String),
}

impl ForgeError {
    /// HTTP status code this error maps to.
    fn status_code(&self) -> StatusCode {
        match self {
            ForgeError::Brand(BrandError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ForgeError::Brand(BrandError::Duplicate { .. }) => StatusCode::CONFLICT,
            ForgeError::Brand(BrandError::InvalidProfile(_)) => StatusCode::BAD_REQUEST,
            ForgeError::Content(_) | ForgeError::Calendar(_) => StatusCode::BAD_REQUEST,
            ForgeError::Config(_) | ForgeError::Json(_) | ForgeError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ForgeError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            success: bool,
            error: String,
        }

        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ForgeError>;
