//! Client error types

use reqwest::StatusCode;
use shared::error::messages;
use shared::{ErrorBody, FailureCategory};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response (connect failure, timeout, broken body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 401, the session is over
    #[error("Authentication required")]
    Unauthorized,

    /// 403
    #[error("Permission denied")]
    Forbidden,

    /// 404
    #[error("Not found")]
    NotFound,

    /// 5xx
    #[error("Server error: {status}")]
    Server { status: StatusCode },

    /// Other status with a structured `error` body
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// Other status without a usable body
    #[error("Request failed: {status}")]
    Unknown { status: StatusCode },

    /// Success status but the body is not what the endpoint documents
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session storage I/O error
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Classifies a non-success response
    pub fn from_response(status: StatusCode, body: Option<&ErrorBody>) -> Self {
        let body_error = body.and_then(ErrorBody::error);
        match FailureCategory::classify(status, body_error) {
            FailureCategory::Unauthorized => Self::Unauthorized,
            FailureCategory::Forbidden => Self::Forbidden,
            FailureCategory::NotFound => Self::NotFound,
            FailureCategory::Server => Self::Server { status },
            FailureCategory::Rejected => Self::Rejected {
                status,
                message: body_error.unwrap_or_default().to_string(),
            },
            FailureCategory::Network | FailureCategory::Unknown => Self::Unknown { status },
        }
    }

    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Network(_) => FailureCategory::Network,
            Self::Unauthorized => FailureCategory::Unauthorized,
            Self::Forbidden => FailureCategory::Forbidden,
            Self::NotFound => FailureCategory::NotFound,
            Self::Server { .. } => FailureCategory::Server,
            Self::Rejected { .. } => FailureCategory::Rejected,
            Self::Unknown { .. }
            | Self::InvalidResponse(_)
            | Self::Serialization(_)
            | Self::Storage(_)
            | Self::Config(_) => FailureCategory::Unknown,
        }
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden => Some(StatusCode::FORBIDDEN),
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            Self::Server { status } | Self::Rejected { status, .. } | Self::Unknown { status } => {
                Some(*status)
            }
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Text shown to the user for this failure.
    ///
    /// `fallback` replaces the generic text of unclassified failures.
    pub fn user_message<'a>(&'a self, fallback: Option<&'a str>) -> &'a str {
        match self {
            Self::Rejected { message, .. } => message.as_str(),
            // request never left the client
            Self::Network(e) if e.is_builder() => messages::REQUEST_FAILED,
            Self::Serialization(_) | Self::Config(_) => messages::REQUEST_FAILED,
            _ => match self.category() {
                FailureCategory::Unknown => fallback.unwrap_or(messages::GENERIC_FAILURE),
                category => category.user_message(),
            },
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
