//! Failure category classification

use http::StatusCode;
use serde::{Deserialize, Serialize};

use super::messages;

/// Failure category of an API call.
///
/// Determined from the HTTP status and, for client errors, from whether the
/// body carries a structured `error` field:
/// - no response: [`Network`](Self::Network)
/// - 401: [`Unauthorized`](Self::Unauthorized)
/// - 403: [`Forbidden`](Self::Forbidden)
/// - 404: [`NotFound`](Self::NotFound)
/// - 5xx: [`Server`](Self::Server)
/// - other with `error` body: [`Rejected`](Self::Rejected)
/// - anything else: [`Unknown`](Self::Unknown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// No response received
    Network,
    /// Authentication failed or session expired (401)
    Unauthorized,
    /// Authorization failed (403)
    Forbidden,
    /// Resource missing (404)
    NotFound,
    /// Server failure (>= 500)
    Server,
    /// Validation or business failure with a structured body
    Rejected,
    /// Anything else
    Unknown,
}

impl FailureCategory {
    /// Classifies a non-success response
    pub fn classify(status: StatusCode, body_error: Option<&str>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            s if s.is_server_error() || s.as_u16() > 599 => Self::Server,
            _ if body_error.is_some_and(|e| !e.is_empty()) => Self::Rejected,
            _ => Self::Unknown,
        }
    }

    /// Whether this failure tears down the local session
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Fixed user-facing text.
    ///
    /// [`Rejected`](Self::Rejected) failures show the server's message
    /// instead; the text here is only its fallback.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network => messages::NETWORK_UNREACHABLE,
            Self::Unauthorized => messages::SESSION_EXPIRED,
            Self::Forbidden => messages::FORBIDDEN,
            Self::NotFound => messages::NOT_FOUND,
            Self::Server => messages::SERVER_ERROR,
            Self::Rejected | Self::Unknown => messages::GENERIC_FAILURE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Server => "server",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
