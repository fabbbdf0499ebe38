//! Client-related types shared by every front end
//!
//! Request/response bodies of the auth endpoints and the token claims
//! carried in the JWT payload.

use serde::{Deserialize, Serialize};

use crate::models::AdminUser;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: i64,
    pub user: AdminUser,
}

/// `GET /admin/auth/verify`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub valid: bool,
}

/// `POST /auth/refresh-token` data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshData {
    pub token: String,
}

// =============================================================================
// Token claims
// =============================================================================

/// JWT payload as issued by the backend.
///
/// Only read on the client side, the signature is never checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry, unix seconds
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// Expired when an `exp` claim exists and lies before `now_secs`
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp < now_secs)
    }
}
