//! Persisted admin session
//!
//! Token + user record kept in a [`SessionStore`]. Expiry is read from the
//! JWT payload locally; the signature is never checked on the client.

use std::io;
use std::sync::Arc;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use shared::client::{LoginData, TokenClaims};
use shared::models::AdminUser;
use shared::util::now_secs;

use crate::storage::{SessionStore, TOKEN_KEY, USER_KEY};

/// Why there is no session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonymousReason {
    /// Stored token had expired and was cleared
    Expired,
    /// Nothing (or only part of a session) stored
    NoToken,
}

/// Startup state of the session
#[derive(Debug, Clone, PartialEq)]
pub enum AuthStatus {
    Authenticated(AdminUser),
    Anonymous(AnonymousReason),
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Session handle, cheap to clone
#[derive(Debug, Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Stored token; read failures count as absent
    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session token");
                None
            }
        }
    }

    /// Stored user record; unreadable or corrupt records count as absent
    pub fn user(&self) -> Option<AdminUser> {
        let raw = match self.store.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session user");
                return None;
            }
        };
        serde_json::from_str(&raw)
            .inspect_err(|e| tracing::warn!(error = %e, "Discarding corrupt session user"))
            .ok()
    }

    /// Stores user and token from a successful login.
    ///
    /// The token goes last so a failed write never leaves a lone token.
    pub fn set(&self, data: &LoginData) -> io::Result<()> {
        let user = serde_json::to_string(&data.user)?;
        self.store.set(USER_KEY, &user)?;
        self.store.set(TOKEN_KEY, &data.token).inspect_err(|_| {
            if let Err(e) = self.store.remove(USER_KEY) {
                tracing::warn!(error = %e, "Failed to roll back session user");
            }
        })
    }

    /// Replaces the token only (refresh)
    pub fn set_token(&self, token: &str) -> io::Result<()> {
        self.store.set(TOKEN_KEY, token)
    }

    /// Removes both entries; both removals are attempted
    pub fn clear(&self) -> io::Result<()> {
        let token = self.store.remove(TOKEN_KEY);
        let user = self.store.remove(USER_KEY);
        token.and(user)
    }

    /// [`clear`](Self::clear), logging instead of failing
    pub(crate) fn clear_quietly(&self) {
        if let Err(e) = self.clear() {
            tracing::warn!(error = %e, "Failed to clear session");
        }
    }

    /// Decodes the JWT payload without verifying it
    pub fn decode_token(token: &str) -> Option<TokenClaims> {
        serde_json::from_value(Self::decode_payload(token)?).ok()
    }

    // JWT 格式: header.payload.signature
    fn decode_payload(token: &str) -> Option<serde_json::Value> {
        let payload = token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        let value: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
        value.is_object().then_some(value)
    }

    /// True when the token carries an `exp` claim in the past.
    ///
    /// Payloads that cannot be decoded have no readable expiry.
    pub fn is_expired(token: &str) -> bool {
        Self::decode_payload(token)
            .and_then(|payload| payload.get("exp")?.as_f64())
            .is_some_and(|exp| exp < now_secs() as f64)
    }

    /// Local validity check, no network.
    ///
    /// An expired token clears the whole session.
    pub fn is_authenticated(&self) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        if Self::is_expired(&token) {
            tracing::info!("Session token expired, clearing session");
            self.clear_quietly();
            return false;
        }
        true
    }

    /// Restores the session on startup.
    ///
    /// Needs both entries; a lone token or user record is not a session.
    pub fn init_auth(&self) -> AuthStatus {
        let (Some(token), Some(user)) = (self.token(), self.user()) else {
            return AuthStatus::Anonymous(AnonymousReason::NoToken);
        };
        if Self::is_expired(&token) {
            tracing::info!("Stored session expired");
            self.clear_quietly();
            return AuthStatus::Anonymous(AnonymousReason::Expired);
        }
        tracing::info!(username = %user.username, "Session restored");
        AuthStatus::Authenticated(user)
    }

    /// Stored user has an admin role
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin())
    }
}
