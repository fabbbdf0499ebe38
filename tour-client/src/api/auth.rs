//! Auth API
//!
//! Login and logout handle their own failures: a rejected login is an
//! expected outcome, and logout must end the local session either way.

use reqwest::Method;
use shared::Envelope;
use shared::client::{LoginData, LoginRequest, RefreshData, VerifyResponse};
use shared::error::messages;
use shared::models::AdminUser;

use crate::{ApiClient, ClientResult};

/// Result of a login attempt
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Token and user are stored
    Success(LoginData),
    /// Rejected; `message` has already been shown
    Failure { message: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl ApiClient {
    /// Logs in and persists the session.
    ///
    /// Only local storage failures are returned as `Err`.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginOutcome> {
        let request = self
            .request(Method::POST, "/auth/login")
            .json(&LoginRequest::new(username, password));

        let message = match self.execute_raw(request).await {
            Ok(raw) if raw.status.is_success() => {
                match serde_json::from_str::<Envelope<LoginData>>(&raw.text) {
                    Ok(Envelope { data: Some(data), .. }) => {
                        self.session().set(&data)?;
                        tracing::info!(username = %data.user.username, "Logged in");
                        return Ok(LoginOutcome::Success(data));
                    }
                    Ok(_) => {
                        tracing::warn!("Login response carries no data");
                        messages::LOGIN_FAILED.to_string()
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Invalid login response");
                        messages::LOGIN_FAILED.to_string()
                    }
                }
            }
            Ok(raw) => {
                tracing::warn!(%username, status = raw.status.as_u16(), "Login rejected");
                raw.error_body()
                    .and_then(|body| body.error().map(str::to_string))
                    .unwrap_or_else(|| messages::LOGIN_FAILED.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login request failed");
                messages::LOGIN_FAILED.to_string()
            }
        };

        self.notify_error(&message);
        Ok(LoginOutcome::Failure { message })
    }

    /// Ends the session. The server call is best-effort; local state is
    /// always cleared and the navigator always fires.
    pub async fn logout(&self) -> ClientResult<()> {
        match self.execute_raw(self.request(Method::POST, "/admin/auth/logout")).await {
            Ok(raw) if raw.status.is_success() => {}
            Ok(raw) => tracing::warn!(status = raw.status.as_u16(), "Logout rejected by server"),
            Err(e) => tracing::warn!(error = %e, "Logout request failed"),
        }

        let cleared = self.session().clear();
        tracing::info!("Logged out");
        self.navigator().to_login();
        cleared.map_err(Into::into)
    }

    /// Local validity check, see [`SessionManager::is_authenticated`](crate::SessionManager::is_authenticated)
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    /// Stored user has an admin role
    pub fn is_admin(&self) -> bool {
        self.session().is_admin()
    }

    /// Asks the server whether the stored token is still valid
    pub async fn verify_token(&self) -> bool {
        if self.session().token().is_none() {
            return false;
        }
        self.execute::<VerifyResponse>(self.request(Method::GET, "/admin/auth/verify"), None)
            .await
            .is_ok_and(|v| v.valid)
    }

    /// Exchanges the token for a fresh one; only the token entry changes
    pub async fn refresh_token(&self) -> Option<String> {
        let envelope: Envelope<RefreshData> = self
            .execute(self.request(Method::POST, "/auth/refresh-token"), None)
            .await
            .ok()?;
        let Some(RefreshData { token }) = envelope.data else {
            tracing::warn!("Refresh response carries no token");
            return None;
        };
        if let Err(e) = self.session().set_token(&token) {
            tracing::warn!(error = %e, "Failed to store refreshed token");
            return None;
        }
        tracing::info!("Token refreshed");
        Some(token)
    }

    /// Fetches the logged-in user from the server
    pub async fn current_user(&self) -> Option<AdminUser> {
        self.session().token()?;
        let envelope: Envelope<AdminUser> = self
            .execute(self.request(Method::GET, "/auth/me"), None)
            .await
            .ok()?;
        envelope.data
    }
}
