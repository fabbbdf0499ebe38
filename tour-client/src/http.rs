//! HTTP client for the tourism backend
//!
//! Every request goes through the same interception:
//! - request: `Authorization: Bearer <token>` when a token is stored
//! - response: failures are classified, notified once and returned as `Err`;
//!   a 401 additionally ends the session and redirects to login

use std::fmt;
use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ErrorBody;

use crate::hooks::{LogNotifier, Navigator, NoopNavigator, Notice, Notifier};
use crate::session::SessionManager;
use crate::storage::{FileStore, SessionStore};
use crate::{ClientConfig, ClientError, ClientResult};

/// Raw outcome of a request that got a response
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub text: String,
}

impl RawResponse {
    pub fn error_body(&self) -> Option<ErrorBody> {
        ErrorBody::parse(&self.text)
    }

    /// Decodes a success body, or classifies the failure
    pub fn into_result<T: DeserializeOwned>(self) -> ClientResult<T> {
        if !self.status.is_success() {
            return Err(ClientError::from_response(
                self.status,
                self.error_body().as_ref(),
            ));
        }
        serde_json::from_str(&self.text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

/// Authenticated API client, cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionManager,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with a file-backed session, logging notifier and no navigator
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: SessionManager::new(Arc::new(FileStore::new(&config.storage_dir))),
            notifier: Arc::new(LogNotifier),
            navigator: Arc::new(NoopNavigator),
        })
    }

    /// Replace the session store
    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session = SessionManager::new(store);
        self
    }

    /// Replace the notifier
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the navigator
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request; send it with [`execute`](Self::execute)
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    // ========== Interception ==========

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Sends with the bearer token attached, no failure handling
    pub(crate) async fn execute_raw(&self, request: RequestBuilder) -> ClientResult<RawResponse> {
        let request = self.authorize(request).build()?;
        let (method, url) = (request.method().clone(), request.url().clone());
        tracing::debug!(%method, %url, "Sending request");

        let response = self.client.execute(request).await.inspect_err(|e| {
            tracing::debug!(%method, %url, error = %e, "No response");
        })?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%method, %url, status = status.as_u16(), "Response received");
        Ok(RawResponse { status, text })
    }

    /// Sends a request through the response interceptor.
    ///
    /// `context` replaces the generic failure text for unclassified failures.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: Option<&str>,
    ) -> ClientResult<T> {
        let result = match self.execute_raw(request).await {
            Ok(raw) => raw.into_result(),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            self.intercept(e, context);
        }
        result
    }

    fn intercept(&self, error: &ClientError, context: Option<&str>) {
        let category = error.category();
        tracing::warn!(
            category = category.name(),
            status = error.status().map(|s| s.as_u16()),
            error = %error,
            "Request failed"
        );
        self.notify_error(error.user_message(context));
        if category.ends_session() {
            self.end_session();
        }
    }

    /// Server rejected the session: clear it and go to login
    pub(crate) fn end_session(&self) {
        tracing::info!("Session rejected by server, logging out");
        self.session.clear_quietly();
        self.navigator.to_login();
    }

    pub(crate) fn notify_success(&self, message: &str) {
        self.notifier.notify(Notice::success(message));
    }

    pub(crate) fn notify_error(&self, message: &str) {
        self.notifier.notify(Notice::error(message));
    }

    pub(crate) fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    // ========== Convenience ==========

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path), None).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::POST, path).json(body), None)
            .await
    }
}
