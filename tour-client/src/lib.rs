//! Tour Client - HTTP client for the tourism recommender backend
//!
//! Bearer-token session, response interception and typed wrappers for the
//! auth, recommendor, destination and upload endpoints.

pub mod api;
pub mod config;
pub mod error;
pub mod hooks;
pub mod http;
pub mod session;
pub mod storage;

pub use api::LoginOutcome;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use hooks::{LogNotifier, Navigator, NoopNavigator, Notice, NoticeLevel, Notifier};
pub use http::ApiClient;
pub use session::{AnonymousReason, AuthStatus, SessionManager};
pub use storage::{FileStore, MemoryStore, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{LoginData, TokenClaims};
pub use shared::models::{AdminUser, Destination, Recommendor, UploadedFile};
pub use shared::region::{RegionIndex, RegionSelection};
pub use shared::{ListQuery, Paginated};
