//! User-facing side effects of the client
//!
//! - [`Notifier`]: shows a transient notice (toast)
//! - [`Navigator`]: sends the user to the login boundary

use std::fmt::Debug;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Displays notices to the user
pub trait Notifier: Debug + Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Redirects to the login boundary when the session ends
pub trait Navigator: Debug + Send + Sync {
    fn to_login(&self);
}

/// Writes notices to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(notice = %notice.message, "Notice"),
            NoticeLevel::Error => tracing::warn!(notice = %notice.message, "Notice"),
        }
    }
}

/// Headless sessions have no login page
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn to_login(&self) {
        tracing::debug!("Login required, no navigator installed");
    }
}
