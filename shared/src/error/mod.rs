//! Failure taxonomy for API calls
//!
//! - [`FailureCategory`]: classification of a failed call
//! - [`ErrorBody`]: the backend's structured failure body
//! - [`messages`]: user-facing notification texts
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorBody, FailureCategory};
//! use shared::http::StatusCode;
//!
//! let body = ErrorBody::parse(r#"{"error":"Invalid request format"}"#);
//! let category = FailureCategory::classify(
//!     StatusCode::BAD_REQUEST,
//!     body.as_ref().and_then(ErrorBody::error),
//! );
//! assert_eq!(category, FailureCategory::Rejected);
//! ```

mod category;

pub use category::FailureCategory;

use serde::{Deserialize, Serialize};

/// Structured failure body (`{ "error": "...", "details": ... }`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parses a response body; `None` unless it is a JSON object
    pub fn parse(text: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(text).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Non-empty `error` field
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// `error`, then `message`
    pub fn error_or_message(&self) -> Option<&str> {
        self.error()
            .or_else(|| self.message.as_deref().filter(|m| !m.is_empty()))
    }
}

/// User-facing notification texts (zh-CN)
pub mod messages {
    pub const SESSION_EXPIRED: &str = "登录已过期，请重新登录";
    pub const FORBIDDEN: &str = "没有权限访问";
    pub const NOT_FOUND: &str = "请求的资源不存在";
    pub const SERVER_ERROR: &str = "服务器错误，请稍后重试";
    pub const GENERIC_FAILURE: &str = "网络错误，请稍后重试";
    pub const NETWORK_UNREACHABLE: &str = "网络连接失败，请检查网络";
    pub const REQUEST_FAILED: &str = "请求失败，请稍后重试";

    pub const LOGIN_FAILED: &str = "登录失败，请检查用户名和密码";
    pub const UPLOAD_FAILED: &str = "文件上传失败";
    pub const UPLOAD_SUCCEEDED: &str = "文件上传成功";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let body = ErrorBody::parse(r#"{"error":"Database error","details":"timeout"}"#).unwrap();
        assert_eq!(body.error(), Some("Database error"));
        assert_eq!(body.details, Some(serde_json::json!("timeout")));
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(ErrorBody::parse("").is_none());
        assert!(ErrorBody::parse("<html>502 Bad Gateway</html>").is_none());
        assert!(ErrorBody::parse(r#""just a string""#).is_none());
        assert!(ErrorBody::parse("[1,2]").is_none());
    }

    #[test]
    fn test_error_or_message_fallback() {
        let body = ErrorBody::parse(r#"{"message":"File too large"}"#).unwrap();
        assert_eq!(body.error(), None);
        assert_eq!(body.error_or_message(), Some("File too large"));

        let body = ErrorBody::parse(r#"{"error":"","message":""}"#).unwrap();
        assert_eq!(body.error_or_message(), None);
    }
}
