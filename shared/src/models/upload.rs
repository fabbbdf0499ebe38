//! Upload Model

use serde::{Deserialize, Serialize};

/// Upload target, one endpoint each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// max 2MB, jpg/png/gif/webp
    Avatar,
    /// max 10MB, jpg/png/gif/webp
    Image,
    /// max 10MB
    Document,
}

impl UploadKind {
    /// Endpoint path relative to the API base
    pub fn path(&self) -> &'static str {
        match self {
            Self::Avatar => "/v1/upload/avatar",
            Self::Image => "/v1/upload/image",
            Self::Document => "/v1/upload/document",
        }
    }
}

/// Stored file returned by the upload endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub content_type: String,
    /// Absolute URL of the stored file
    pub url: String,
}
