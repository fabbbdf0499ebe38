//! Upload API
//!
//! Multipart POST with a single `file` field. Uploads report their own
//! outcome: failures prefer the body's `error`, then its `message`. A 401
//! still ends the session.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use shared::Envelope;
use shared::error::messages;
use shared::models::{UploadKind, UploadedFile};

use crate::{ApiClient, ClientError, ClientResult};

/// Multipart form field name
pub const FILE_FIELD: &str = "file";

/// File upload endpoints
#[derive(Debug, Clone, Copy)]
pub struct Uploads<'a> {
    client: &'a ApiClient,
}

impl<'a> Uploads<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// max 2MB
    pub async fn avatar(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<UploadedFile> {
        self.upload(UploadKind::Avatar, file_name, bytes).await
    }

    pub async fn image(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<UploadedFile> {
        self.upload(UploadKind::Image, file_name, bytes).await
    }

    pub async fn document(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<UploadedFile> {
        self.upload(UploadKind::Document, file_name, bytes).await
    }

    pub async fn upload(
        &self,
        kind: UploadKind,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<UploadedFile> {
        let size = bytes.len();
        let form = Form::new().part(FILE_FIELD, Part::bytes(bytes).file_name(file_name.to_string()));
        let request = self.client.request(Method::POST, kind.path()).multipart(form);

        let result = match self.client.execute_raw(request).await {
            Ok(raw) if raw.status.is_success() => {
                serde_json::from_str::<Envelope<UploadedFile>>(&raw.text)
                    .map_err(|e| ClientError::InvalidResponse(e.to_string()))
                    .and_then(|env| {
                        env.data.ok_or_else(|| {
                            ClientError::InvalidResponse("upload response carries no data".into())
                        })
                    })
                    .map_err(|e| (e, None))
            }
            Ok(raw) => {
                let body = raw.error_body();
                let message = body
                    .as_ref()
                    .and_then(|b| b.error_or_message())
                    .map(str::to_string);
                Err((ClientError::from_response(raw.status, body.as_ref()), message))
            }
            Err(e) => Err((e, None)),
        };

        match result {
            Ok(file) => {
                tracing::info!(file = %file.file_path, size, "File uploaded");
                self.client.notify_success(messages::UPLOAD_SUCCEEDED);
                Ok(file)
            }
            Err((error, message)) => {
                tracing::warn!(%file_name, error = %error, "Upload failed");
                self.client
                    .notify_error(message.as_deref().unwrap_or(messages::UPLOAD_FAILED));
                if error.category().ends_session() {
                    self.client.end_session();
                }
                Err(error)
            }
        }
    }
}
