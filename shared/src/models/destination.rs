//! Destination Model

use serde::{Deserialize, Deserializer, Serialize};

use super::recommendor::Recommendor;

/// Destination entity (目的地), recommended by one recommendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    pub recommendor_id: i64,
    /// Owning recommendor when the backend preloads it
    #[serde(
        default,
        deserialize_with = "preloaded_recommendor",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommendor: Option<Box<Recommendor>>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// JSON array of image URLs, stored as text
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub address: String,
    /// scenic_spot, food, accommodation, ...
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Destination {
    /// Image URLs decoded from the `image` text column.
    ///
    /// A plain (non-array) value is treated as a single URL.
    pub fn image_urls(&self) -> Vec<String> {
        if self.image.is_empty() {
            return Vec::new();
        }
        serde_json::from_str(&self.image).unwrap_or_else(|_| vec![self.image.clone()])
    }

    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

// 未预加载时后端返回零值对象 (id 0, gender "")
fn preloaded_recommendor<'de, D>(deserializer: D) -> Result<Option<Box<Recommendor>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if value.get("id").and_then(serde_json::Value::as_i64).unwrap_or(0) == 0 {
        return Ok(None);
    }
    Ok(serde_json::from_value(value)
        .inspect_err(|e| tracing::warn!(error = %e, "Ignoring unreadable preloaded recommendor"))
        .ok()
        .map(Box::new))
}

/// Create / update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestinationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DestinationPayload {
    /// Encodes image URLs into the text column format
    pub fn with_images<S: AsRef<str>>(mut self, urls: &[S]) -> Self {
        let urls: Vec<&str> = urls.iter().map(AsRef::as_ref).collect();
        self.image = serde_json::to_string(&urls).ok();
        self
    }
}
