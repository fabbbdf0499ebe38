//! Recommendor Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::destination::Destination;
use crate::region::RegionSelection;

/// Gender of a recommendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Recommendor entity (推荐官)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendor {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub id_number: String,
    /// Uploaded avatar file path
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub province_code: String,
    pub city_code: String,
    pub district_code: String,
    /// Formatted address, e.g. "北京市/东城区"
    pub region_address: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<Destination>,
    pub status: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_web: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_wxapp: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recommendor {
    /// Active status and credentials valid at `now`
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.status == "active" && self.valid_from < now && self.valid_until > now
    }

    /// Stored region codes in picker order
    pub fn region_codes(&self) -> Vec<String> {
        [&self.province_code, &self.city_code, &self.district_code]
            .into_iter()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect()
    }
}

/// Create / update payload.
///
/// `None` fields are omitted, so the same payload serves partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl RecommendorPayload {
    /// Copies the picked region codes and address into the payload
    pub fn with_region(mut self, selection: &RegionSelection) -> Self {
        self.province_code = selection.province_code.clone();
        self.city_code = selection.city_code.clone();
        self.district_code = selection.district_code.clone();
        let address = selection.region_address();
        self.region_address = (!address.is_empty()).then_some(address);
        self
    }
}
