//! Conversion between a picked code path and a labeled address

use serde::{Deserialize, Serialize};

use super::tree::RegionNode;

/// Separator used for the human-readable `names` field
pub const NAMES_SEPARATOR: &str = " / ";

/// Structured address produced by the cascading picker.
///
/// Levels the user did not reach are `None`, so province-only and
/// province+city selections are both valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSelection {
    #[serde(default, alias = "province_code")]
    pub province_code: Option<String>,
    #[serde(default, alias = "province_name")]
    pub province_name: Option<String>,
    #[serde(default, alias = "city_code")]
    pub city_code: Option<String>,
    #[serde(default, alias = "city_name")]
    pub city_name: Option<String>,
    #[serde(default, alias = "district_code")]
    pub district_code: Option<String>,
    #[serde(default, alias = "district_name")]
    pub district_name: Option<String>,
    /// Picked codes, at most three
    #[serde(default)]
    pub codes: Vec<String>,
    /// Picked labels joined with `" / "`
    #[serde(default)]
    pub names: String,
}

impl RegionSelection {
    /// Ordered code path with absent or empty levels dropped
    pub fn to_path(&self) -> Vec<String> {
        [&self.province_code, &self.city_code, &self.district_code]
            .into_iter()
            .flatten()
            .filter(|code| !code.is_empty())
            .cloned()
            .collect()
    }

    /// Number of levels picked (0..=3)
    pub fn depth(&self) -> usize {
        self.to_path().len()
    }

    /// Address string stored by the backend (`"浙江省/杭州市/西湖区"`)
    pub fn region_address(&self) -> String {
        [&self.province_name, &self.city_name, &self.district_name]
            .into_iter()
            .flatten()
            .filter(|name| !name.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// A stored picker value: either the raw code array or a full selection.
///
/// Forms persist one shape or the other; both deserialize transparently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionValue {
    Codes(Vec<String>),
    Selection(RegionSelection),
}

impl From<Vec<String>> for RegionValue {
    fn from(codes: Vec<String>) -> Self {
        Self::Codes(codes)
    }
}

impl From<&[&str]> for RegionValue {
    fn from(codes: &[&str]) -> Self {
        Self::Codes(codes.iter().map(|c| c.to_string()).collect())
    }
}

impl From<RegionSelection> for RegionValue {
    fn from(selection: RegionSelection) -> Self {
        Self::Selection(selection)
    }
}

/// Builds a [`RegionSelection`] from the picked codes and the matching nodes.
///
/// `labeled_path[i]` must be the node for `codes[i]`. Levels beyond either
/// slice stay `None`.
pub fn path_to_selection<S: AsRef<str>>(
    codes: &[S],
    labeled_path: &[&RegionNode],
) -> RegionSelection {
    let code_at = |i: usize| codes.get(i).map(|c| c.as_ref().to_string());
    let name_at = |i: usize| labeled_path.get(i).map(|n| n.label().to_string());

    RegionSelection {
        province_code: code_at(0),
        province_name: name_at(0),
        city_code: code_at(1),
        city_name: name_at(1),
        district_code: code_at(2),
        district_name: name_at(2),
        codes: codes.iter().take(3).map(|c| c.as_ref().to_string()).collect(),
        names: labeled_path
            .iter()
            .map(|n| n.label())
            .collect::<Vec<_>>()
            .join(NAMES_SEPARATOR),
    }
}

/// Inverse of [`path_to_selection`]: the ordered code path of a stored value.
///
/// A raw code array is returned unchanged.
pub fn selection_to_path(value: &RegionValue) -> Vec<String> {
    match value {
        RegionValue::Codes(codes) => codes.clone(),
        RegionValue::Selection(selection) => selection.to_path(),
    }
}
