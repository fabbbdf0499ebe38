//! Region tree construction from flat reference tables

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of a reference table (`{ id, name }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub id: String,
    pub name: String,
}

impl RegionEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Flat province / city / district reference tables.
///
/// Field names on the wire follow the `china-region-data` layout:
/// ```json
/// {
///     "province": [{ "id": "110000", "name": "北京市" }],
///     "city":     { "110000": [{ "id": "110100", "name": "市辖区" }] },
///     "county":   { "110100": [{ "id": "110101", "name": "东城区" }] }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionTables {
    /// All provinces, in display order
    #[serde(rename = "province", default)]
    pub provinces: Vec<RegionEntry>,
    /// Cities keyed by province id
    #[serde(rename = "city", default)]
    pub cities: HashMap<String, Vec<RegionEntry>>,
    /// Districts (counties) keyed by city id
    #[serde(rename = "county", default)]
    pub districts: HashMap<String, Vec<RegionEntry>>,
}

impl RegionTables {
    /// Row totals per level: `[provinces, cities, districts]`
    pub fn totals(&self) -> [usize; 3] {
        [
            self.provinces.len(),
            self.cities.values().map(Vec::len).sum(),
            self.districts.values().map(Vec::len).sum(),
        ]
    }
}

/// A node of the cascading option tree.
///
/// `children` is `None` for a leaf; an empty child list is never stored, so
/// leaf detection is by absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionNode {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RegionNode>>,
}

impl RegionNode {
    /// Creates a leaf node
    pub fn leaf(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            children: None,
        }
    }

    /// Creates a node, dropping the child list when it is empty
    pub fn with_children(
        code: impl Into<String>,
        name: impl Into<String>,
        children: Vec<RegionNode>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            children: (!children.is_empty()).then_some(children),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.name
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Child nodes (empty slice for a leaf)
    pub fn children(&self) -> &[RegionNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Direct child with the given code
    pub fn child(&self, code: &str) -> Option<&RegionNode> {
        self.children().iter().find(|c| c.code == code)
    }
}

/// Builds the province → city → district forest.
///
/// Province order follows `tables.provinces`; city and district order follows
/// the lookup lists. Cities or districts whose parent id is missing from the
/// parent level are not reachable and are ignored.
pub fn build_tree(tables: &RegionTables) -> Vec<RegionNode> {
    tables
        .provinces
        .iter()
        .map(|province| {
            let cities = tables
                .cities
                .get(&province.id)
                .map(Vec::as_slice)
                .unwrap_or(&[])
                .iter()
                .map(|city| {
                    let districts = tables
                        .districts
                        .get(&city.id)
                        .map(Vec::as_slice)
                        .unwrap_or(&[])
                        .iter()
                        .map(|d| RegionNode::leaf(&d.id, &d.name))
                        .collect();
                    RegionNode::with_children(&city.id, &city.name, districts)
                })
                .collect();
            RegionNode::with_children(&province.id, &province.name, cities)
        })
        .collect()
}
