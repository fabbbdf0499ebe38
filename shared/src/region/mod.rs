//! Province / city / district cascade
//!
//! The option tree is built once from static reference tables and never
//! changes afterwards. [`RegionIndex::global`] serves the bundled dataset;
//! [`RegionIndex::from_tables`] builds an index from caller-supplied tables.
//!
//! # Example
//!
//! ```
//! use shared::region::{RegionIndex, selection_to_path};
//!
//! let index = RegionIndex::global();
//! let selection = index.select(&["330000", "330100", "330106"]);
//! assert_eq!(selection.names, "浙江省 / 杭州市 / 西湖区");
//! assert_eq!(selection_to_path(&selection.into()), ["330000", "330100", "330106"]);
//! ```

mod selection;
mod tree;

pub use selection::{
    NAMES_SEPARATOR, RegionSelection, RegionValue, path_to_selection, selection_to_path,
};
pub use tree::{RegionEntry, RegionNode, RegionTables, build_tree};

use std::sync::OnceLock;
use thiserror::Error;

/// Bundled reference dataset
const BUNDLED_REGIONS: &str = include_str!("../../data/regions.json");

static GLOBAL_INDEX: OnceLock<RegionIndex> = OnceLock::new();

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("Invalid region data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// Read-only three-level region index
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    roots: Vec<RegionNode>,
}

impl RegionIndex {
    pub fn from_tables(tables: &RegionTables) -> Self {
        Self {
            roots: build_tree(tables),
        }
    }

    /// Parses tables in the `{ province, city, county }` layout
    pub fn from_json(json: &str) -> Result<Self, RegionError> {
        let tables: RegionTables = serde_json::from_str(json)?;
        Ok(Self::from_tables(&tables))
    }

    /// Like [`from_json`](Self::from_json), but degrades to an empty index
    /// when the data is unusable.
    pub fn from_json_or_empty(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Region data unavailable, serving empty options");
            Self::default()
        })
    }

    /// Process-wide index over the bundled dataset
    pub fn global() -> &'static RegionIndex {
        GLOBAL_INDEX.get_or_init(|| {
            let index = Self::from_json_or_empty(BUNDLED_REGIONS);
            tracing::debug!(levels = ?index.level_counts(), "Region index built");
            index
        })
    }

    /// Top-level options (provinces)
    pub fn options(&self) -> &[RegionNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Node count per level: `[provinces, cities, districts]`
    pub fn level_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for province in &self.roots {
            counts[0] += 1;
            for city in province.children() {
                counts[1] += 1;
                counts[2] += city.children().len();
            }
        }
        counts
    }

    /// Finds a node anywhere in the tree
    pub fn find(&self, code: &str) -> Option<&RegionNode> {
        fn walk<'a>(nodes: &'a [RegionNode], code: &str) -> Option<&'a RegionNode> {
            nodes.iter().find_map(|n| {
                if n.code == code {
                    Some(n)
                } else {
                    walk(n.children(), code)
                }
            })
        }
        walk(&self.roots, code)
    }

    /// Nodes along a code path, stopping at the first code that does not
    /// exist under its parent.
    pub fn resolve<S: AsRef<str>>(&self, codes: &[S]) -> Vec<&RegionNode> {
        let mut path = Vec::with_capacity(codes.len().min(3));
        let mut level = self.roots.as_slice();
        for code in codes.iter().take(3) {
            let Some(node) = level.iter().find(|n| n.code == code.as_ref()) else {
                break;
            };
            path.push(node);
            level = node.children();
        }
        path
    }

    /// Selection for stored codes, labeled from the tree.
    ///
    /// Only the resolvable prefix of `codes` is kept.
    pub fn select<S: AsRef<str>>(&self, codes: &[S]) -> RegionSelection {
        let path = self.resolve(codes);
        path_to_selection(&codes[..path.len()], &path)
    }
}
