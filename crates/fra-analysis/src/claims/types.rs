//! Roll-up output types.

use std::fmt;

use fra_core::types::ProgressSummary;
use serde::{Deserialize, Serialize};

/// Aggregation granularity, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyLevel {
    National,
    State,
    District,
    Block,
    Village,
}

impl HierarchyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::National => "national",
            Self::State => "state",
            Self::District => "district",
            Self::Block => "block",
            Self::Village => "village",
        }
    }

    /// The level one step down, `None` for villages.
    pub fn child(self) -> Option<Self> {
        match self {
            Self::National => Some(Self::State),
            Self::State => Some(Self::District),
            Self::District => Some(Self::Block),
            Self::Block => Some(Self::Village),
            Self::Village => None,
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress for one region, optionally with one row per child region.
///
/// Child rows never carry children of their own; `children` is `None` on
/// village-level results and on child rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionProgress {
    pub level: HierarchyLevel,
    pub name: String,
    pub data: ProgressSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RegionProgress>>,
}

impl RegionProgress {
    /// A child row (no nested children).
    pub fn leaf(level: HierarchyLevel, name: impl Into<String>, data: ProgressSummary) -> Self {
        Self {
            level,
            name: name.into(),
            data,
            children: None,
        }
    }

    /// Child rows, empty when there are none.
    pub fn child_rows(&self) -> &[RegionProgress] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Child names in output order.
    pub fn child_names(&self) -> Vec<&str> {
        self.child_rows().iter().map(|c| c.name.as_str()).collect()
    }
}
