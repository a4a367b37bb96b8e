//! Re-exports of the collection types used across the workspace.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use std::collections::{BTreeMap, BTreeSet};
