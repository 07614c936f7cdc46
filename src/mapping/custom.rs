//! User-supplied mapping overrides.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::tree::MapNode;

/// A flat {romaji-or-kana string → value} override applied on top of a base
/// mapping tree. The merge always works on a clone of the base, so distinct
/// overrides never alias shared state and the cached base trees stay
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomMapping {
    entries: BTreeMap<String, String>,
}

impl CustomMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the override trie for this mapping.
    pub(crate) fn to_tree(&self) -> MapNode {
        let mut root = MapNode::empty();
        for (key, value) in &self.entries {
            root.insert(key, value.clone());
        }
        root
    }

    /// Clones `base` and grafts the override onto it, with override
    /// precedence at every depth.
    pub(crate) fn merge_into(&self, base: &MapNode) -> MapNode {
        let mut merged = base.clone();
        merged.merge_from(&self.to_tree());
        merged
    }

    /// Stable identity used as part of the tree-cache key. Entries are
    /// ordered (BTreeMap), so equal mappings hash equal.
    pub(crate) fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for (key, value) in &self.entries {
            key.hash(&mut hasher);
            value.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CustomMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CustomMapping {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
