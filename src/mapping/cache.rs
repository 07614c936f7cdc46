//! Process-wide memo for built mapping trees.
//!
//! Trees are expensive to build and immutable once built; they are cached
//! behind `Arc` keyed by (direction, scheme, obsolete-kana flag, custom
//! mapping identity). Concurrent first access may build the same tree twice;
//! the first insert wins and both callers see the same shared tree
//! afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::convert::Romanization;

use super::tree::MapNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TreeKey {
    RomajiToKana {
        use_obsolete_kana: bool,
        custom: Option<u64>,
    },
    KanaToRomaji {
        romanization: Romanization,
        custom: Option<u64>,
    },
}

fn cache() -> &'static RwLock<HashMap<TreeKey, Arc<MapNode>>> {
    static CACHE: OnceLock<RwLock<HashMap<TreeKey, Arc<MapNode>>>> = OnceLock::new();
    CACHE.get_or_init(Default::default)
}

pub(crate) fn get_or_build(key: TreeKey, build: impl FnOnce() -> MapNode) -> Arc<MapNode> {
    if let Ok(map) = cache().read() {
        if let Some(tree) = map.get(&key) {
            return Arc::clone(tree);
        }
    }
    // Built outside the lock; a concurrent builder may race us here.
    let tree = Arc::new(build());
    match cache().write() {
        Ok(mut map) => Arc::clone(map.entry(key).or_insert(tree)),
        // Poisoned lock: fall back to the freshly built tree.
        Err(_) => tree,
    }
}

/// Drops every cached tree. The next conversion rebuilds from scratch.
pub fn reset() {
    if let Ok(mut map) = cache().write() {
        map.clear();
    }
}

/// Eagerly builds the base trees so first conversions don't pay the
/// construction cost (useful before spawning concurrent workers).
pub fn warm() {
    super::romaji_to_kana_tree(false, None);
    super::romaji_to_kana_tree(true, None);
    super::kana_to_romaji_tree(Romanization::Hepburn, None);
    super::kana_to_romaji_tree(Romanization::Kunrei, None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_returns_shared_tree() {
        let key = TreeKey::RomajiToKana {
            use_obsolete_kana: false,
            custom: Some(0xDEAD),
        };
        let a = get_or_build(key, || {
            let mut t = MapNode::empty();
            t.insert("ka", "か");
            t
        });
        let b = get_or_build(key, || panic!("must be cached"));
        assert!(Arc::ptr_eq(&a, &b));
        reset();
    }

    #[test]
    fn test_warm_populates_base_trees() {
        warm();
        let tree = super::super::romaji_to_kana_tree(false, None);
        assert!(tree.subtree("ka").is_some());
    }
}
