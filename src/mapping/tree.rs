//! Trie node for transliteration mappings.
//!
//! Keys are paths of input characters; a node is either a bare terminal
//! ([`MapNode::Leaf`]) or a branch with children and an optional terminal
//! value. An empty-string terminal is meaningful: it commits a span that
//! contributes nothing to the output (a bare sokuon at end of input).

use std::collections::HashMap;

/// A node in a mapping trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapNode {
    /// Terminal value with no continuations.
    Leaf(String),
    /// Inner node: continuations plus an optional value when matching
    /// stops here.
    Branch(BranchNode),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchNode {
    children: HashMap<char, MapNode>,
    value: Option<String>,
}

impl Default for MapNode {
    fn default() -> Self {
        MapNode::Branch(BranchNode::default())
    }
}

impl MapNode {
    /// Empty branch, the root of a tree under construction.
    pub fn empty() -> Self {
        MapNode::default()
    }

    /// Builds a trie out of flat `(key, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a (&'a str, &'a str)>) -> Self {
        let mut root = MapNode::empty();
        for &(key, value) in pairs {
            root.insert(key, value);
        }
        root
    }

    /// The value produced if matching stops at this node.
    pub fn value(&self) -> Option<&str> {
        match self {
            MapNode::Leaf(v) => Some(v),
            MapNode::Branch(b) => b.value.as_deref(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        match self {
            MapNode::Leaf(v) => *v = value.into(),
            MapNode::Branch(b) => b.value = Some(value.into()),
        }
    }

    pub fn child(&self, c: char) -> Option<&MapNode> {
        match self {
            MapNode::Leaf(_) => None,
            MapNode::Branch(b) => b.children.get(&c),
        }
    }

    pub fn has_children(&self) -> bool {
        match self {
            MapNode::Leaf(_) => false,
            MapNode::Branch(b) => !b.children.is_empty(),
        }
    }

    /// Follows `path` without creating anything.
    pub fn subtree(&self, path: &str) -> Option<&MapNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Follows `path`, creating empty branches along the way. A leaf on the
    /// path is split into a branch that keeps its value.
    pub fn subtree_mut(&mut self, path: &str) -> &mut MapNode {
        let mut node = self;
        for c in path.chars() {
            node = node.branch_mut().children.entry(c).or_default();
        }
        node
    }

    /// Sets the terminal value at `path`.
    pub fn insert(&mut self, path: &str, value: impl Into<String>) {
        self.subtree_mut(path).set_value(value);
    }

    /// Installs `node` as the subtree at `path`, replacing whatever was
    /// there. Callers pass a clone when the source subtree must stay
    /// independently mutable (alias spellings never share structure).
    pub fn set_subtree(&mut self, path: &str, node: MapNode) {
        *self.subtree_mut(path) = node;
    }

    /// Removes the direct child keyed by `c`, if any.
    pub fn remove_child(&mut self, c: char) {
        if let MapNode::Branch(b) = self {
            b.children.remove(&c);
        }
    }

    /// Deep copy with every terminal value passed through `f`. Used for
    /// gemination: the っ/doubled-consonant sibling of a subtree is the
    /// subtree with all its outputs prefixed.
    pub fn map_values(&self, f: &impl Fn(&str) -> String) -> MapNode {
        match self {
            MapNode::Leaf(v) => MapNode::Leaf(f(v)),
            MapNode::Branch(b) => MapNode::Branch(BranchNode {
                value: b.value.as_deref().map(f),
                children: b
                    .children
                    .iter()
                    .map(|(&c, node)| (c, node.map_values(f)))
                    .collect(),
            }),
        }
    }

    /// Merges `other` into `self` with override precedence at every depth:
    /// a leaf on either side wholly replaces the base node, otherwise
    /// values are overridden when present and children merge key-by-key.
    pub fn merge_from(&mut self, other: &MapNode) {
        match (&mut *self, other) {
            (MapNode::Leaf(_), _) | (_, MapNode::Leaf(_)) => *self = other.clone(),
            (MapNode::Branch(base), MapNode::Branch(over)) => {
                if let Some(v) = &over.value {
                    base.value = Some(v.clone());
                }
                for (&c, sub) in &over.children {
                    match base.children.get_mut(&c) {
                        Some(child) => child.merge_from(sub),
                        None => {
                            base.children.insert(c, sub.clone());
                        }
                    }
                }
            }
        }
    }

    fn branch_mut(&mut self) -> &mut BranchNode {
        if let MapNode::Leaf(v) = self {
            *self = MapNode::Branch(BranchNode {
                children: HashMap::new(),
                value: Some(std::mem::take(v)),
            });
        }
        match self {
            MapNode::Branch(b) => b,
            MapNode::Leaf(_) => unreachable!("just converted to branch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut root = MapNode::empty();
        root.insert("ka", "か");
        root.insert("ki", "き");
        let k = root.subtree("k").unwrap();
        assert!(k.has_children());
        assert_eq!(k.value(), None);
        assert_eq!(root.subtree("ka").unwrap().value(), Some("か"));
        assert_eq!(root.subtree("ki").unwrap().value(), Some("き"));
        assert_eq!(root.subtree("ku"), None);
    }

    #[test]
    fn test_leaf_splits_into_branch() {
        let mut root = MapNode::empty();
        root.insert("n", "ん");
        root.insert("na", "な");
        assert_eq!(root.subtree("n").unwrap().value(), Some("ん"));
        assert_eq!(root.subtree("na").unwrap().value(), Some("な"));
    }

    #[test]
    fn test_set_subtree_is_independent() {
        let mut root = MapNode::empty();
        root.insert("sya", "しゃ");
        let copy = root.subtree("sy").unwrap().clone();
        root.set_subtree("sh", copy);
        // mutating the alias must not touch the original
        root.insert("sha", "X");
        assert_eq!(root.subtree("sha").unwrap().value(), Some("X"));
        assert_eq!(root.subtree("sya").unwrap().value(), Some("しゃ"));
    }

    #[test]
    fn test_map_values() {
        let mut root = MapNode::empty();
        root.insert("ka", "か");
        root.insert("kya", "きゃ");
        let doubled = root.subtree("k").unwrap().map_values(&|v| format!("っ{v}"));
        assert_eq!(doubled.subtree("a").unwrap().value(), Some("っか"));
        assert_eq!(doubled.subtree("ya").unwrap().value(), Some("っきゃ"));
        // source untouched
        assert_eq!(root.subtree("ka").unwrap().value(), Some("か"));
    }

    #[test]
    fn test_merge_override_precedence() {
        let mut base = MapNode::empty();
        base.insert("wi", "うぃ");
        base.insert("wa", "わ");
        let mut over = MapNode::empty();
        over.insert("wi", "ゐ");
        base.merge_from(&over);
        assert_eq!(base.subtree("wi").unwrap().value(), Some("ゐ"));
        assert_eq!(base.subtree("wa").unwrap().value(), Some("わ"));
    }

    #[test]
    fn test_merge_leaf_replaced_by_branch() {
        let mut base = MapNode::empty();
        base.set_subtree("x", MapNode::Leaf("ば".into()));
        let mut over = MapNode::empty();
        over.insert("xy", "ゃ");
        base.merge_from(&over);
        assert_eq!(base.subtree("xy").unwrap().value(), Some("ゃ"));
        // the leaf value was wholly replaced by the override subtree
        assert_eq!(base.subtree("x").unwrap().value(), None);
    }
}
