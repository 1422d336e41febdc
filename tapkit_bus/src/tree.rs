// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element tree: a slot-map hierarchy of selector-addressable nodes.
//!
//! ## Overview
//!
//! The bus propagates events over this tree. Each node carries
//! [`ElementData`] (tag, optional id, classes) — the minimal surface a
//! delegation selector can match — plus parent/child links used to build
//! bubble paths.
//!
//! ## Minimal example
//!
//! ```
//! use tapkit_bus::tree::{ElementData, ElementTree};
//!
//! let mut tree = ElementTree::new();
//! let root = tree.insert(ElementData::tag("html"), None).unwrap();
//! let body = tree.insert(ElementData::tag("body"), Some(root)).unwrap();
//! let button = tree.insert(ElementData::tag("button"), Some(body)).unwrap();
//!
//! assert_eq!(tree.parent_of(button), Some(body));
//! assert_eq!(tree.path_to_root(button).as_slice(), &[root, body, button]);
//! assert!(tree.is_ancestor_or_self(root, button));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Identifier for a node in the tree.
///
/// A small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused. It consists of a slot index
/// and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that
///   slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `NodeId`.
///
/// Stale `NodeId`s never alias a different live node because the generation
/// must match. Use [`ElementTree::is_alive`] to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Selector-addressable element attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name (`"button"`, `"div"`, ...).
    pub tag: String,
    /// Optional unique id (`#send`).
    pub id: Option<String>,
    /// Class list (`.primary`, ...).
    pub classes: Vec<String>,
}

impl ElementData {
    /// Element data with only a tag name.
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Append a class.
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }
}

#[derive(Debug)]
struct NodeEntry {
    data: ElementData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    entry: Option<NodeEntry>,
}

/// Root→target ancestor path. Inline capacity covers typical UI depths.
pub type NodePath = SmallVec<[NodeId; 8]>;

/// A single-rooted tree of elements with generational node handles.
#[derive(Debug, Default)]
pub struct ElementTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: Option<NodeId>,
}

impl ElementTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node, if one has been inserted.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Insert a node under `parent`.
    ///
    /// `parent == None` inserts the root; returns `None` if a root already
    /// exists or if `parent` is stale.
    pub fn insert(&mut self, data: ElementData, parent: Option<NodeId>) -> Option<NodeId> {
        match parent {
            None if self.root.is_some() => return None,
            Some(p) if !self.is_alive(p) => return None,
            _ => {}
        }

        let entry = NodeEntry {
            data,
            parent,
            children: Vec::new(),
        };
        let id = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation += 1;
                slot.entry = Some(entry);
                NodeId::new(idx, slot.generation)
            }
            None => {
                let idx = u32::try_from(self.slots.len()).ok()?;
                self.slots.push(Slot {
                    generation: 1,
                    entry: Some(entry),
                });
                NodeId::new(idx, 1)
            }
        };

        match parent {
            Some(p) => self.entry_mut(p)?.children.push(id),
            None => self.root = Some(id),
        }
        Some(id)
    }

    /// Remove a node and its whole subtree. Returns `false` for stale ids.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(parent) = self.parent_of(id)
            && let Some(entry) = self.entry_mut(parent)
        {
            entry.children.retain(|&c| c != id);
        }
        if self.root == Some(id) {
            self.root = None;
        }

        // Free the subtree iteratively.
        let mut stack: Vec<NodeId> = alloc::vec![id];
        while let Some(n) = stack.pop() {
            let slot = &mut self.slots[n.idx()];
            if let Some(entry) = slot.entry.take() {
                stack.extend(entry.children);
                self.free.push(n.0);
            }
        }
        true
    }

    /// Whether `id` still refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.entry(id).is_some()
    }

    /// Element data of a live node.
    pub fn data(&self, id: NodeId) -> Option<&ElementData> {
        self.entry(id).map(|e| &e.data)
    }

    /// Parent of a live node (`None` for the root or stale ids).
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.entry(id).and_then(|e| e.parent)
    }

    /// Root→target ancestor path of `id`, empty for stale ids.
    pub fn path_to_root(&self, id: NodeId) -> NodePath {
        let mut out = NodePath::new();
        if !self.is_alive(id) {
            return out;
        }
        let mut cur = id;
        // Collect to root; insertion keeps ancestry acyclic.
        loop {
            out.push(cur);
            match self.parent_of(cur) {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.is_alive(ancestor) || !self.is_alive(node) {
            return false;
        }
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parent_of(n);
        }
        false
    }

    fn entry(&self, id: NodeId) -> Option<&NodeEntry> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.entry.as_ref()
    }

    fn entry_mut(&mut self, id: NodeId) -> Option<&mut NodeEntry> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.entry.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_deep() -> (ElementTree, NodeId, NodeId, NodeId) {
        let mut tree = ElementTree::new();
        let root = tree.insert(ElementData::tag("html"), None).unwrap();
        let body = tree.insert(ElementData::tag("body"), Some(root)).unwrap();
        let leaf = tree.insert(ElementData::tag("button"), Some(body)).unwrap();
        (tree, root, body, leaf)
    }

    #[test]
    fn insert_builds_parent_links() {
        let (tree, root, body, leaf) = three_deep();
        assert_eq!(tree.parent_of(leaf), Some(body));
        assert_eq!(tree.parent_of(body), Some(root));
        assert_eq!(tree.parent_of(root), None);
    }

    #[test]
    fn single_root_enforced() {
        let mut tree = ElementTree::new();
        tree.insert(ElementData::tag("html"), None).unwrap();
        assert!(tree.insert(ElementData::tag("html"), None).is_none());
    }

    #[test]
    fn insert_under_stale_parent_fails() {
        let (mut tree, _root, body, _leaf) = three_deep();
        tree.remove(body);
        assert!(tree.insert(ElementData::tag("div"), Some(body)).is_none());
    }

    #[test]
    fn path_is_root_to_target() {
        let (tree, root, body, leaf) = three_deep();
        assert_eq!(tree.path_to_root(leaf).as_slice(), &[root, body, leaf]);
        assert_eq!(tree.path_to_root(root).as_slice(), &[root]);
    }

    #[test]
    fn remove_frees_subtree() {
        let (mut tree, root, body, leaf) = three_deep();
        assert!(tree.remove(body));
        assert!(!tree.is_alive(body));
        assert!(!tree.is_alive(leaf));
        assert!(tree.is_alive(root));
        assert!(tree.path_to_root(leaf).is_empty());
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let (mut tree, _root, body, leaf) = three_deep();
        tree.remove(leaf);
        let fresh = tree.insert(ElementData::tag("span"), Some(body)).unwrap();
        // Same slot, different generation: the stale id stays dead.
        assert_eq!(fresh.0, leaf.0);
        assert_ne!(fresh, leaf);
        assert!(!tree.is_alive(leaf));
        assert!(tree.is_alive(fresh));
        assert_eq!(tree.data(leaf), None);
    }

    #[test]
    fn ancestor_or_self_checks() {
        let (tree, root, body, leaf) = three_deep();
        assert!(tree.is_ancestor_or_self(root, leaf));
        assert!(tree.is_ancestor_or_self(leaf, leaf));
        assert!(!tree.is_ancestor_or_self(leaf, root));
        assert!(!tree.is_ancestor_or_self(body, root));
    }

    #[test]
    fn root_can_be_replaced_after_removal() {
        let (mut tree, root, ..) = three_deep();
        tree.remove(root);
        assert_eq!(tree.root(), None);
        let fresh = tree.insert(ElementData::tag("html"), None).unwrap();
        assert_eq!(tree.root(), Some(fresh));
    }
}
