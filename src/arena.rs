use generational_arena::{Arena, Index};
use tracing::instrument;

/// Tree node stored in the arena, linked to its children by index.
#[derive(Debug)]
pub struct ArenaNode {
    /// Stored key
    pub key: i64,
    /// Index of the left child (keys strictly smaller), None for no child
    pub left: Option<Index>,
    /// Index of the right child (keys greater or equal), None for no child
    pub right: Option<Index>,
}

/// Arena-backed binary search tree.
///
/// Same ordering semantics as [`crate::tree::Bst`], but all nodes live in one
/// generational arena and reference each other by index instead of owned
/// boxes. This trades per-node heap allocations for a single growable buffer
/// and makes destruction a plain buffer drop.
#[derive(Debug, Default)]
pub struct ArenaBst {
    /// Arena storage for all tree nodes
    arena: Arena<ArenaNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
    len: usize,
}

impl ArenaBst {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode> {
        self.arena.get(idx)
    }

    /// Inserts `key` by walking from the root to the first empty child slot.
    ///
    /// Nodes are never removed, so every index held by the tree stays valid
    /// for its whole lifetime.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: i64) {
        let node_idx = self.arena.insert(ArenaNode {
            key,
            left: None,
            right: None,
        });
        self.len += 1;

        let Some(mut current) = self.root else {
            self.root = Some(node_idx);
            return;
        };
        loop {
            let node = &mut self.arena[current];
            let slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(node_idx);
                    return;
                }
            }
        }
    }

    /// Collects all keys in non-decreasing order.
    #[instrument(level = "trace", skip(self))]
    pub fn in_order(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// In-order iterator with an explicit stack.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InOrderIndexIter<'_> {
        InOrderIndexIter {
            tree: self,
            stack: Vec::new(),
            current: self.root,
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + [node.left, node.right]
                .into_iter()
                .flatten()
                .map(|child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

impl FromIterator<i64> for ArenaBst {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = ArenaBst::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

pub struct InOrderIndexIter<'a> {
    tree: &'a ArenaBst,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a> Iterator for InOrderIndexIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.tree.get_node(idx).and_then(|node| node.left);
        }
        let idx = self.stack.pop()?;
        let node = self.tree.get_node(idx)?;
        self.current = node.right;
        Some(node.key)
    }
}
