use termtree::Tree;
use tracing::instrument;

/// A single tree element holding one key and up to two child links.
#[derive(Debug)]
pub struct Node {
    /// Stored key
    pub key: i64,
    /// Left child, holds keys strictly smaller than `key`
    pub left: Option<Box<Node>>,
    /// Right child, holds keys greater than or equal to `key`
    pub right: Option<Box<Node>>,
}

impl Node {
    fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree over signed 64-bit keys.
///
/// Every key in a node's left subtree is strictly smaller than the node's key,
/// every key in the right subtree is greater than or equal to it. Duplicates
/// are kept and always descend to the right. No rebalancing happens, so the
/// shape is determined solely by insertion order.
#[derive(Debug, Default)]
pub struct Bst {
    root: Option<Box<Node>>,
    len: usize,
}

impl Bst {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Inserts `key`, walking from the root to the first empty child slot.
    ///
    /// Existing nodes are never relocated; the only mutation is filling the
    /// empty slot with the new node. Insertion cannot fail.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: i64) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Collects all keys in non-decreasing order: left subtree, node, right
    /// subtree. A pure read; calling it twice yields identical sequences.
    #[instrument(level = "trace", skip(self))]
    pub fn in_order(&self) -> Vec<i64> {
        fn walk(node: &Node, out: &mut Vec<i64>) {
            if let Some(left) = &node.left {
                walk(left, out);
            }
            out.push(node.key);
            if let Some(right) = &node.right {
                walk(right, out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = &self.root {
            walk(root, &mut out);
        }
        out
    }

    /// In-order iterator with an explicit stack.
    ///
    /// Unlike [`Bst::in_order`] this does not recurse, so it stays usable on
    /// degenerate (sorted-input) trees whose height equals their size.
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter {
            stack: Vec::new(),
            current: self.root.as_deref(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path. Empty trees have
    /// height 0, a lone root has height 1.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        fn depth(node: &Node) -> usize {
            1 + [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
                .map(depth)
                .max()
                .unwrap_or(0)
        }

        self.root.as_deref().map(depth).unwrap_or(0)
    }

    /// Renders the tree shape for terminal display, `None` for empty trees.
    pub fn render(&self) -> Option<Tree<String>> {
        self.root.as_deref().map(|node| node.to_tree_string())
    }
}

impl FromIterator<i64> for Bst {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Bst::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl Drop for Bst {
    // Hand-rolled so degenerate trees don't unwind node-by-node on the call
    // stack.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
    }
}

pub struct InOrderIter<'a> {
    stack: Vec<&'a Node>,
    current: Option<&'a Node>,
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        // Descend the left spine, then visit the node, then its right subtree
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(node.key)
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(self.key.to_string()).with_leaves(leaves)
    }
}
