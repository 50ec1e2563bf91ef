//! Clue index: an unbalanced binary search tree of distinct clue names
//!
//! Nodes live in a flat arena and refer to their children by [`NodeId`].
//! The arena owns every node, so releasing the tree is a single `clear()`
//! (or a drop) no matter how deep a degenerate insertion order made it.

use std::cmp::Ordering;

use crate::error::{try_copy, CaseFileError, Result};

/// Position of a node in the index arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Debug, Clone)]
struct ClueNode {
    clue: String,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// The set of distinct clue names, kept in byte-wise order.
///
/// No rebalancing is done: inserting already sorted clues produces a tree
/// whose height equals its size.
///
/// # Example
///
/// ```
/// use casefile::ClueIndex;
///
/// let mut index = ClueIndex::new();
/// assert!(index.insert("rope").unwrap());
/// assert!(index.insert("knife").unwrap());
/// assert!(!index.insert("rope").unwrap()); // already known
///
/// assert!(index.contains("knife"));
/// assert!(!index.contains("candle"));
/// assert_eq!(index.iter().collect::<Vec<_>>(), vec!["knife", "rope"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClueIndex {
    nodes: Vec<ClueNode>,
    root: Option<NodeId>,
}

impl ClueIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `clue` if it is not already indexed.
    ///
    /// Returns `true` when a new node was attached and `false` when the clue
    /// was already present; a duplicate leaves the tree untouched.
    ///
    /// # Errors
    ///
    /// `AllocationFailed` if the node or its key cannot be stored. The index
    /// is unchanged in that case.
    pub fn insert(&mut self, clue: &str) -> Result<bool> {
        let mut slot = None;
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = &self.nodes[id.0];
            match clue.cmp(node.clue.as_str()) {
                Ordering::Equal => return Ok(false),
                Ordering::Less => {
                    slot = Some((id, Side::Left));
                    cursor = node.left;
                }
                Ordering::Greater => {
                    slot = Some((id, Side::Right));
                    cursor = node.right;
                }
            }
        }

        let key = try_copy(clue, "clue")?;
        self.nodes
            .try_reserve(1)
            .map_err(CaseFileError::allocation("clue node"))?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(ClueNode {
            clue: key,
            left: None,
            right: None,
        });

        match slot {
            None => self.root = Some(id),
            Some((parent, Side::Left)) => self.nodes[parent.0].left = Some(id),
            Some((parent, Side::Right)) => self.nodes[parent.0].right = Some(id),
        }

        tracing::debug!(clue, nodes = self.nodes.len(), "indexed new clue");
        Ok(true)
    }

    /// Check whether `clue` is indexed (exact byte-wise match).
    pub fn contains(&self, clue: &str) -> bool {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id.0];
            cursor = match clue.cmp(node.clue.as_str()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Iterate over every clue in ascending byte-wise order.
    ///
    /// Each call starts a fresh in-order walk.
    pub fn iter(&self) -> ClueIter<'_> {
        ClueIter {
            index: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Number of distinct clues.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no clue has been indexed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending: Vec<(NodeId, usize)> = Vec::new();
        pending.extend(self.root.map(|id| (id, 1)));

        while let Some((id, depth)) = pending.pop() {
            tallest = tallest.max(depth);
            let node = &self.nodes[id.0];
            pending.extend(node.left.map(|child| (child, depth + 1)));
            pending.extend(node.right.map(|child| (child, depth + 1)));
        }
        tallest
    }

    /// Release every node. The index can be reused afterwards.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = ClueIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy in-order walk over a [`ClueIndex`].
#[derive(Debug, Clone)]
pub struct ClueIter<'a> {
    index: &'a ClueIndex,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for ClueIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.index.nodes[id.0].left;
        }

        let id = self.stack.pop()?;
        let node = &self.index.nodes[id.0];
        self.cursor = node.right;
        Some(node.clue.as_str())
    }
}
