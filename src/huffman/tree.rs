// src/huffman/tree.rs

//! Huffman tree construction.
//!
//! A tree is built from a [`FrequencyTable`] by repeatedly merging the two
//! lightest nodes of a [`NodeQueue`]: the first node popped becomes the left
//! child and the second the right child of a new internal node whose weight is
//! their sum. Each internal node owns its two children, so the whole tree is
//! released when the root is dropped.

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, trace};

use super::frequency::FrequencyTable;
use super::queue::{MergeOrder, NodeQueue, TieBreak};
use crate::utils::error::{HuffmanError, Result};

/// A node in the Huffman tree.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` all walk the tree with an explicit
/// stack, so trees of any depth are safe to copy, compare, print and release.
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Creates a leaf holding `symbol` with its occurrence count.
    pub fn leaf(symbol: char, weight: u64) -> Self {
        HuffmanNode::Leaf { symbol, weight }
    }

    /// Creates an internal node owning `left` and `right`.
    ///
    /// Fails with [`HuffmanError::WeightOverflow`] if the summed weight does
    /// not fit in a `u64`.
    pub fn combine(left: HuffmanNode, right: HuffmanNode) -> Result<Self> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(HuffmanError::WeightOverflow)?;
        Ok(HuffmanNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol of a leaf; internal nodes have none.
    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    pub fn left(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { right, .. } => Some(right),
        }
    }
}

// Children are detached onto a heap-allocated stack so that dropping a very
// deep tree (e.g. many zero-count symbols) does not recurse once per level.
impl Drop for HuffmanNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut HuffmanNode, pending: &mut Vec<HuffmanNode>) {
    if let HuffmanNode::Internal { left, right, .. } = node {
        for child in [left, right] {
            if !child.is_leaf() {
                pending.push(std::mem::replace(child.as_mut(), placeholder()));
            }
        }
    }
}

fn placeholder() -> HuffmanNode {
    HuffmanNode::leaf('\0', 0)
}

/// Copies `node` without its subtrees; internal children become placeholders.
fn shallow_copy(node: &HuffmanNode) -> HuffmanNode {
    match node {
        HuffmanNode::Leaf { symbol, weight } => HuffmanNode::leaf(*symbol, *weight),
        HuffmanNode::Internal { weight, .. } => HuffmanNode::Internal {
            weight: *weight,
            left: Box::new(placeholder()),
            right: Box::new(placeholder()),
        },
    }
}

impl Clone for HuffmanNode {
    fn clone(&self) -> Self {
        let mut copy = shallow_copy(self);
        let mut pending = vec![(self, &mut copy)];
        while let Some((source, target)) = pending.pop() {
            let HuffmanNode::Internal { left, right, .. } = source else {
                continue;
            };
            if let HuffmanNode::Internal {
                left: new_left,
                right: new_right,
                ..
            } = target
            {
                **new_left = shallow_copy(left);
                **new_right = shallow_copy(right);
                pending.push((right.as_ref(), new_right.as_mut()));
                pending.push((left.as_ref(), new_left.as_mut()));
            }
        }
        copy
    }
}

impl PartialEq for HuffmanNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (
                    HuffmanNode::Leaf { symbol, weight },
                    HuffmanNode::Leaf {
                        symbol: other_symbol,
                        weight: other_weight,
                    },
                ) => {
                    if symbol != other_symbol || weight != other_weight {
                        return false;
                    }
                }
                (
                    HuffmanNode::Internal {
                        weight,
                        left,
                        right,
                    },
                    HuffmanNode::Internal {
                        weight: other_weight,
                        left: other_left,
                        right: other_right,
                    },
                ) => {
                    if weight != other_weight {
                        return false;
                    }
                    pending.push((right.as_ref(), other_right.as_ref()));
                    pending.push((left.as_ref(), other_left.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for HuffmanNode {}

enum DebugStep<'a> {
    Node(&'a HuffmanNode),
    Text(&'static str),
}

impl fmt::Debug for HuffmanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![DebugStep::Node(self)];
        while let Some(step) = pending.pop() {
            match step {
                DebugStep::Text(text) => f.write_str(text)?,
                DebugStep::Node(HuffmanNode::Leaf { symbol, weight }) => {
                    write!(f, "Leaf {{ symbol: {:?}, weight: {} }}", symbol, weight)?;
                }
                DebugStep::Node(HuffmanNode::Internal {
                    weight,
                    left,
                    right,
                }) => {
                    write!(f, "Internal {{ weight: {}, left: ", weight)?;
                    pending.push(DebugStep::Text(" }"));
                    pending.push(DebugStep::Node(right.as_ref()));
                    pending.push(DebugStep::Text(", right: "));
                    pending.push(DebugStep::Node(left.as_ref()));
                }
            }
        }
        Ok(())
    }
}

/// An immutable Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
    leaf_count: usize,
}

impl HuffmanTree {
    /// Wraps an already assembled tree, e.g. one built by hand with
    /// [`HuffmanNode::leaf`] and [`HuffmanNode::combine`].
    ///
    /// Every leaf must hold a distinct symbol; a repeated symbol fails with
    /// [`HuffmanError::InvalidData`].
    pub fn from_root(root: HuffmanNode) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![&root];
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    if !seen.insert(*symbol) {
                        return Err(HuffmanError::InvalidData(format!(
                            "symbol {:?} appears in more than one leaf",
                            symbol
                        )));
                    }
                }
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        Ok(Self {
            leaf_count: seen.len(),
            root,
        })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total weight of the tree, equal to the sum of all leaf counts.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Length of the longest root-to-leaf path. A single-leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        self.leaves().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Sum over all leaves of `count * depth`.
    ///
    /// This is the number of markers needed to encode the training text the
    /// tree was built from (the single-leaf tree is the exception: its lone
    /// code still costs one marker per symbol).
    pub fn weighted_path_length(&self) -> u128 {
        self.leaves()
            .map(|(node, depth)| node.weight() as u128 * depth as u128)
            .sum()
    }

    /// Recovers the frequency table the tree was built from.
    pub fn frequencies(&self) -> FrequencyTable {
        self.leaves()
            .filter_map(|(node, _)| node.symbol().map(|symbol| (symbol, node.weight())))
            .collect()
    }

    /// Iterates over the leaves, left to right, with their depth.
    fn leaves(&self) -> impl Iterator<Item = (&HuffmanNode, usize)> + '_ {
        let mut stack = vec![(&self.root, 0usize)];
        std::iter::from_fn(move || {
            while let Some((node, depth)) = stack.pop() {
                match node {
                    HuffmanNode::Leaf { .. } => return Some((node, depth)),
                    HuffmanNode::Internal { left, right, .. } => {
                        stack.push((right, depth + 1));
                        stack.push((left, depth + 1));
                    }
                }
            }
            None
        })
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match node {
                HuffmanNode::Leaf { symbol, weight } => {
                    writeln!(f, "{}sym: {:?}, count: {}", indent, symbol, weight)?;
                }
                HuffmanNode::Internal {
                    weight,
                    left,
                    right,
                } => {
                    writeln!(f, "{}internal count: {}", indent, weight)?;
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        Ok(())
    }
}

/// Builds a Huffman tree using the default [`TieBreak::Arrival`] policy.
pub fn build_tree(freq: &FrequencyTable) -> Result<HuffmanTree> {
    build_tree_with(freq, TieBreak::default())
}

/// Builds a Huffman tree, resolving equal weights with `tie_break`.
///
/// Fails with [`HuffmanError::EmptyAlphabet`] if `freq` has no entries. A
/// table with a single entry yields a tree whose root is that leaf.
pub fn build_tree_with(freq: &FrequencyTable, tie_break: TieBreak) -> Result<HuffmanTree> {
    if freq.is_empty() {
        return Err(HuffmanError::EmptyAlphabet);
    }

    let mut queue = NodeQueue::with_capacity(MergeOrder::new(tie_break), freq.len());
    for (symbol, count) in freq.iter() {
        queue.push(HuffmanNode::leaf(symbol, count), symbol);
    }

    loop {
        let first = queue.pop().ok_or(HuffmanError::EmptyAlphabet)?;
        let Some(second) = queue.pop() else {
            let tree = HuffmanTree {
                root: first.node,
                leaf_count: freq.len(),
            };
            debug!(
                "built Huffman tree: {} leaves, weight {}, depth {}",
                tree.leaf_count(),
                tree.weight(),
                tree.depth()
            );
            return Ok(tree);
        };

        trace!(
            "merge {} + {} (tie break {:?})",
            first.node.weight(),
            second.node.weight(),
            tie_break
        );
        let lowest = first.lowest.min(second.lowest);
        let merged = HuffmanNode::combine(first.node, second.node)?;
        queue.push(merged, lowest);
    }
}
