// src/huffman/queue.rs

//! The merge queue used while building a Huffman tree.
//!
//! Nodes are popped lightest first. The ordering lives in [`MergeOrder`], a
//! comparator struct that turns each queued node into a totally ordered key;
//! the node type itself carries no ordering. Ties on weight are resolved by
//! the configured [`TieBreak`] and finally by arrival sequence, so two builds
//! from the same table always pop nodes in the same order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::tree::HuffmanNode;

/// How nodes of equal weight are ordered in the merge queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Equal weights pop in insertion order. Leaves are inserted in ascending
    /// symbol order before any merged node, and merged nodes in creation order.
    #[default]
    Arrival,
    /// Equal weights pop by the smallest symbol in the subtree, then by
    /// insertion order.
    LowestSymbol,
}

/// Comparator that decides which queued node is merged next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOrder {
    tie_break: TieBreak,
}

/// Total order key produced by [`MergeOrder`]. Smaller keys pop first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MergeKey {
    weight: u64,
    secondary: u32,
    arrival: u64,
}

impl MergeOrder {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Key for a node holding `weight`, whose subtree's smallest symbol is
    /// `lowest`, inserted as the `arrival`-th element.
    pub fn key(&self, weight: u64, lowest: char, arrival: u64) -> MergeKey {
        let secondary = match self.tie_break {
            TieBreak::Arrival => 0,
            TieBreak::LowestSymbol => lowest as u32,
        };
        MergeKey {
            weight,
            secondary,
            arrival,
        }
    }
}

/// A node waiting in the queue, with the smallest symbol of its subtree.
#[derive(Debug)]
pub struct QueuedNode {
    pub node: HuffmanNode,
    pub lowest: char,
}

#[derive(Debug)]
struct Entry {
    key: MergeKey,
    item: QueuedNode,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// A min-queue of tree nodes driven by a [`MergeOrder`].
#[derive(Debug)]
pub struct NodeQueue {
    order: MergeOrder,
    heap: BinaryHeap<Reverse<Entry>>,
    next_arrival: u64,
}

impl NodeQueue {
    pub fn new(order: MergeOrder) -> Self {
        Self {
            order,
            heap: BinaryHeap::new(),
            next_arrival: 0,
        }
    }

    pub fn with_capacity(order: MergeOrder, capacity: usize) -> Self {
        Self {
            order,
            heap: BinaryHeap::with_capacity(capacity),
            next_arrival: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, node: HuffmanNode, lowest: char) {
        let key = self.order.key(node.weight(), lowest, self.next_arrival);
        self.next_arrival += 1;
        self.heap.push(Reverse(Entry {
            key,
            item: QueuedNode { node, lowest },
        }));
    }

    /// Remove the node that orders first, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<QueuedNode> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }
}
