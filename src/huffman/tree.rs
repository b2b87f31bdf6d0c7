// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Huffman tree construction.
//!
//! Nodes live in a flat arena (`Vec<Node>`) and refer to their children by
//! index, so the tree has a single owner and no reference cycles.
//!
//! # Tie-breaking
//!
//! The min-heap orders entries by `(frequency, sequence)`. Leaves are
//! inserted in ascending symbol order and receive sequence numbers 0, 1, 2, …;
//! every merged node takes the next free sequence number. Of the two nodes
//! popped for a merge, the first becomes the left (`0`) child. This makes the
//! code assignment fully reproducible for a given input.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use super::bits::Bitstring;
use super::error::{HuffmanError, Result};
use super::frequency::FrequencyTable;
use super::table::{Code, CodeTable};

/// Index of a node in the tree arena.
pub type NodeId = usize;

/// A node of the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u8, freq: u64 },
    /// `right` is `None` only for the synthetic root of a one-symbol tree.
    Internal {
        freq: u64,
        left: NodeId,
        right: Option<NodeId>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match *self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => freq,
        }
    }
}

/// Binary prefix-code tree built from symbol frequencies.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two least frequent nodes.
    ///
    /// A table with a single distinct symbol gets a synthetic internal root
    /// whose only child is that symbol's leaf, so the symbol's code is `0`
    /// instead of the empty string.
    ///
    /// # Errors
    /// [`HuffmanError::EmptyInput`] if `freq` has no symbols.
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        let distinct = freq.distinct();
        if distinct == 0 {
            return Err(HuffmanError::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(2 * distinct);
        let mut heap = BinaryHeap::with_capacity(distinct);
        let mut seq = 0u64;
        for (symbol, count) in freq.iter() {
            heap.push(Reverse((count, seq, nodes.len())));
            nodes.push(Node::Leaf { symbol, freq: count });
            seq += 1;
        }

        if distinct == 1 {
            let leaf = nodes.len() - 1;
            nodes.push(Node::Internal { freq: nodes[leaf].freq(), left: leaf, right: None });
            let root = nodes.len() - 1;
            log::trace!("huffman tree: single symbol, synthetic root");
            return Ok(Self { nodes, root });
        }

        let root = loop {
            let Some(Reverse((left_freq, _, left))) = heap.pop() else {
                return Err(HuffmanError::EmptyInput);
            };
            let Some(Reverse((right_freq, _, right))) = heap.pop() else {
                break left;
            };
            let merged = left_freq + right_freq;
            heap.push(Reverse((merged, seq, nodes.len())));
            nodes.push(Node::Internal { freq: merged, left, right: Some(right) });
            seq += 1;
        };

        let tree = Self { nodes, root };
        log::trace!(
            "huffman tree: {} leaves, {} nodes, depth {}",
            tree.leaf_count(),
            tree.nodes.len(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Walk the tree and collect the code of every leaf.
    ///
    /// Left edges append `0`, right edges append `1`.
    pub fn code_table(&self) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(self.root, Bitstring::new())];
        while let Some((id, path)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol, Code::from_path(path));
                }
                Node::Internal { left, right, .. } => {
                    if let Some(right) = right {
                        let mut right_path = path.clone();
                        right_path.push(1);
                        stack.push((right, right_path));
                    }
                    let mut left_path = path;
                    left_path.push(0);
                    stack.push((left, left_path));
                }
            }
        }
        CodeTable::from_tree_codes(codes)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total frequency (number of symbols in the input).
    pub fn root_frequency(&self) -> u64 {
        self.nodes[self.root].freq()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, d)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { .. } => max = max.max(d),
                Node::Internal { left, right, .. } => {
                    stack.push((left, d + 1));
                    if let Some(right) = right {
                        stack.push((right, d + 1));
                    }
                }
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes_for(text: &[u8]) -> CodeTable {
        let freq = FrequencyTable::tally(text).unwrap();
        HuffmanTree::build(&freq).unwrap().code_table()
    }

    #[test]
    fn abracadabra_pinned_codes() {
        // c+d merge first, then b+r, then the two subtrees, then a at the root.
        let t = codes_for(b"abracadabra");
        assert_eq!(t.get(b'a').unwrap().to_string(), "0");
        assert_eq!(t.get(b'c').unwrap().to_string(), "100");
        assert_eq!(t.get(b'd').unwrap().to_string(), "101");
        assert_eq!(t.get(b'b').unwrap().to_string(), "110");
        assert_eq!(t.get(b'r').unwrap().to_string(), "111");
    }

    #[test]
    fn single_symbol_gets_zero() {
        let freq = FrequencyTable::tally(b"aaaa").unwrap();
        let tree = HuffmanTree::build(&freq).unwrap();
        assert!(matches!(
            tree.node(tree.root()),
            Node::Internal { freq: 4, right: None, .. }
        ));
        assert_eq!(tree.depth(), 1);
        let t = tree.code_table();
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(b'a').unwrap().to_string(), "0");
    }

    #[test]
    fn two_symbols() {
        let t = codes_for(b"abb");
        assert_eq!(t.get(b'a').unwrap().to_string(), "0");
        assert_eq!(t.get(b'b').unwrap().to_string(), "1");
    }

    #[test]
    fn empty_table_rejected() {
        let err = HuffmanTree::build(&FrequencyTable::new()).unwrap_err();
        assert_eq!(err, HuffmanError::EmptyInput);
    }

    #[test]
    fn uniform_alphabet_is_balanced() {
        let all: Vec<u8> = (0..=255).collect();
        let t = codes_for(&all);
        assert_eq!(t.len(), 256);
        assert!(t.iter().all(|(_, c)| c.len() == 8));
    }

    #[test]
    fn fibonacci_frequencies_make_deep_tree() {
        // Fibonacci counts force a maximally skewed tree.
        let mut text = Vec::new();
        let (mut a, mut b) = (1usize, 1usize);
        for symbol in 0..20u8 {
            text.extend(std::iter::repeat(symbol).take(a));
            (a, b) = (b, a + b);
        }
        let freq = FrequencyTable::tally(&text).unwrap();
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(tree.depth(), 19);
        assert_eq!(tree.root_frequency(), text.len() as u64);
        assert!(tree.code_table().is_prefix_free());
    }

    #[test]
    fn kraft_sum_is_one() {
        let t = codes_for(b"the quick brown fox jumps over the lazy dog");
        let sum: f64 = t.iter().map(|(_, c)| 0.5f64.powi(c.len() as i32)).sum();
        assert!((sum - 1.0).abs() < 1e-12, "kraft sum {sum}");
        assert!(t.is_prefix_free());
    }

    #[test]
    fn build_is_deterministic() {
        let text = b"mississippi river banks";
        assert_eq!(codes_for(text), codes_for(text));
    }

    #[test]
    fn leaf_count_matches_distinct() {
        let freq = FrequencyTable::tally(b"hello world").unwrap();
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(tree.leaf_count(), freq.distinct());
    }
}
