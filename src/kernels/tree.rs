//! This module contains the kernel for building the Huffman prefix tree from
//! a frequency table.
//!
//! The build is the classic min-priority-queue merge: the two lowest-weight
//! nodes are repeatedly combined under a fresh internal node until one root
//! remains. Ties in weight are broken by insertion sequence number, and leaves
//! are seeded in ascending symbol order, so the same input always yields the
//! same tree and therefore a byte-identical artifact.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::HuffpackError;
use crate::kernels::frequency::{FrequencyTable, ALPHABET_SIZE};

/// An owned, strict binary Huffman tree node. Node weights only matter during
/// construction and are not retained once the tree is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
    },
    Internal {
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// The number of leaves beneath (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// A construction-time heap entry. Ordering is by weight, then by the
/// sequence number assigned at push time, which makes equal-weight pops
/// deterministic instead of depending on incidental heap layout.
#[derive(Debug)]
struct HeapEntry {
    weight: u64,
    seq: u32,
    node: HuffNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Builds the Huffman tree for a frequency table.
///
/// Returns `None` for an all-zero table (empty input). A table with exactly
/// one live symbol yields a single leaf root with no merge step; the one-bit
/// code for it is assigned by the code-table derivation.
pub fn build_tree(table: &FrequencyTable) -> Option<HuffNode> {
    let mut heap = BinaryHeap::with_capacity(ALPHABET_SIZE);
    let mut seq: u32 = 0;

    // Seeding in ascending symbol order fixes the insertion sequence.
    for (symbol, &weight) in table.iter().enumerate() {
        if weight > 0 {
            heap.push(Reverse(HeapEntry {
                weight,
                seq,
                node: HuffNode::Leaf {
                    symbol: symbol as u8,
                },
            }));
            seq += 1;
        }
    }

    if heap.is_empty() {
        return None;
    }

    while heap.len() > 1 {
        // Two entries are guaranteed by the loop condition. The first (lowest)
        // pop becomes the left child.
        let Reverse(lo) = heap.pop().unwrap();
        let Reverse(hi) = heap.pop().unwrap();
        heap.push(Reverse(HeapEntry {
            weight: lo.weight + hi.weight,
            seq,
            node: HuffNode::Internal {
                left: Box::new(lo.node),
                right: Box::new(hi.node),
            },
        }));
        seq += 1;
    }

    heap.pop().map(|Reverse(entry)| entry.node)
}

/// Builds a tree from caller-supplied `(symbol, count)` pairs.
///
/// This is the validating front door for direct API users: counts must be
/// non-negative, duplicate symbols accumulate, and zero counts are ignored.
pub fn build_tree_from_counts(counts: &[(u8, i64)]) -> Result<Option<HuffNode>, HuffpackError> {
    let mut table = [0u64; ALPHABET_SIZE];
    for &(symbol, count) in counts {
        if count < 0 {
            return Err(HuffpackError::InvalidFrequency(count));
        }
        table[symbol as usize] += count as u64;
    }
    Ok(build_tree(&table))
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::frequency;

    #[test]
    fn test_empty_table_yields_no_tree() {
        let table = frequency::count(&[]);
        assert!(build_tree(&table).is_none());
    }

    #[test]
    fn test_single_symbol_yields_leaf_root() {
        let table = frequency::count(b"aaaa");
        let root = build_tree(&table).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root, HuffNode::Leaf { symbol: b'a' });
    }

    #[test]
    fn test_leaf_count_matches_distinct_symbols() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let table = frequency::count(input);
        let root = build_tree(&table).unwrap();
        assert_eq!(root.leaf_count(), frequency::distinct_symbols(&table));
    }

    #[test]
    fn test_two_symbols_merge_lowest_first() {
        // 'b' is rarer than 'a', so 'b' pops first and lands on the left.
        let table = frequency::count(b"aaab");
        let root = build_tree(&table).unwrap();
        match root {
            HuffNode::Internal { left, right } => {
                assert_eq!(*left, HuffNode::Leaf { symbol: b'b' });
                assert_eq!(*right, HuffNode::Leaf { symbol: b'a' });
            }
            _ => panic!("expected an internal root for a two-symbol alphabet"),
        }
    }

    #[test]
    fn test_equal_weights_tie_break_is_deterministic() {
        // All four symbols have weight 1; repeated builds must agree exactly.
        let table = frequency::count(b"dcba");
        let first = build_tree(&table).unwrap();
        let second = build_tree(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let result = build_tree_from_counts(&[(b'a', 3), (b'b', -1)]);
        assert!(matches!(result, Err(HuffpackError::InvalidFrequency(-1))));
    }

    #[test]
    fn test_counts_accumulate_and_skip_zeros() {
        let root = build_tree_from_counts(&[(b'a', 2), (b'a', 3), (b'b', 0)])
            .unwrap()
            .unwrap();
        assert_eq!(root, HuffNode::Leaf { symbol: b'a' });
    }
}
