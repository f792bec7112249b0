//! This module derives the symbol-to-bitstring code table from a fixed
//! Huffman tree.
//!
//! The derivation is a depth-first walk appending '0' for a left descent and
//! '1' for a right descent. A tree whose root is itself a leaf (single-symbol
//! alphabet) gets the one-bit code "0" rather than the empty string: an empty
//! code would make the packed bit count ambiguous and cannot be consumed by
//! the decoder.

use bitvec::prelude::*;

use crate::kernels::frequency::ALPHABET_SIZE;
use crate::kernels::tree::HuffNode;

/// A read-only mapping from symbol to its prefix-free code, derived once from
/// a fixed tree. Codes are stored MSB-first so they can be appended straight
/// into the packed payload.
#[derive(Debug, Clone)]
pub struct CodeBook {
    codes: Vec<Option<BitVec<u8, Msb0>>>,
}

impl CodeBook {
    /// Walks the tree and records the accumulated path bits at each leaf.
    pub fn derive(root: &HuffNode) -> Self {
        let mut codes: Vec<Option<BitVec<u8, Msb0>>> = vec![None; ALPHABET_SIZE];

        if let HuffNode::Leaf { symbol } = root {
            // Single-symbol alphabet: mandatory one-bit code.
            codes[*symbol as usize] = Some(bitvec![u8, Msb0; 0]);
        } else {
            let mut path: BitVec<u8, Msb0> = BitVec::new();
            walk(root, &mut path, &mut codes);
        }

        CodeBook { codes }
    }

    /// The code for `symbol`, or `None` if the symbol has no leaf in the tree.
    pub fn code(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[symbol as usize].as_deref()
    }

    /// Iterates `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_deref().map(|c| (symbol as u8, c)))
    }

    /// The number of symbols that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn walk(node: &HuffNode, path: &mut BitVec<u8, Msb0>, codes: &mut [Option<BitVec<u8, Msb0>>]) {
    match node {
        HuffNode::Leaf { symbol } => {
            codes[*symbol as usize] = Some(path.clone());
        }
        HuffNode::Internal { left, right } => {
            path.push(false);
            walk(left, path, codes);
            path.pop();

            path.push(true);
            walk(right, path, codes);
            path.pop();
        }
    }
}
