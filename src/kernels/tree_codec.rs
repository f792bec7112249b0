//! This module serializes the Huffman tree into a compact byte stream and
//! parses it back, so the decoder is self-sufficient from the artifact alone.
//!
//! The encoding is a pre-order traversal: one marker byte per node (0x00 for
//! an internal node, 0x01 for a leaf), with a leaf's symbol byte immediately
//! after its marker. Parsing consumes exactly the bytes the writer emitted
//! and reports how many, which is what lets the artifact locate the payload
//! that follows the tree.

use crate::error::HuffpackError;
use crate::kernels::frequency::ALPHABET_SIZE;
use crate::kernels::tree::HuffNode;

const MARKER_INTERNAL: u8 = 0x00;
const MARKER_LEAF: u8 = 0x01;

/// A strict binary tree over a 256-symbol alphabet is never deeper than 255;
/// anything past this bound is a hostile or damaged marker stream.
const MAX_TREE_DEPTH: usize = ALPHABET_SIZE;

/// Summary of a successfully parsed tree section.
#[derive(Debug)]
pub struct ParsedTree {
    pub root: HuffNode,
    /// Bytes consumed from the input, i.e. the serialized tree size.
    pub consumed: usize,
    /// Number of leaves in the parsed tree.
    pub leaves: usize,
}

/// Appends the pre-order encoding of `node` to `out`.
pub fn serialize(node: &HuffNode, out: &mut Vec<u8>) {
    match node {
        HuffNode::Leaf { symbol } => {
            out.push(MARKER_LEAF);
            out.push(*symbol);
        }
        HuffNode::Internal { left, right } => {
            out.push(MARKER_INTERNAL);
            serialize(left, out);
            serialize(right, out);
        }
    }
}

/// Parses one tree from the front of `bytes`.
///
/// Rejects truncated or over-deep marker streams and trees that name the same
/// symbol on two leaves, since such a tree can never have been produced by
/// the builder.
pub fn deserialize(bytes: &[u8]) -> Result<ParsedTree, HuffpackError> {
    let mut parser = TreeParser {
        bytes,
        pos: 0,
        seen: [false; ALPHABET_SIZE],
        leaves: 0,
    };
    let root = parser.parse_node(0)?;
    Ok(ParsedTree {
        root,
        consumed: parser.pos,
        leaves: parser.leaves,
    })
}

struct TreeParser<'a> {
    bytes: &'a [u8],
    pos: usize,
    seen: [bool; ALPHABET_SIZE],
    leaves: usize,
}

impl TreeParser<'_> {
    fn next_byte(&mut self) -> Result<u8, HuffpackError> {
        let byte = *self.bytes.get(self.pos).ok_or_else(|| {
            HuffpackError::MalformedArtifact("tree bytes end mid-node".to_string())
        })?;
        self.pos += 1;
        Ok(byte)
    }

    fn parse_node(&mut self, depth: usize) -> Result<HuffNode, HuffpackError> {
        if depth > MAX_TREE_DEPTH {
            return Err(HuffpackError::MalformedArtifact(format!(
                "tree nesting exceeds the maximum depth of {}",
                MAX_TREE_DEPTH
            )));
        }

        match self.next_byte()? {
            MARKER_LEAF => {
                let symbol = self.next_byte()?;
                if self.seen[symbol as usize] {
                    return Err(HuffpackError::MalformedArtifact(format!(
                        "symbol {:#04x} appears on two leaves",
                        symbol
                    )));
                }
                self.seen[symbol as usize] = true;
                self.leaves += 1;
                Ok(HuffNode::Leaf { symbol })
            }
            MARKER_INTERNAL => {
                let left = self.parse_node(depth + 1)?;
                let right = self.parse_node(depth + 1)?;
                Ok(HuffNode::Internal {
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            other => Err(HuffpackError::MalformedArtifact(format!(
                "unknown tree marker byte {:#04x}",
                other
            ))),
        }
    }
}
