//! This module replays a packed bitstream against a reconstructed Huffman
//! tree to recover the original symbol sequence.
//!
//! The walk is a small state machine: start at the root, descend left on a 0
//! bit and right on a 1 bit, emit the symbol and reset whenever a leaf is
//! reached. Exactly `bit_count` bits are consumed; padding bits beyond the
//! count are never examined. If the cursor is not back at the root once the
//! bits run out, the payload was cut mid-code and the decode fails rather
//! than returning partial output.

use bitvec::prelude::*;

use crate::error::HuffpackError;
use crate::kernels::bitpack::PackedPayload;
use crate::kernels::tree::HuffNode;

/// Decodes `payload` against `root`, returning the recovered symbols.
pub fn decode(root: &HuffNode, payload: &PackedPayload) -> Result<Vec<u8>, HuffpackError> {
    let needed = PackedPayload::byte_len(payload.bit_count);
    if (payload.bytes.len() as u64) < needed {
        return Err(HuffpackError::CorruptPayload(format!(
            "payload declares {} bits ({} bytes) but only {} bytes are present",
            payload.bit_count,
            needed,
            payload.bytes.len()
        )));
    }

    let bits = &BitSlice::<u8, Msb0>::from_slice(&payload.bytes)[..payload.bit_count as usize];

    // Single-symbol alphabet: the tree is one leaf and every code is the
    // single bit 0.
    if let HuffNode::Leaf { symbol } = root {
        let mut out = Vec::with_capacity(bits.len());
        for bit in bits.iter().by_vals() {
            if bit {
                return Err(HuffpackError::CorruptPayload(
                    "expected the one-bit code 0 for a single-symbol tree".to_string(),
                ));
            }
            out.push(*symbol);
        }
        return Ok(out);
    }

    let mut out = Vec::new();
    let mut node = root;
    for bit in bits.iter().by_vals() {
        let next = match node {
            HuffNode::Internal { left, right } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // The cursor resets to the root on every emitted symbol, so it
            // can only rest on an internal node here.
            HuffNode::Leaf { .. } => {
                return Err(HuffpackError::InternalError(
                    "decode cursor rested on a leaf".to_string(),
                ))
            }
        };

        if let HuffNode::Leaf { symbol } = next {
            out.push(*symbol);
            node = root;
        } else {
            node = next;
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(HuffpackError::CorruptPayload(
            "bitstream ended in the middle of a code".to_string(),
        ));
    }

    Ok(out)
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{bitpack, codebook::CodeBook, frequency, tree};

    fn encode_parts(input: &[u8]) -> (HuffNode, PackedPayload) {
        let root = tree::build_tree(&frequency::count(input)).unwrap();
        let payload = bitpack::pack(input, &CodeBook::derive(&root)).unwrap();
        (root, payload)
    }

    #[test]
    fn test_decode_recovers_original_sequence() {
        let input = b"abracadabra alakazam";
        let (root, payload) = encode_parts(input);
        assert_eq!(decode(&root, &payload).unwrap(), input);
    }

    #[test]
    fn test_decode_single_symbol_payload() {
        let (root, payload) = encode_parts(b"aaaa");
        assert_eq!(decode(&root, &payload).unwrap(), b"aaaa");
    }

    #[test]
    fn test_decode_zero_bits_is_empty() {
        let (root, _) = encode_parts(b"ab");
        let empty = PackedPayload::empty();
        assert!(decode(&root, &empty).unwrap().is_empty());
    }

    #[test]
    fn test_one_bit_set_on_single_symbol_tree_is_corrupt() {
        let root = HuffNode::Leaf { symbol: b'a' };
        let payload = PackedPayload {
            bytes: vec![0b0100_0000],
            bit_count: 2,
        };
        assert!(matches!(
            decode(&root, &payload),
            Err(HuffpackError::CorruptPayload(_))
        ));
    }

    #[test]
    fn test_missing_payload_bytes_are_corrupt() {
        let (root, mut payload) = encode_parts(b"entropy entropy entropy");
        payload.bytes.pop();
        assert!(matches!(
            decode(&root, &payload),
            Err(HuffpackError::CorruptPayload(_))
        ));
    }

    #[test]
    fn test_dangling_cursor_is_corrupt() {
        // Truncating the bit count mid-code leaves the cursor off the root.
        let input = b"skewed aaaaaaaaaaaaaaaa b c d e";
        let (root, mut payload) = encode_parts(input);
        payload.bit_count -= 1;
        let result = decode(&root, &payload);
        match result {
            // Dropping one bit either cuts the last code short...
            Err(HuffpackError::CorruptPayload(_)) => {}
            // ...or cannot produce the original input.
            Ok(decoded) => assert_ne!(decoded, input),
            Err(other) => panic!("unexpected error kind: {other}"),
        }
    }
}
