//! This module packs a symbol stream into bytes using a derived code table.
//!
//! Codes are concatenated MSB-first, eight bits per output byte, with the
//! final partial byte zero-padded. The exact bit count travels with the bytes:
//! the byte length alone cannot distinguish trailing padding from real code
//! bits, so the count is mandatory metadata, not an optimization.

use bitvec::prelude::*;

use crate::error::HuffpackError;
use crate::kernels::codebook::CodeBook;

/// A packed bitstream plus its exact meaningful bit length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPayload {
    pub bytes: Vec<u8>,
    pub bit_count: u64,
}

impl PackedPayload {
    pub fn empty() -> Self {
        PackedPayload {
            bytes: Vec::new(),
            bit_count: 0,
        }
    }

    /// The number of bytes required to hold `bit_count` bits.
    pub fn byte_len(bit_count: u64) -> u64 {
        bit_count.div_ceil(8)
    }
}

/// Concatenates the code of each input symbol into one packed payload.
pub fn pack(input: &[u8], book: &CodeBook) -> Result<PackedPayload, HuffpackError> {
    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(input.len() * 8);

    for &symbol in input {
        let code = book.code(symbol).ok_or_else(|| {
            HuffpackError::InternalError(format!(
                "symbol {:#04x} has no entry in the code table",
                symbol
            ))
        })?;
        bits.extend_from_bitslice(code);
    }

    let bit_count = bits.len() as u64;
    // into_vec() hands back the backing buffer; unused trailing bits in the
    // final byte are zero.
    Ok(PackedPayload {
        bytes: bits.into_vec(),
        bit_count,
    })
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{codebook::CodeBook, frequency, tree};

    fn book_for(input: &[u8]) -> CodeBook {
        let table = frequency::count(input);
        let root = tree::build_tree(&table).unwrap();
        CodeBook::derive(&root)
    }

    #[test]
    fn test_pack_single_symbol_input() {
        let input = b"aaaa";
        let payload = pack(input, &book_for(input)).unwrap();
        // Four one-bit codes, all zero, in one zero-padded byte.
        assert_eq!(payload.bit_count, 4);
        assert_eq!(payload.bytes, vec![0b0000_0000]);
    }

    #[test]
    fn test_pack_two_symbol_input_is_msb_first() {
        // "aaab": 'b' -> "0", 'a' -> "1" (rarer symbol pops first, lands left).
        let input = b"aaab";
        let payload = pack(input, &book_for(input)).unwrap();
        assert_eq!(payload.bit_count, 4);
        assert_eq!(payload.bytes, vec![0b1110_0000]);
    }

    #[test]
    fn test_pack_empty_input() {
        let payload = pack(&[], &book_for(b"ab")).unwrap();
        assert_eq!(payload.bit_count, 0);
        assert!(payload.bytes.is_empty());
    }

    #[test]
    fn test_packed_bit_count_beats_raw_size_for_skewed_input() {
        let input = b"aaaaaaaab";
        let payload = pack(input, &book_for(input)).unwrap();
        assert!(payload.bit_count < 8 * input.len() as u64);
    }

    #[test]
    fn test_byte_len_rounds_up() {
        assert_eq!(PackedPayload::byte_len(0), 0);
        assert_eq!(PackedPayload::byte_len(1), 1);
        assert_eq!(PackedPayload::byte_len(8), 1);
        assert_eq!(PackedPayload::byte_len(9), 2);
    }

    #[test]
    fn test_byte_length_matches_declared_bits() {
        let input = b"entropy coding packs bits tightly";
        let payload = pack(input, &book_for(input)).unwrap();
        assert_eq!(
            payload.bytes.len() as u64,
            PackedPayload::byte_len(payload.bit_count)
        );
    }
}
