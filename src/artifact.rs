//! Defines the self-describing on-disk format for one encoded artifact.
//! This module is the single source of truth for serialization,
//! deserialization, and efficient metadata peeking.
//!
//! Layout, in order:
//!   1. 4-byte big-endian distinct-symbol count `N`. `N == 0` means the input
//!      was empty and the artifact ends here.
//!   2. Pre-order serialized tree with exactly `N` leaves.
//!   3. 8-byte big-endian total payload bit count `B`.
//!   4. `ceil(B/8)` payload bytes, MSB-first, zero-padded in the final byte.

use crate::error::HuffpackError;
use crate::kernels::bitpack::PackedPayload;
use crate::kernels::frequency::ALPHABET_SIZE;
use crate::kernels::tree::HuffNode;
use crate::kernels::tree_codec;

//==================================================================================
// Format Constants
//==================================================================================
/// Size of the leading distinct-symbol count field.
const SYMBOL_COUNT_SIZE: usize = 4;
/// Size of the payload bit-count field.
const BIT_COUNT_SIZE: usize = 8;

//==================================================================================
// Public Structs
//==================================================================================

/// Metadata extracted from an artifact's header without copying the payload.
/// This is the return type of the efficient `peek_info` function.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HeaderInfo {
    /// Number of distinct symbols (leaves) declared by the header.
    pub distinct_symbols: u32,
    /// Size of the serialized tree section in bytes.
    pub tree_size: usize,
    /// Exact number of meaningful payload bits.
    pub bit_count: u64,
    /// Size of the payload section in bytes, `ceil(bit_count / 8)`.
    pub payload_size: usize,
}

/// A fully parsed artifact in memory: the reconstructed tree plus the packed
/// payload. `tree` is `None` only for the zero-symbol (empty input) artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub tree: Option<HuffNode>,
    pub payload: PackedPayload,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl Artifact {
    /// Serializes the artifact into its canonical byte form. The writer is
    /// fully deterministic: the same tree and payload always produce
    /// byte-identical output.
    pub fn to_bytes(&self) -> Result<Vec<u8>, HuffpackError> {
        let Some(tree) = &self.tree else {
            return Ok(0u32.to_be_bytes().to_vec());
        };

        let declared_len = PackedPayload::byte_len(self.payload.bit_count);
        if self.payload.bytes.len() as u64 != declared_len {
            return Err(HuffpackError::InternalError(format!(
                "payload holds {} bytes but its bit count {} requires {}",
                self.payload.bytes.len(),
                self.payload.bit_count,
                declared_len
            )));
        }

        let mut buf = Vec::with_capacity(
            SYMBOL_COUNT_SIZE + BIT_COUNT_SIZE + self.payload.bytes.len() + 3 * ALPHABET_SIZE,
        );
        buf.extend_from_slice(&(tree.leaf_count() as u32).to_be_bytes());
        tree_codec::serialize(tree, &mut buf);
        buf.extend_from_slice(&self.payload.bit_count.to_be_bytes());
        buf.extend_from_slice(&self.payload.bytes);
        Ok(buf)
    }

    /// Deserializes a full byte slice into an `Artifact`, reconstructing the
    /// tree and copying the payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HuffpackError> {
        let distinct_symbols = read_symbol_count(bytes)?;
        if distinct_symbols == 0 {
            // The zero-symbol artifact is exactly the count field.
            if bytes.len() != SYMBOL_COUNT_SIZE {
                return Err(HuffpackError::MalformedArtifact(
                    "trailing bytes after the zero-symbol header".to_string(),
                ));
            }
            return Ok(Artifact {
                tree: None,
                payload: PackedPayload::empty(),
            });
        }

        let parsed = tree_codec::deserialize(&bytes[SYMBOL_COUNT_SIZE..])?;
        if parsed.leaves != distinct_symbols as usize {
            return Err(HuffpackError::MalformedArtifact(format!(
                "tree has {} leaves but the header declares {}",
                parsed.leaves, distinct_symbols
            )));
        }

        let payload_start = SYMBOL_COUNT_SIZE + parsed.consumed;
        let (bit_count, payload_size) = read_payload_header(bytes, payload_start)?;
        let payload_bytes = &bytes[payload_start + BIT_COUNT_SIZE..];
        if payload_bytes.len() > payload_size {
            return Err(HuffpackError::MalformedArtifact(format!(
                "{} trailing bytes after the payload",
                payload_bytes.len() - payload_size
            )));
        }

        Ok(Artifact {
            tree: Some(parsed.root),
            payload: PackedPayload {
                bytes: payload_bytes.to_vec(),
                bit_count,
            },
        })
    }

    /// Peeks into an artifact's header to extract metadata without copying
    /// the payload. The tree section still has to be walked, since its length
    /// is only known by parsing it, but the tree itself is discarded.
    pub fn peek_info(bytes: &[u8]) -> Result<HeaderInfo, HuffpackError> {
        let distinct_symbols = read_symbol_count(bytes)?;
        if distinct_symbols == 0 {
            return Ok(HeaderInfo {
                distinct_symbols: 0,
                tree_size: 0,
                bit_count: 0,
                payload_size: 0,
            });
        }

        let parsed = tree_codec::deserialize(&bytes[SYMBOL_COUNT_SIZE..])?;
        if parsed.leaves != distinct_symbols as usize {
            return Err(HuffpackError::MalformedArtifact(format!(
                "tree has {} leaves but the header declares {}",
                parsed.leaves, distinct_symbols
            )));
        }

        let (bit_count, payload_size) = read_payload_header(bytes, SYMBOL_COUNT_SIZE + parsed.consumed)?;
        Ok(HeaderInfo {
            distinct_symbols,
            tree_size: parsed.consumed,
            bit_count,
            payload_size,
        })
    }
}

//==================================================================================
// Private Helpers
//==================================================================================

fn read_symbol_count(bytes: &[u8]) -> Result<u32, HuffpackError> {
    let header: [u8; SYMBOL_COUNT_SIZE] = bytes
        .get(..SYMBOL_COUNT_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| {
            HuffpackError::MalformedArtifact(format!(
                "artifact is {} bytes, too small for the symbol-count header",
                bytes.len()
            ))
        })?;
    let count = u32::from_be_bytes(header);
    if count as usize > ALPHABET_SIZE {
        return Err(HuffpackError::MalformedArtifact(format!(
            "declared symbol count {} exceeds the byte alphabet",
            count
        )));
    }
    Ok(count)
}

/// Reads the bit-count field at `offset` and validates the payload region
/// behind it. A payload shorter than its declared bit count is classified as
/// corruption (the header itself is intact), not as a malformed header.
fn read_payload_header(bytes: &[u8], offset: usize) -> Result<(u64, usize), HuffpackError> {
    let field: [u8; BIT_COUNT_SIZE] = bytes
        .get(offset..offset + BIT_COUNT_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| {
            HuffpackError::MalformedArtifact(
                "artifact ends before the payload bit-count field".to_string(),
            )
        })?;
    let bit_count = u64::from_be_bytes(field);

    let declared = PackedPayload::byte_len(bit_count);
    let available = (bytes.len() - offset - BIT_COUNT_SIZE) as u64;
    if available < declared {
        return Err(HuffpackError::CorruptPayload(format!(
            "payload declares {} bits ({} bytes) but only {} bytes remain",
            bit_count, declared, available
        )));
    }
    Ok((bit_count, declared as usize))
}

//==================================================================================
// Unit Tests
//==================================================================================
