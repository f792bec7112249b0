// In: src/api.rs

//! The stateless public API of the huffpack library. Each function is a pure
//! in-memory transform over one input; no state survives between calls.

use serde::Serialize;

use crate::artifact::Artifact;
use crate::error::HuffpackError;
use crate::kernels::bitpack::{self, PackedPayload};
use crate::kernels::codebook::CodeBook;
use crate::kernels::{decoder, frequency, tree};

/// Compresses a byte sequence into one self-contained artifact.
///
/// The artifact carries the serialized tree and the exact payload bit count,
/// so `decode` needs nothing but the artifact itself.
pub fn encode(input: &[u8]) -> Result<Vec<u8>, HuffpackError> {
    // 1. Tally frequencies and build the prefix tree.
    let table = frequency::count(input);
    let Some(root) = tree::build_tree(&table) else {
        log::debug!("empty input, emitting the zero-symbol artifact");
        return Artifact {
            tree: None,
            payload: PackedPayload::empty(),
        }
        .to_bytes();
    };

    // 2. Derive the code table and pack the symbol stream.
    let book = CodeBook::derive(&root);
    let payload = bitpack::pack(input, &book)?;
    log::debug!(
        "packed {} symbols ({} distinct) into {} bits",
        input.len(),
        book.len(),
        payload.bit_count
    );

    // 3. Assemble and serialize the final artifact.
    Artifact {
        tree: Some(root),
        payload,
    }
    .to_bytes()
}

/// Recovers the original byte sequence from an `encode` artifact.
pub fn decode(bytes: &[u8]) -> Result<Vec<u8>, HuffpackError> {
    let artifact = Artifact::from_bytes(bytes)?;
    let Some(root) = &artifact.tree else {
        return Ok(Vec::new());
    };
    decoder::decode(root, &artifact.payload)
}

/// Size breakdown of one artifact, produced without decoding the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressionStats {
    /// Number of distinct symbols in the encoded input.
    pub distinct_symbols: u32,
    /// Size of the serialized tree section in bytes.
    pub tree_size: usize,
    /// Size of the packed payload in bytes.
    pub payload_size: usize,
    /// Exact number of meaningful payload bits.
    pub payload_bits: u64,
    /// Total artifact size in bytes.
    pub total_size: usize,
}

/// Analyzes an artifact without fully decoding it. This is a facade over the
/// artifact module's `peek_info`.
pub fn analyze(bytes: &[u8]) -> Result<CompressionStats, HuffpackError> {
    let info = Artifact::peek_info(bytes)?;
    Ok(CompressionStats {
        distinct_symbols: info.distinct_symbols,
        tree_size: info.tree_size,
        payload_size: info.payload_size,
        payload_bits: info.bit_count,
        total_size: bytes.len(),
    })
}
