//! Pure, stateless kernels for each stage of the Huffman pipeline: frequency
//! tallying, tree construction, code-table derivation, bit packing, tree
//! serialization, and the decode walk. None of them touch I/O or hold state
//! across calls; the artifact and api layers compose them.

pub mod bitpack;
pub mod codebook;
pub mod decoder;
pub mod frequency;
pub mod tree;
pub mod tree_codec;
