//! This file is the root of the `huffpack` Rust crate.
//!
//! huffpack is a lossless Huffman entropy coder: it builds a prefix-free
//! binary code from symbol frequencies, packs a byte stream into a compact
//! bitstream, and reconstructs the exact original bytes from the artifact
//! alone. The artifact embeds the serialized tree and the exact payload bit
//! count, so decoding never needs the original input.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod api;
pub mod artifact;
pub mod kernels;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use api::{analyze, decode, encode, CompressionStats};
pub use error::HuffpackError;
