// In: src/error.rs

//! This module defines the single, unified error type for the entire huffpack
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffpackError {
    // =========================================================================
    // === Format Errors (the artifact itself is inconsistent)
    // =========================================================================
    #[error("Malformed artifact: {0}")]
    MalformedArtifact(String),

    #[error("Corrupt payload: {0}")]
    CorruptPayload(String),

    // =========================================================================
    // === API Misuse & Bugs
    // =========================================================================
    /// A negative frequency was handed directly to the tree builder. Not
    /// reachable through the normal encode path.
    #[error("Invalid symbol frequency: {0}")]
    InvalidFrequency(i64),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, raised while rendering stats.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
