//! # Shared Error Types
//!
//! Error types used across the Axle workspace. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations. Each layer keeps
//! its own operation-level error enum; the types here cover the supporting
//! concerns (canonicalization, cryptography) that more than one crate
//! reports.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Commitments over floats are not deterministic across producers.
    #[error("float values are not permitted in canonical input: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error in cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key generation or parsing failed.
    #[error("key error: {0}")]
    KeyError(String),
}
