//! # Dispatch Errors
//!
//! Failures raised before a call reaches the registry (signature, nonce,
//! canonicalization) plus registry rejections propagated unchanged.

use thiserror::Error;

use axle_core::{Address, CanonicalizationError};
use axle_registry::RegistryError;

/// Errors returned by the dispatcher.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The envelope's signature does not match its payload and key.
    #[error("transaction signature rejected: {0}")]
    BadSignature(String),

    /// The envelope's nonce is not the account's next expected value.
    #[error("bad nonce for {address}: expected {expected}, got {got}")]
    BadNonce {
        /// The submitting account's derived address.
        address: Address,
        /// The nonce the dispatcher expected next.
        expected: u64,
        /// The nonce the envelope carried.
        got: u64,
    },

    /// The signing payload could not be canonicalized.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// The registry rejected the call.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
