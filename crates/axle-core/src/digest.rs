//! # State Commitment Digests
//!
//! The `state_hash` anchored by the registry is a commitment computed
//! off-chain over a vehicle state snapshot. This module is the sanctioned
//! pipeline from structured state to that commitment:
//! [`CanonicalBytes`] → SHA-256 → [`StateHash`].
//!
//! ## Security Invariant
//!
//! [`sha256_digest()`] accepts only `&CanonicalBytes`, not raw `&[u8]`.
//! No code path can commit to bytes that did not pass through the
//! canonicalization pipeline, so independently produced commitments over
//! equal snapshots are byte-equal.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::CanonicalizationError;
use crate::identity::StateHash;
use crate::scalar::Scalar;

/// Compute a SHA-256 digest over canonical bytes.
///
/// The result is returned as a [`Scalar`] so it can flow directly into the
/// registry's value types.
pub fn sha256_digest(data: &CanonicalBytes) -> Scalar {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Scalar::from_bytes(bytes)
}

/// Compute the state commitment for a vehicle state snapshot.
///
/// Canonicalizes the snapshot and hashes it. This is the function an
/// off-chain producer calls before submitting an attestation.
///
/// # Errors
///
/// Returns [`CanonicalizationError`] if the snapshot cannot be
/// canonicalized (floats, serialization failure). Nothing is hashed in
/// that case.
pub fn state_commitment(snapshot: &impl Serialize) -> Result<StateHash, CanonicalizationError> {
    let canonical = CanonicalBytes::new(snapshot)?;
    Ok(StateHash::new(sha256_digest(&canonical)))
}
