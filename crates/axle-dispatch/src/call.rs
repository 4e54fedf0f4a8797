//! # Calls and Signed Envelopes
//!
//! [`Call`] enumerates the registry's mutating entry points as data.
//! [`SignedCall`] wraps a call with the submitting account's nonce,
//! verifying key, and signature. The signed payload is the JCS-canonical
//! serialization of `{call, nonce}`, so signer and verifier cannot
//! disagree on byte representation.

use serde::{Deserialize, Serialize};

use axle_core::{Address, CanonicalBytes, CanonicalizationError, StateHash, StateId, VehicleId};
use axle_crypto::{KeyPair, PublicKey, Signature};

/// A mutating registry call, as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Call {
    /// Claim a vehicle identity; the authenticated caller becomes owner.
    RegisterVehicle {
        /// The identity to claim.
        vehicle_id: VehicleId,
        /// The address delegated to submit attestations.
        signer_address: Address,
    },
    /// Anchor a state commitment in a vehicle's log.
    AttestState {
        /// The vehicle being attested for.
        vehicle_id: VehicleId,
        /// Caller-chosen checkpoint identifier.
        state_id: StateId,
        /// Off-chain commitment over vehicle state.
        state_hash: StateHash,
    },
}

/// The byte payload an account signs: canonical `{call, nonce}`.
#[derive(Serialize)]
struct SigningPayload<'a> {
    call: &'a Call,
    nonce: u64,
}

/// Produce the canonical signing payload for a call at a nonce.
pub fn signing_payload(call: &Call, nonce: u64) -> Result<CanonicalBytes, CanonicalizationError> {
    CanonicalBytes::new(&SigningPayload { call, nonce })
}

/// A call plus the proof of who submitted it.
///
/// The caller address is not carried explicitly — it is derived from
/// `public_key` after signature verification, so a forged address field
/// is not expressible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedCall {
    /// The call to apply.
    pub call: Call,
    /// The submitting account's transaction sequence number.
    pub nonce: u64,
    /// Verifying key of the submitting account.
    pub public_key: PublicKey,
    /// Ed25519 signature over [`signing_payload`]`(call, nonce)`.
    pub signature: Signature,
}

impl SignedCall {
    /// Sign `call` at `nonce` with `keypair`.
    pub fn sign(
        keypair: &KeyPair,
        call: Call,
        nonce: u64,
    ) -> Result<Self, CanonicalizationError> {
        let payload = signing_payload(&call, nonce)?;
        let signature = keypair.sign(&payload);
        Ok(Self {
            call,
            nonce,
            public_key: keypair.public_key(),
            signature,
        })
    }
}
