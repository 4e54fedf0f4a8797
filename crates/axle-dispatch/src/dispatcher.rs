//! # The Dispatcher
//!
//! Applies transactions to a [`VehicleRegistry`] one at a time. Two entry
//! points:
//!
//! - [`Dispatcher::execute`] — full authentication: verify the envelope
//!   signature, derive the caller address from the verifying key, enforce
//!   per-account nonce order, then apply the call.
//! - [`Dispatcher::dispatch`] — raw: the surrounding environment has
//!   already authenticated the caller and supplies its address directly.
//!
//! Nonces are consumed once signature and nonce checks pass, even if the
//! registry then rejects the call; the registry tables themselves are
//! only written by a fully successful call.

use std::collections::BTreeMap;

use axle_core::Address;
use axle_crypto::derive_address;
use axle_registry::VehicleRegistry;

use crate::call::{signing_payload, Call, SignedCall};
use crate::error::DispatchError;

/// Serial transaction processor in front of a [`VehicleRegistry`].
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: VehicleRegistry,
    nonces: BTreeMap<Address, u64>,
}

impl Dispatcher {
    /// Create a dispatcher over an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify and apply a signed transaction.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::BadSignature`] if the signature does not match.
    /// - [`DispatchError::BadNonce`] if the nonce is not the account's
    ///   next expected value (replays land here).
    /// - [`DispatchError::Registry`] if the registry rejects the call;
    ///   the nonce is still consumed.
    pub fn execute(&mut self, tx: &SignedCall) -> Result<(), DispatchError> {
        let payload = signing_payload(&tx.call, tx.nonce)?;
        tx.public_key
            .verify(&payload, &tx.signature)
            .map_err(|e| DispatchError::BadSignature(e.to_string()))?;

        let caller = derive_address(&tx.public_key);
        let expected = self.next_nonce(caller);
        if tx.nonce != expected {
            return Err(DispatchError::BadNonce {
                address: caller,
                expected,
                got: tx.nonce,
            });
        }
        self.nonces.insert(caller, expected + 1);

        self.dispatch(caller, tx.call.clone())
    }

    /// Apply a call on behalf of an already-authenticated caller.
    pub fn dispatch(&mut self, caller: Address, call: Call) -> Result<(), DispatchError> {
        tracing::debug!(caller = %caller, call = ?call, "dispatching call");
        match call {
            Call::RegisterVehicle {
                vehicle_id,
                signer_address,
            } => self
                .registry
                .register_vehicle(caller, vehicle_id, signer_address)?,
            Call::AttestState {
                vehicle_id,
                state_id,
                state_hash,
            } => self
                .registry
                .attest_state(caller, vehicle_id, state_id, state_hash)?,
        }
        Ok(())
    }

    /// The next nonce expected from an address.
    pub fn next_nonce(&self, address: Address) -> u64 {
        self.nonces.get(&address).copied().unwrap_or(0)
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }
}
