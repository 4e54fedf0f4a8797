//! # Registry Errors
//!
//! One variant per rejected precondition, each carrying the identifiers
//! that triggered the rejection. A returned error guarantees that no
//! table was written by the failed call.

use thiserror::Error;

use axle_core::{Address, StateId, VehicleId};

/// Errors returned by the registry's mutating operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The vehicle identity has already been claimed.
    #[error("{vehicle_id} is already registered")]
    AlreadyRegistered {
        /// The identity that was already taken.
        vehicle_id: VehicleId,
    },

    /// The caller address resolved to zero. Should not occur when the
    /// transaction layer derives addresses from key material.
    #[error("caller address is zero")]
    InvalidCaller,

    /// The delegated signer address is zero.
    #[error("signer address is zero")]
    InvalidSigner,

    /// Attestation against a vehicle that was never registered.
    #[error("{vehicle_id} is not registered")]
    UnknownVehicle {
        /// The unregistered identity.
        vehicle_id: VehicleId,
    },

    /// The caller is not the vehicle's delegated signer.
    #[error("{caller} is not the delegated signer for {vehicle_id}")]
    Unauthorized {
        /// The vehicle the caller tried to attest for.
        vehicle_id: VehicleId,
        /// The rejected caller.
        caller: Address,
    },

    /// The checkpoint id already has a committed entry for this vehicle.
    #[error("{state_id} already attested for {vehicle_id}")]
    DuplicateStateId {
        /// The vehicle whose log already holds the entry.
        vehicle_id: VehicleId,
        /// The checkpoint id that was reused.
        state_id: StateId,
    },
}
