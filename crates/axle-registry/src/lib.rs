//! # axle-registry — Vehicle Identity and Attestation Ledger
//!
//! The [`VehicleRegistry`] binds a vehicle identity to an owning address
//! and a delegated signer address, and anchors a per-vehicle append-only
//! log of state commitments produced off-chain.
//!
//! ## Consistency Model
//!
//! - A vehicle identity is claimed exactly once; re-registration is
//!   rejected.
//! - Only the signer delegated at registration may attest for a vehicle.
//! - Each `(vehicle, state id)` log entry is write-once; duplicates are
//!   rejected rather than overwritten.
//! - Every operation validates all preconditions before its first write,
//!   so a failed call leaves the tables untouched.
//!
//! ## Caller Identity
//!
//! The registry performs no authentication. Each mutating operation takes
//! the already-authenticated caller [`Address`](axle_core::Address) as an
//! explicit parameter, supplied by whatever transaction layer sits in
//! front of it.
//!
//! ## Serialization Model
//!
//! All calls are applied one at a time: mutation requires `&mut
//! VehicleRegistry`, so the borrow checker provides the global
//! serialization the ledger model assumes. Callers needing shared access
//! put the registry behind their own lock.

pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::VehicleRegistry;
