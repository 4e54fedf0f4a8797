//! # axle-core — Foundational Types for the Axle Registry
//!
//! This crate is the bedrock of the Axle workspace. It defines the value
//! types that cross the registry boundary and the canonicalization pipeline
//! that produces state commitments. Every other crate in the workspace
//! depends on `axle-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Opaque scalars.** Identities, addresses, and commitments are all
//!    fixed-width 32-byte [`Scalar`] values. The registry compares and
//!    stores them; it never interprets them.
//!
//! 2. **Newtype wrappers for domain primitives.** [`VehicleId`],
//!    [`StateId`], [`Address`], [`StateHash`] — you cannot pass a state id
//!    where a vehicle id is expected.
//!
//! 3. **`CanonicalBytes` newtype.** All commitment computation flows
//!    through [`CanonicalBytes::new()`]. No raw `serde_json::to_vec()` for
//!    digests.
//!
//! 4. **`sha256_digest()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that every digest path flows through canonicalization.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `axle-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod scalar;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, state_commitment};
pub use error::{CanonicalizationError, CryptoError};
pub use identity::{Address, StateHash, StateId, VehicleId};
pub use scalar::{Scalar, ScalarParseError};
