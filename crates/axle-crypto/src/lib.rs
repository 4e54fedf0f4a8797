//! # axle-crypto — Signing Keys and Caller Addresses
//!
//! Ed25519 key material for the transaction submission layer. The registry
//! itself never verifies signatures — it consumes an already-authenticated
//! caller [`Address`] — but the layer that authenticates transactions
//! needs keypairs, signatures, and a deterministic mapping from a
//! verifying key to the address scalar the registry stores.
//!
//! ## Security Invariant
//!
//! - Signing input MUST be `&CanonicalBytes` — you cannot sign raw bytes.
//!   Both sides of a signature therefore serialize the payload through the
//!   same canonicalization pipeline.
//! - Private keys are never serialized or logged. [`KeyPair`] does not
//!   implement `Serialize` and its `Debug` output is redacted.
//!
//! ## Serde
//!
//! Public keys and signatures serialize as hex-encoded strings.

pub mod keys;

pub use keys::{derive_address, KeyPair, PublicKey, Signature};
