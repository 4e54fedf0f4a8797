//! # Scalar — Opaque Fixed-Width Ledger Value
//!
//! The execution environment that feeds the registry traffics in a single
//! value type: a fixed-width field element. [`Scalar`] is its Rust
//! counterpart — 32 opaque bytes, comparable, hashable, and orderable, with
//! the all-zero value reserved as the "absent" sentinel at the ledger
//! surface.
//!
//! ## Serde
//!
//! Scalars serialize as lowercase hex strings (64 characters) for JSON
//! interoperability with off-chain tooling.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An opaque 32-byte ledger value.
///
/// Used for vehicle identities, caller addresses, state checkpoint ids,
/// and state commitments. The registry never interprets scalar contents;
/// it only compares and stores them. `Scalar::ZERO` means "absent" in
/// ledger-surface reads.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scalar([u8; 32]);

/// Error parsing a scalar from its hex representation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScalarParseError {
    /// The hex string was not exactly 64 characters.
    #[error("scalar hex must be 64 chars, got {0}")]
    BadLength(usize),

    /// The string contained a non-hex character.
    #[error("invalid hex at position {position}")]
    BadDigit {
        /// Byte offset of the offending character pair.
        position: usize,
    },
}

impl Scalar {
    /// The all-zero scalar — the ledger's "absent" sentinel.
    pub const ZERO: Scalar = Scalar([0u8; 32]);

    /// Construct a scalar from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Construct a scalar from a `u64`, big-endian in the low-order bytes.
    ///
    /// Primarily for tests and examples, where small literal identities
    /// are the norm.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// The raw 32-byte value.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether this is the zero scalar.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Render the scalar as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a scalar from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ScalarParseError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 64 {
            return Err(ScalarParseError::BadLength(hex.len()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.iter_mut().enumerate() {
            let pos = i * 2;
            *chunk = u8::from_str_radix(&hex[pos..pos + 2], 16)
                .map_err(|_| ScalarParseError::BadDigit { position: pos })?;
        }
        Ok(Self(bytes))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Scalar({prefix}...)")
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
