//! # Domain Identity Newtypes
//!
//! Newtype wrappers around [`Scalar`] for every identifier namespace the
//! registry touches. These prevent accidental identifier confusion — you
//! cannot pass a `StateId` where a `VehicleId` is expected, and a caller
//! `Address` never masquerades as a commitment.
//!
//! ## Security Invariant
//!
//! Type-level distinction between identifier namespaces prevents
//! cross-namespace confusion where one kind of scalar is substituted for
//! another at a call site.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// Unique identifier for a registered vehicle. Never reused once claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub Scalar);

/// Caller-supplied checkpoint identifier within a vehicle's state log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(pub Scalar);

/// An authenticated caller address supplied by the execution environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub Scalar);

/// An off-chain commitment over vehicle state at some checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateHash(pub Scalar);

macro_rules! scalar_newtype_impls {
    ($name:ident, $prefix:literal) => {
        impl $name {
            /// Wrap a raw scalar.
            pub const fn new(scalar: Scalar) -> Self {
                Self(scalar)
            }

            /// The underlying scalar value.
            pub const fn as_scalar(&self) -> &Scalar {
                &self.0
            }

            /// Whether this is the zero (absent) value.
            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl From<Scalar> for $name {
            fn from(scalar: Scalar) -> Self {
                Self(scalar)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(Scalar::from_u64(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

scalar_newtype_impls!(VehicleId, "vehicle");
scalar_newtype_impls!(StateId, "state");
scalar_newtype_impls!(Address, "addr");
scalar_newtype_impls!(StateHash, "commit");

impl Address {
    /// The zero address — never a valid owner or signer.
    pub const ZERO: Address = Address(Scalar::ZERO);
}

impl StateHash {
    /// The zero commitment — the ledger-surface "absent" value.
    pub const ZERO: StateHash = StateHash(Scalar::ZERO);
}
