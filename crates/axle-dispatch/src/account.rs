//! # Local Accounts
//!
//! A thin wrapper pairing a keypair with its derived caller address. This
//! is the stand-in for an account-abstraction wallet: tests and examples
//! build accounts from fixed seeds and use them to sign transactions
//! against the dispatcher.

use axle_core::{Address, CanonicalizationError};
use axle_crypto::{KeyPair, PublicKey};

use crate::call::{Call, SignedCall};

/// A locally held account: a keypair and the address derived from it.
#[derive(Debug)]
pub struct Account {
    keypair: KeyPair,
}

impl Account {
    /// Create an account with a fresh random keypair.
    pub fn generate() -> Self {
        Self {
            keypair: KeyPair::generate(),
        }
    }

    /// Create an account from a fixed 32-byte seed.
    ///
    /// Deterministic, so fixtures get stable addresses across runs.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            keypair: KeyPair::from_seed(seed),
        }
    }

    /// The caller address the registry will see for this account.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// The account's verifying key.
    pub fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    /// Sign a call at the given nonce.
    pub fn sign_call(&self, call: Call, nonce: u64) -> Result<SignedCall, CanonicalizationError> {
        SignedCall::sign(&self.keypair, call, nonce)
    }
}
