//! # Ed25519 Keys, Signatures, and Address Derivation
//!
//! Wrappers over `ed25519-dalek` shaped for the registry's transaction
//! layer: a [`KeyPair`] signs only [`CanonicalBytes`], a [`PublicKey`]
//! verifies, and [`derive_address`] maps a verifying key to the 32-byte
//! address scalar the registry stores as owner and signer.
//!
//! The address of an account is `SHA-256(verifying key bytes)`. Because
//! SHA-256 output is never all-zero for a valid key, derived addresses
//! always pass the registry's non-zero caller check.

use ed25519_dalek::{Signer as _, Verifier as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use axle_core::{Address, CanonicalBytes, CryptoError, Scalar};

/// An Ed25519 public key (32 bytes) for signature verification.
///
/// Serializes as a hex-encoded string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 32]);

/// An Ed25519 signature (64 bytes). Serializes as a hex-encoded string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; 64]);

/// An Ed25519 key pair for signing transactions.
///
/// Does not implement `Serialize` — private keys must not leak into logs,
/// fixtures, or artifacts.
pub struct KeyPair {
    signing_key: ed25519_dalek::SigningKey,
}

/// Derive the caller address for a verifying key.
///
/// `Address = Scalar(SHA-256(public key bytes))`. This is the single
/// mapping from key material to the address namespace; the registry only
/// ever sees the derived scalar.
pub fn derive_address(public_key: &PublicKey) -> Address {
    let hash = Sha256::digest(public_key.0);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Address::new(Scalar::from_bytes(bytes))
}

// ---------------------------------------------------------------------------
// PublicKey impls
// ---------------------------------------------------------------------------

impl PublicKey {
    /// The raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let scalar = Scalar::from_hex(hex)
            .map_err(|e| CryptoError::KeyError(format!("invalid public key hex: {e}")))?;
        Ok(Self(*scalar.as_bytes()))
    }

    /// Verify a signature over canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::KeyError`] if the key bytes are not a valid
    /// curve point, or [`CryptoError::VerificationFailed`] if the
    /// signature does not match.
    pub fn verify(
        &self,
        data: &CanonicalBytes,
        signature: &Signature,
    ) -> Result<(), CryptoError> {
        let vk = ed25519_dalek::VerifyingKey::from_bytes(&self.0)
            .map_err(|e| CryptoError::KeyError(format!("invalid public key: {e}")))?;
        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
        vk.verify(data.as_bytes(), &sig)
            .map_err(|e| CryptoError::VerificationFailed(e.to_string()))
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "PublicKey({prefix}...)")
    }
}

// ---------------------------------------------------------------------------
// Signature impls
// ---------------------------------------------------------------------------

impl Signature {
    /// The raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Render as lowercase hex.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse from a 128-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 128 {
            return Err(CryptoError::VerificationFailed(format!(
                "signature hex must be 128 chars, got {}",
                hex.len()
            )));
        }
        let mut bytes = [0u8; 64];
        for (i, chunk) in bytes.iter_mut().enumerate() {
            let pos = i * 2;
            *chunk = u8::from_str_radix(&hex[pos..pos + 2], 16)
                .map_err(|e| CryptoError::VerificationFailed(format!("invalid hex: {e}")))?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Signature({prefix}...)")
    }
}

// ---------------------------------------------------------------------------
// KeyPair impls
// ---------------------------------------------------------------------------

impl KeyPair {
    /// Generate a new random key pair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        Self {
            signing_key: ed25519_dalek::SigningKey::generate(&mut csprng),
        }
    }

    /// Create a key pair from a raw 32-byte seed.
    ///
    /// Deterministic — the same seed always produces the same key pair.
    /// Test fixtures use fixed seeds so addresses are stable.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// The public half of this key pair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// The caller address derived from this key pair's public key.
    pub fn address(&self) -> Address {
        derive_address(&self.public_key())
    }

    /// Sign canonical bytes.
    ///
    /// The payload MUST already be canonicalized; signing raw bytes is not
    /// expressible through this API.
    pub fn sign(&self, data: &CanonicalBytes) -> Signature {
        Signature(self.signing_key.sign(data.as_bytes()).to_bytes())
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyPair(<private>)")
    }
}
