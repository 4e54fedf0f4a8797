//! # axle-dispatch — Transaction Submission and Caller Authentication
//!
//! The registry consumes exactly two facts from its environment: "a call
//! originates from address A" and "the call carries these arguments".
//! This crate is that environment. It turns signed transaction envelopes
//! into authenticated registry calls:
//!
//! ```text
//! Account ── sign_call ──▶ SignedCall ── execute ──▶ Dispatcher ──▶ VehicleRegistry
//! ```
//!
//! - [`Call`] is the externally callable surface: the two mutating entry
//!   points as data.
//! - [`SignedCall`] carries a call, a per-account nonce, and an Ed25519
//!   signature over the canonical bytes of `(call, nonce)`.
//! - [`Dispatcher::execute`] verifies the signature, derives the caller
//!   address from the verifying key, enforces nonce order, and applies
//!   the call. [`Dispatcher::dispatch`] is the raw entry point for an
//!   environment that already authenticated its caller.
//! - [`Account`] is a local keypair wrapper used by tests and examples to
//!   drive calls, standing in for an account-abstraction wallet.
//!
//! A transaction that fails signature or nonce checks never reaches the
//! registry. A transaction the registry rejects consumes its nonce but
//! leaves the registry tables unchanged.

pub mod account;
pub mod call;
pub mod dispatcher;
pub mod error;

pub use account::Account;
pub use call::{Call, SignedCall};
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
