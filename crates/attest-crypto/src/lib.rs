//! # attest-crypto — Key Primitive for the Attest Toolkit
//!
//! This crate provides the cryptographic capability the signing layer is
//! built against:
//!
//! - **[`KeySource`]** (`source.rs`): the capability trait — derive a
//!   public key, sign a payload, verify a payload, name the algorithm —
//!   keyed by an [`KeyRef`] (account index, key index) pair. Signer code
//!   depends only on this trait, so elliptic-curve backends can be swapped
//!   without touching proof logic.
//!
//! - **[`SeedKeySource`]** (`seed.rs`): the concrete implementation —
//!   deterministic Ed25519 keypairs derived from a 32-byte master seed
//!   with domain-separated SHA-256.
//!
//! - **[`PublicKey`] / [`Signature`]** (`keys.rs`): newtypes over raw key
//!   material with hex serde, so malformed lengths are impossible past the
//!   parsing boundary.
//!
//! ## Security Invariants
//!
//! - Signing input is `&CanonicalBytes` — you cannot sign raw bytes.
//!   All signed data has been canonicalized, preventing signature
//!   malleability from non-canonical serialization.
//! - Private key material is never serialized, logged, or exposed through
//!   `Debug`; master seeds are zeroized on drop.
//! - `verify_payload` returns `false` for any mismatch — a bad signature
//!   is a negative answer, not an error.

pub mod error;
pub mod keys;
pub mod seed;
pub mod source;

// Re-export primary types.
pub use error::CryptoError;
pub use keys::{PublicKey, Signature};
pub use seed::SeedKeySource;
pub use source::{KeyRef, KeySource};
