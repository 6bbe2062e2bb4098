//! # Key Source Abstraction
//!
//! Abstracts key derivation, signing, and verification behind a trait so
//! the proof orchestration layer never touches a concrete curve
//! implementation. Keys are addressed by an (account index, key index)
//! pair — the indices select a derived keypair; the derived public key is
//! what gets recorded in proof objects, so verification never needs the
//! indices back.

use attest_core::CanonicalBytes;

use crate::error::CryptoError;
use crate::keys::{PublicKey, Signature};

/// A reference to a derived keypair: account index plus key index.
///
/// Both indices are explicit at every call site. By convention a product
/// using a single key for all signing operations passes `KeyRef::new(0, 0)`;
/// there is deliberately no `Default` impl that would hide the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyRef {
    /// The account index in the key hierarchy.
    pub account_id: u32,
    /// The key index within the account.
    pub key_id: u32,
}

impl KeyRef {
    /// Create a key reference from an account index and key index.
    pub fn new(account_id: u32, key_id: u32) -> Self {
        Self { account_id, key_id }
    }
}

impl std::fmt::Display for KeyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.account_id, self.key_id)
    }
}

/// Trait for key derivation and signing backends.
///
/// Implementations must be `Send + Sync`: signer objects are shared across
/// threads and every operation takes `&self`. Implementations must also be
/// safe for concurrent derivation — the toolkit calls `derive_public_key`
/// and `sign_payload` from multiple threads without external locking.
///
/// Signing and verification input is `&CanonicalBytes`, never raw bytes,
/// so every signed payload went through canonical serialization.
pub trait KeySource: Send + Sync {
    /// The algorithm name, used to build proof type strings
    /// (e.g. `"Ed25519"` → `"Ed25519Signature2019"`).
    fn algorithm_name(&self) -> &'static str;

    /// Derive the public key for the given key reference.
    fn derive_public_key(&self, key: KeyRef) -> Result<PublicKey, CryptoError>;

    /// Sign a canonical payload with the keypair at the given reference.
    fn sign_payload(&self, key: KeyRef, payload: &CanonicalBytes)
        -> Result<Signature, CryptoError>;

    /// Verify a signature over a canonical payload against a public key.
    ///
    /// Returns `false` for any mismatch — wrong key, tampered payload,
    /// forged signature. A negative verification is an answer, not an
    /// error.
    fn verify_payload(
        &self,
        payload: &CanonicalBytes,
        public_key: &PublicKey,
        signature: &Signature,
    ) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ref_display() {
        assert_eq!(format!("{}", KeyRef::new(2, 5)), "2/5");
    }

    #[test]
    fn key_ref_equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(KeyRef::new(0, 0));
        set.insert(KeyRef::new(0, 0));
        set.insert(KeyRef::new(0, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn key_source_is_object_safe() {
        fn _takes_dyn(_: &dyn KeySource) {}
    }
}
