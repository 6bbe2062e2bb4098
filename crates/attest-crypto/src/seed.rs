//! # Seed-Based Key Source
//!
//! Deterministic Ed25519 key derivation from a 32-byte master seed.
//! Each (account, key) reference maps to an independent keypair via a
//! domain-separated SHA-256 of the seed and both indices, so the same
//! seed always reproduces the same key tree and no two references share
//! material.
//!
//! ## Security Invariants
//!
//! - The master seed is held in a [`Zeroizing`] buffer and wiped on drop;
//!   derived signing keys are rebuilt per operation and likewise zeroized
//!   by `ed25519-dalek`.
//! - `Debug` never prints key material.
//! - Derivation input includes a versioned domain tag; a future derivation
//!   scheme change cannot silently collide with this one.

use ed25519_dalek::{Signer, Verifier};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use attest_core::CanonicalBytes;

use crate::error::CryptoError;
use crate::keys::{hex_to_bytes, PublicKey, Signature};
use crate::source::{KeyRef, KeySource};

/// Domain tag mixed into every key derivation.
const DERIVATION_DOMAIN: &[u8] = b"attest/v1/ed25519-keyref";

/// A [`KeySource`] backed by a 32-byte master seed held in memory.
///
/// Suitable for services holding their own signing seed and for tests.
/// The seed can come from raw bytes, a hex-encoded environment variable,
/// or the OS CSPRNG.
pub struct SeedKeySource {
    seed: Zeroizing<[u8; 32]>,
}

impl SeedKeySource {
    /// Create a key source from a raw 32-byte master seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            seed: Zeroizing::new(seed),
        }
    }

    /// Load the master seed from a hex-encoded environment variable
    /// (64 hex characters encoding 32 bytes).
    pub fn from_env(var_name: &str) -> Result<Self, CryptoError> {
        let hex = std::env::var(var_name).map_err(|_| {
            CryptoError::KeyDerivation(format!("environment variable {var_name} not set"))
        })?;
        let bytes = hex_to_bytes(hex.trim())?;
        let seed: [u8; 32] = bytes.try_into().map_err(|_| {
            CryptoError::KeyDerivation(format!(
                "expected 32 bytes (64 hex chars) in {var_name}"
            ))
        })?;
        Ok(Self::from_seed(seed))
    }

    /// Generate a fresh random master seed using the OS CSPRNG.
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        rand_core::RngCore::fill_bytes(&mut rand_core::OsRng, &mut seed);
        Self::from_seed(seed)
    }

    /// Derive the Ed25519 signing key for a key reference.
    ///
    /// `seed_i = SHA-256(domain-tag ‖ master-seed ‖ account_be ‖ key_be)`
    fn derive_signing_key(&self, key: KeyRef) -> ed25519_dalek::SigningKey {
        let mut hasher = Sha256::new();
        hasher.update(DERIVATION_DOMAIN);
        hasher.update(self.seed.as_ref());
        hasher.update(key.account_id.to_be_bytes());
        hasher.update(key.key_id.to_be_bytes());
        let derived: [u8; 32] = hasher.finalize().into();
        ed25519_dalek::SigningKey::from_bytes(&derived)
    }
}

impl KeySource for SeedKeySource {
    fn algorithm_name(&self) -> &'static str {
        "Ed25519"
    }

    fn derive_public_key(&self, key: KeyRef) -> Result<PublicKey, CryptoError> {
        let signing_key = self.derive_signing_key(key);
        Ok(PublicKey(signing_key.verifying_key().to_bytes()))
    }

    fn sign_payload(
        &self,
        key: KeyRef,
        payload: &CanonicalBytes,
    ) -> Result<Signature, CryptoError> {
        let signing_key = self.derive_signing_key(key);
        let sig = signing_key.sign(payload.as_bytes());
        Ok(Signature(sig.to_bytes()))
    }

    fn verify_payload(
        &self,
        payload: &CanonicalBytes,
        public_key: &PublicKey,
        signature: &Signature,
    ) -> bool {
        let Ok(verifying_key) = public_key.to_verifying_key() else {
            return false;
        };
        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
        verifying_key.verify(payload.as_bytes(), &sig).is_ok()
    }
}

impl std::fmt::Debug for SeedKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeedKeySource(<seed>)")
    }
}
