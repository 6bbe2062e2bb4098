//! # attest-vp — Proof Orchestration for the Attest Toolkit
//!
//! The layer that turns unsigned documents into signed ones and back:
//!
//! - **[`CredentialSigner`] / [`CredentialGenerator`]** (`credential.rs`):
//!   one proof over one credential.
//! - **[`PresentationSigner`] / [`PresentationGenerator`]**
//!   (`presentation.rs`): an ordered proof *set* over a presentation —
//!   one proof per requested signing key, mutually independent.
//! - **[`ChallengeRequestSigner`] / [`ChallengeRequestGenerator`]**
//!   (`challenge.rs`): one proof over a challenge request.
//!
//! Signers are built over an `Arc<dyn KeySource>` — the key primitive
//! capability from `attest-crypto` — and never touch a concrete curve
//! implementation. Generators are thin façades: stamp a proof skeleton,
//! delegate signing, return the assembled document.
//!
//! ## Verification Contract
//!
//! `verify_*` entry points return `bool`. A cryptographic mismatch —
//! wrong key, tampered payload, forged or undecodable signature — is
//! `false`, never a panic or error. Structural failures belong to the
//! document models, upstream of this layer.

pub mod challenge;
pub mod credential;
pub mod error;
pub mod presentation;

// Re-export primary types.
pub use challenge::{ChallengeRequestGenerator, ChallengeRequestSigner};
pub use credential::{CredentialGenerator, CredentialSigner};
pub use error::SignError;
pub use presentation::{PresentationGenerator, PresentationSigner};

use attest_core::CanonicalBytes;
use attest_crypto::{KeySource, PublicKey, Signature};
use attest_models::Proof;

/// Verify one proof entry against a canonical payload.
///
/// Reads the public key from `verificationMethod` and the signature from
/// `signatureValue`; any absent or undecodable material is a mismatch,
/// not an error.
pub(crate) fn verify_proof_entry(
    key_source: &dyn KeySource,
    payload: &CanonicalBytes,
    proof: &Proof,
) -> bool {
    let Some(signature_hex) = proof.signature_value.as_deref() else {
        tracing::trace!("proof entry has no signatureValue");
        return false;
    };
    let Ok(public_key) = PublicKey::from_hex(&proof.verification_method) else {
        tracing::trace!("proof verificationMethod is not a valid public key");
        return false;
    };
    let Ok(signature) = Signature::from_hex(signature_hex) else {
        tracing::trace!("proof signatureValue is not a valid signature");
        return false;
    };
    key_source.verify_payload(payload, &public_key, &signature)
}
