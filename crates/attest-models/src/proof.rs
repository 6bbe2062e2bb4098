//! # Proof Record
//!
//! The structured signature record attached to every signed document.
//! One proof attaches to a credential or challenge request; an ordered
//! sequence of proofs (a proof *set*) attaches to a presentation.
//!
//! The `type` field names the signature suite and is derived from the key
//! source's algorithm name (`"Ed25519"` → `"Ed25519Signature2019"`), so it
//! is a plain string here rather than a closed enum.
//!
//! ## Signing Invariant
//!
//! `signatureValue` is optional and omitted from serialization while
//! unset. A freshly built skeleton proof therefore serializes exactly like
//! a signed proof with its signature stripped — which is what makes the
//! signable payload reproducible at verification time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use attest_core::Timestamp;

/// A cryptographic proof: signature suite, creation time, the public key
/// that signed, a nonce, and the signature itself once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    /// The signature suite name (e.g. `"Ed25519Signature2019"`).
    #[serde(rename = "type")]
    pub proof_type: String,

    /// When the proof was created (UTC). Part of the signed payload:
    /// changing it invalidates the signature.
    pub created: DateTime<Utc>,

    /// The full derived public key that signed, hex-encoded. Recorded so
    /// verification is stateless — no re-derivation from key indices.
    #[serde(rename = "verificationMethod")]
    pub verification_method: String,

    /// Nonce binding the proof to a correspondence/session, or a fresh
    /// UUID when no correspondence id was supplied.
    pub nonce: String,

    /// Hex-encoded signature bytes; absent on an unsigned skeleton.
    #[serde(
        rename = "signatureValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub signature_value: Option<String>,
}

impl Proof {
    /// Build an unsigned skeleton proof.
    ///
    /// `created` defaults to the current UTC time and `nonce` to a fresh
    /// UUID v4 when not supplied.
    pub fn new(
        proof_type: impl Into<String>,
        verification_method: impl Into<String>,
        created: Option<Timestamp>,
        nonce: Option<String>,
    ) -> Self {
        Self {
            proof_type: proof_type.into(),
            created: *created.unwrap_or_else(Timestamp::now).as_datetime(),
            verification_method: verification_method.into(),
            nonce: nonce.unwrap_or_else(|| Uuid::new_v4().to_string()),
            signature_value: None,
        }
    }
}
