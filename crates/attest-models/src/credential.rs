//! # Verifiable Credential
//!
//! A single claim document with exactly one embedded [`Proof`]. Owned
//! standalone or embedded inside a presentation — in the latter case its
//! proof stays untouched by the presentation's own proof set.
//!
//! The envelope structure is rigid; `credentialSubject` is intentionally
//! extensible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use attest_core::CanonicalBytes;

use crate::error::ModelError;
use crate::proof::Proof;

/// The mandatory entry in a credential's `type` list.
pub const CREDENTIAL_TYPE: &str = "VerifiableCredential";

/// A pointer to a revocation/status registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialStatus {
    /// The status scheme (e.g. `"vcStatusRegistry2019"`).
    #[serde(rename = "type")]
    pub status_type: String,
    /// The registry entry identifier.
    pub id: String,
}

/// Caller-supplied fields of a credential, without the proof.
///
/// Generators consume these by value and return the constructed document,
/// so caller state is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialParams {
    /// JSON-LD context URIs, if any.
    pub context: Option<Vec<serde_json::Value>>,
    /// Credential identifier (URN or DID).
    pub id: Option<String>,
    /// Credential type(s). Must include `"VerifiableCredential"`.
    pub credential_type: Vec<String>,
    /// Issuer identifier (DID).
    pub issuer: String,
    /// When the credential was issued (UTC).
    pub issuance_date: DateTime<Utc>,
    /// The claim payload — extensible.
    pub credential_subject: serde_json::Value,
    /// Optional status registry pointer.
    pub credential_status: Option<CredentialStatus>,
}

/// A W3C-style Verifiable Credential with exactly one proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiableCredential {
    /// JSON-LD context URIs.
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<serde_json::Value>>,

    /// Credential identifier (URN or DID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Credential type(s). Must include `"VerifiableCredential"`.
    #[serde(rename = "type")]
    pub credential_type: Vec<String>,

    /// Issuer identifier (DID).
    pub issuer: String,

    /// When the credential was issued (UTC).
    #[serde(rename = "issuanceDate")]
    pub issuance_date: DateTime<Utc>,

    /// The claim payload — extensible per the W3C data model.
    #[serde(rename = "credentialSubject")]
    pub credential_subject: serde_json::Value,

    /// Optional status registry pointer.
    #[serde(
        rename = "credentialStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub credential_status: Option<CredentialStatus>,

    /// The credential's proof. Exactly one.
    pub proof: Proof,
}

impl VerifiableCredential {
    /// Construct a credential from params plus a proof, validating
    /// structural requirements.
    pub fn new(params: CredentialParams, proof: Proof) -> Result<Self, ModelError> {
        let credential = Self {
            context: params.context,
            id: params.id,
            credential_type: params.credential_type,
            issuer: params.issuer,
            issuance_date: params.issuance_date,
            credential_subject: params.credential_subject,
            credential_status: params.credential_status,
            proof,
        };
        credential.validate()?;
        Ok(credential)
    }

    /// Check structural requirements: a non-empty `type` list containing
    /// `"VerifiableCredential"`, a non-empty issuer, and a non-null
    /// subject.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.credential_type.iter().any(|t| t == CREDENTIAL_TYPE) {
            return Err(ModelError::NotACredential);
        }
        if self.issuer.is_empty() {
            return Err(ModelError::MissingField("issuer"));
        }
        if self.credential_subject.is_null() {
            return Err(ModelError::MissingField("credentialSubject"));
        }
        Ok(())
    }

    /// Compute the canonical signable payload: the credential serialized
    /// with `proof.signatureValue` absent.
    ///
    /// Works on a serialized copy — the credential itself is not mutated.
    pub fn signing_input(&self) -> Result<CanonicalBytes, ModelError> {
        let mut val = serde_json::to_value(self)?;
        if let Some(proof) = val.get_mut("proof").and_then(|p| p.as_object_mut()) {
            proof.remove("signatureValue");
        }
        Ok(CanonicalBytes::from_value(val)?)
    }

    /// Parse a credential from its JSON text form and validate it.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let credential: Self = serde_json::from_str(text)?;
        credential.validate()?;
        Ok(credential)
    }

    /// Serialize the credential to its JSON text form.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }
}
