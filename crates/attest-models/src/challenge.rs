//! # Challenge Request
//!
//! The handshake document a verifier sends to open a credential exchange:
//! which claims the counterparty should attest, which it should disclose
//! for verification, and where to post the response. Structurally parallel
//! to a credential — one embedded [`Proof`], same clear-before-serialize
//! signing discipline.
//!
//! The `correspondenceId` ties the eventual response back to this
//! challenge; proofs generated during the session carry it as their nonce.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use attest_core::CanonicalBytes;

use crate::error::ModelError;
use crate::proof::Proof;

/// A claim the counterparty is asked to self-attest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttestationRequest {
    /// The predicate URI describing the claim (e.g. a schema.org term).
    pub predicate: String,
}

/// A claim the counterparty is asked to disclose for verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// The predicate URI describing the claim.
    pub predicate: String,
    /// Issuers whose credentials are acceptable for this predicate.
    #[serde(
        rename = "allowedIssuers",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_issuers: Option<Vec<String>>,
}

/// Caller-supplied fields of a challenge request, without the proof.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeRequestParams {
    /// Claims to self-attest.
    pub to_attest: Vec<AttestationRequest>,
    /// Claims to disclose for verification.
    pub to_verify: Vec<VerificationRequest>,
    /// Endpoint the response must be posted to.
    pub post_endpoint: String,
    /// Session identifier; a fresh UUID v4 when not supplied.
    pub correspondence_id: Option<String>,
}

/// A signed challenge request with exactly one proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    /// Claims to self-attest.
    #[serde(rename = "toAttest", default, skip_serializing_if = "Vec::is_empty")]
    pub to_attest: Vec<AttestationRequest>,

    /// Claims to disclose for verification.
    #[serde(rename = "toVerify", default, skip_serializing_if = "Vec::is_empty")]
    pub to_verify: Vec<VerificationRequest>,

    /// Endpoint the response must be posted to.
    #[serde(rename = "postEndpoint")]
    pub post_endpoint: String,

    /// Session identifier tying responses back to this challenge.
    #[serde(rename = "correspondenceId")]
    pub correspondence_id: String,

    /// The challenge request's proof. Exactly one.
    pub proof: Proof,
}

impl ChallengeRequest {
    /// Construct a challenge request from params plus a proof, validating
    /// structural requirements. `correspondence_id` defaults to a fresh
    /// UUID v4.
    pub fn new(params: ChallengeRequestParams, proof: Proof) -> Result<Self, ModelError> {
        let request = Self {
            to_attest: params.to_attest,
            to_verify: params.to_verify,
            post_endpoint: params.post_endpoint,
            correspondence_id: params
                .correspondence_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            proof,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check structural requirements: a non-empty post endpoint and at
    /// least one predicate across `toAttest`/`toVerify`.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.post_endpoint.is_empty() {
            return Err(ModelError::MissingField("postEndpoint"));
        }
        if self.to_attest.is_empty() && self.to_verify.is_empty() {
            return Err(ModelError::NoPredicates);
        }
        Ok(())
    }

    /// Compute the canonical signable payload: the challenge request
    /// serialized with `proof.signatureValue` absent.
    pub fn signing_input(&self) -> Result<CanonicalBytes, ModelError> {
        let mut val = serde_json::to_value(self)?;
        if let Some(proof) = val.get_mut("proof").and_then(|p| p.as_object_mut()) {
            proof.remove("signatureValue");
        }
        Ok(CanonicalBytes::from_value(val)?)
    }

    /// Parse a challenge request from its JSON text form and validate it.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let request: Self = serde_json::from_str(text)?;
        request.validate()?;
        Ok(request)
    }

    /// Serialize the challenge request to its JSON text form.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }
}
