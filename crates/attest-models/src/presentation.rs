//! # Verifiable Presentation
//!
//! The envelope bundling one or more credentials with an ordered
//! presentation-level proof *set* proving ownership of the bundle.
//!
//! The proof set is order-significant: entry *i* was produced by the
//! *i*-th key reference requested at generation time. Entries are
//! mutually independent — no proof signs over another's signature value
//! (proof set, not proof chain).

use serde::{Deserialize, Serialize};

use attest_core::CanonicalBytes;

use crate::credential::VerifiableCredential;
use crate::error::ModelError;
use crate::proof::Proof;

/// The mandatory entry in a presentation's `type` list.
pub const PRESENTATION_TYPE: &str = "VerifiablePresentation";

/// Caller-supplied fields of a presentation, without the proof set.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationParams {
    /// JSON-LD context URIs, if any.
    pub context: Option<Vec<serde_json::Value>>,
    /// Presentation identifier (typically a URN).
    pub id: Option<String>,
    /// Presentation type(s). Must include `"VerifiablePresentation"`.
    pub presentation_type: Vec<String>,
    /// The embedded credentials, in presentation order. Each keeps its
    /// own issuer proof untouched.
    pub verifiable_credential: Vec<VerifiableCredential>,
}

/// A W3C-style Verifiable Presentation with an ordered proof set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiablePresentation {
    /// JSON-LD context URIs.
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<serde_json::Value>>,

    /// Presentation identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Presentation type(s). Must include `"VerifiablePresentation"`.
    #[serde(rename = "type")]
    pub presentation_type: Vec<String>,

    /// The embedded credentials, in presentation order.
    #[serde(rename = "verifiableCredential")]
    pub verifiable_credential: Vec<VerifiableCredential>,

    /// The ordered presentation-level proof set — one entry per signing
    /// key requested at generation time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proof: Vec<Proof>,
}

impl VerifiablePresentation {
    /// Construct a presentation from params plus its proof set,
    /// validating structural requirements.
    pub fn new(params: PresentationParams, proof: Vec<Proof>) -> Result<Self, ModelError> {
        let presentation = Self {
            context: params.context,
            id: params.id,
            presentation_type: params.presentation_type,
            verifiable_credential: params.verifiable_credential,
            proof,
        };
        presentation.validate()?;
        Ok(presentation)
    }

    /// Check structural requirements: the `"VerifiablePresentation"` type
    /// marker and at least one embedded credential.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self
            .presentation_type
            .iter()
            .any(|t| t == PRESENTATION_TYPE)
        {
            return Err(ModelError::NotAPresentation);
        }
        if self.verifiable_credential.is_empty() {
            return Err(ModelError::NoCredentials);
        }
        Ok(())
    }

    /// Compute the canonical signable payload: the presentation serialized
    /// with **every** presentation-level proof's `signatureValue` absent.
    ///
    /// Embedded credentials are untouched — their issuer signatures are
    /// part of what the presentation proofs sign over. Works on a
    /// serialized copy; the presentation itself is not mutated.
    ///
    /// This payload is identical for every index of the proof set, which
    /// is what makes the entries mutually independent and reproducible
    /// from the final assembled document.
    pub fn signing_input(&self) -> Result<CanonicalBytes, ModelError> {
        let mut val = serde_json::to_value(self)?;
        if let Some(proofs) = val.get_mut("proof").and_then(|p| p.as_array_mut()) {
            for proof in proofs {
                if let Some(obj) = proof.as_object_mut() {
                    obj.remove("signatureValue");
                }
            }
        }
        Ok(CanonicalBytes::from_value(val)?)
    }

    /// Parse a presentation from its JSON text form and validate it.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let presentation: Self = serde_json::from_str(text)?;
        presentation.validate()?;
        Ok(presentation)
    }

    /// Serialize the presentation to its JSON text form.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }
}
