//! # Presentation Signing — Proof Sets
//!
//! An ordered proof set over a presentation: one proof per requested
//! signing key, order matching the request order.
//!
//! ## Payload Construction
//!
//! The payload for every entry is the presentation serialized with the
//! complete skeleton set attached and **all** `signatureValue` fields
//! absent. Skeletons for the whole key list are built before any signing,
//! so the payload each key signs is reproducible at verification time
//! from the final assembled document alone. No proof signs over another's
//! signature value — removing or forging one entry cannot invalidate or
//! help forge another (proof set, not proof chain).
//!
//! Embedded credentials keep their own issuer proofs untouched; the
//! presentation-level set is an additional ownership layer over the whole
//! envelope, and the credentials' signatures are part of what it signs.

use std::sync::Arc;

use attest_crypto::{KeyRef, KeySource};
use attest_models::{PresentationParams, Proof, VerifiablePresentation};

use crate::credential::CredentialSigner;
use crate::error::SignError;
use crate::verify_proof_entry;

/// Generates and validates ordered proof sets over presentations.
#[derive(Clone)]
pub struct PresentationSigner {
    key_source: Arc<dyn KeySource>,
    credential_signer: CredentialSigner,
}

impl PresentationSigner {
    /// Create a signer over the given key source, paired with the
    /// credential signer whose proof type it shares.
    pub fn new(key_source: Arc<dyn KeySource>, credential_signer: CredentialSigner) -> Self {
        Self {
            key_source,
            credential_signer,
        }
    }

    /// The proof type string, shared with the credential signer.
    pub fn signature_type(&self) -> String {
        self.credential_signer.signature_type()
    }

    /// The underlying key primitive.
    pub fn key_source(&self) -> &Arc<dyn KeySource> {
        &self.key_source
    }

    /// The credential signer this presentation signer is paired with.
    pub fn credential_signer(&self) -> &CredentialSigner {
        &self.credential_signer
    }

    /// Generate the ordered proof set for a presentation.
    ///
    /// One proof per key reference, in request order. Each proof's nonce
    /// is `correspondence_id` when supplied, otherwise a fresh UUID per
    /// entry. Params are borrowed and never mutated; the working document
    /// is an internal copy.
    pub fn generate_proofs(
        &self,
        params: &PresentationParams,
        keys: &[KeyRef],
        correspondence_id: Option<&str>,
    ) -> Result<Vec<Proof>, SignError> {
        // Skeletons for the whole key list first: the signable payload
        // must contain every entry of the final proof set.
        let mut proofs = Vec::with_capacity(keys.len());
        for key in keys {
            let public_key = self.key_source.derive_public_key(*key)?;
            proofs.push(Proof::new(
                self.signature_type(),
                public_key.to_hex(),
                None,
                correspondence_id.map(str::to_string),
            ));
        }

        let working = VerifiablePresentation::new(params.clone(), proofs.clone())?;
        let payload = working.signing_input()?;

        for (key, proof) in keys.iter().zip(proofs.iter_mut()) {
            let signature = self.key_source.sign_payload(*key, &payload)?;
            proof.signature_value = Some(signature.to_hex());
        }

        tracing::debug!(proofs = proofs.len(), "generated presentation proof set");
        Ok(proofs)
    }

    /// Verify every entry of a presentation's proof set.
    ///
    /// Recomputes the zero-signature payload from the document as
    /// received and checks each proof against its own recorded
    /// `verificationMethod`. Returns `true` only if every entry verifies;
    /// an empty proof set is `false`. Never panics or errors on bad
    /// signature material.
    pub fn verify_presentation(&self, presentation: &VerifiablePresentation) -> bool {
        if presentation.proof.is_empty() {
            tracing::trace!("presentation has no ownership proofs");
            return false;
        }
        let Ok(payload) = presentation.signing_input() else {
            tracing::trace!("presentation signing input could not be canonicalized");
            return false;
        };
        presentation
            .proof
            .iter()
            .all(|proof| verify_proof_entry(self.key_source.as_ref(), &payload, proof))
    }
}

/// Assembles signed presentations from caller-supplied params.
pub struct PresentationGenerator {
    signer: PresentationSigner,
}

impl PresentationGenerator {
    /// Create a generator delegating to the given signer.
    pub fn new(signer: PresentationSigner) -> Self {
        Self { signer }
    }

    /// The signer this generator delegates to.
    pub fn signer(&self) -> &PresentationSigner {
        &self.signer
    }

    /// Generate a signed presentation.
    ///
    /// Delegates proof-set construction to the signer — one proof per key
    /// reference, each optionally bound to `correspondence_id` — and
    /// returns the assembled document.
    pub fn generate_presentation(
        &self,
        params: PresentationParams,
        keys: &[KeyRef],
        correspondence_id: Option<&str>,
    ) -> Result<VerifiablePresentation, SignError> {
        let proofs = self.signer.generate_proofs(&params, keys, correspondence_id)?;
        Ok(VerifiablePresentation::new(params, proofs)?)
    }
}
