//! # Challenge Request Signing
//!
//! Identical protocol shape to credential signing — one proof, same
//! clear-before-serialize discipline — over the challenge/nonce handshake
//! document that opens a credential exchange.

use std::sync::Arc;

use attest_crypto::{KeyRef, KeySource};
use attest_models::{ChallengeRequest, ChallengeRequestParams, Proof};

use crate::error::SignError;
use crate::verify_proof_entry;

/// Signs and verifies challenge requests.
#[derive(Clone)]
pub struct ChallengeRequestSigner {
    key_source: Arc<dyn KeySource>,
}

impl ChallengeRequestSigner {
    /// Create a signer over the given key source.
    pub fn new(key_source: Arc<dyn KeySource>) -> Self {
        Self { key_source }
    }

    /// The proof type string this signer produces.
    pub fn signature_type(&self) -> String {
        format!("{}Signature2019", self.key_source.algorithm_name())
    }

    /// The underlying key primitive.
    pub fn key_source(&self) -> &Arc<dyn KeySource> {
        &self.key_source
    }

    /// Sign a challenge request with the keypair at `key` and return the
    /// hex-encoded signature value. The request is not mutated.
    pub fn sign_challenge_request(
        &self,
        request: &ChallengeRequest,
        key: KeyRef,
    ) -> Result<String, SignError> {
        let payload = request.signing_input()?;
        let signature = self.key_source.sign_payload(key, &payload)?;
        tracing::debug!(key = %key, "signed challenge request");
        Ok(signature.to_hex())
    }

    /// Verify a challenge request's proof against its recorded
    /// `verificationMethod`. Returns `false` for any mismatch; never
    /// panics or errors on bad signature material.
    pub fn verify_challenge_request(&self, request: &ChallengeRequest) -> bool {
        let Ok(payload) = request.signing_input() else {
            tracing::trace!("challenge request signing input could not be canonicalized");
            return false;
        };
        verify_proof_entry(self.key_source.as_ref(), &payload, &request.proof)
    }
}

/// Assembles signed challenge requests from caller-supplied params.
pub struct ChallengeRequestGenerator {
    signer: ChallengeRequestSigner,
}

impl ChallengeRequestGenerator {
    /// Create a generator delegating to the given signer.
    pub fn new(signer: ChallengeRequestSigner) -> Self {
        Self { signer }
    }

    /// The signer this generator delegates to.
    pub fn signer(&self) -> &ChallengeRequestSigner {
        &self.signer
    }

    /// Generate a signed challenge request.
    ///
    /// Derives the public key for `key`, stamps a fresh proof skeleton,
    /// constructs the request (minting a correspondence id if the params
    /// carry none), signs it, and attaches the signature.
    pub fn generate_challenge_request(
        &self,
        params: ChallengeRequestParams,
        key: KeyRef,
    ) -> Result<ChallengeRequest, SignError> {
        let public_key = self.signer.key_source().derive_public_key(key)?;
        let proof = Proof::new(self.signer.signature_type(), public_key.to_hex(), None, None);
        let mut request = ChallengeRequest::new(params, proof)?;
        let signature = self.signer.sign_challenge_request(&request, key)?;
        request.proof.signature_value = Some(signature);
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_crypto::SeedKeySource;
    use attest_models::{AttestationRequest, VerificationRequest};

    fn signer() -> ChallengeRequestSigner {
        ChallengeRequestSigner::new(Arc::new(SeedKeySource::from_seed([31u8; 32])))
    }

    fn params() -> ChallengeRequestParams {
        ChallengeRequestParams {
            to_attest: vec![AttestationRequest {
                predicate: "https://schema.org/givenName".to_string(),
            }],
            to_verify: vec![VerificationRequest {
                predicate: "https://schema.org/familyName".to_string(),
                allowed_issuers: None,
            }],
            post_endpoint: "https://verifier.example/response".to_string(),
            correspondence_id: None,
        }
    }

    #[test]
    fn generate_then_verify() {
        let signer = signer();
        let generator = ChallengeRequestGenerator::new(signer.clone());
        let request = generator
            .generate_challenge_request(params(), KeyRef::new(0, 0))
            .unwrap();

        assert!(request.proof.signature_value.is_some());
        assert!(signer.verify_challenge_request(&request));
    }

    #[test]
    fn verify_survives_json_round_trip() {
        let signer = signer();
        let generator = ChallengeRequestGenerator::new(signer.clone());
        let request = generator
            .generate_challenge_request(params(), KeyRef::new(0, 0))
            .unwrap();

        let parsed = ChallengeRequest::from_json(&request.to_json().unwrap()).unwrap();
        assert!(signer.verify_challenge_request(&parsed));
    }

    #[test]
    fn cleared_signature_fails_verification() {
        let signer = signer();
        let generator = ChallengeRequestGenerator::new(signer.clone());
        let mut request = generator
            .generate_challenge_request(params(), KeyRef::new(0, 0))
            .unwrap();

        request.proof.signature_value = None;
        assert!(!signer.verify_challenge_request(&request));
    }

    #[test]
    fn altered_signature_fails_verification() {
        let signer = signer();
        let generator = ChallengeRequestGenerator::new(signer.clone());
        let mut request = generator
            .generate_challenge_request(params(), KeyRef::new(0, 0))
            .unwrap();

        request.proof.signature_value = Some("9d".repeat(64));
        assert!(!signer.verify_challenge_request(&request));
    }

    #[test]
    fn tampered_endpoint_fails_verification() {
        let signer = signer();
        let generator = ChallengeRequestGenerator::new(signer.clone());
        let mut request = generator
            .generate_challenge_request(params(), KeyRef::new(0, 0))
            .unwrap();

        request.post_endpoint = "https://attacker.example/response".to_string();
        assert!(!signer.verify_challenge_request(&request));
    }

    #[test]
    fn distinct_key_indices_produce_distinct_verification_methods() {
        let generator = ChallengeRequestGenerator::new(signer());
        let a = generator
            .generate_challenge_request(params(), KeyRef::new(0, 0))
            .unwrap();
        let b = generator
            .generate_challenge_request(params(), KeyRef::new(0, 1))
            .unwrap();
        assert_ne!(
            a.proof.verification_method,
            b.proof.verification_method
        );
    }

    #[test]
    fn invalid_params_surface_model_error() {
        let generator = ChallengeRequestGenerator::new(signer());
        let mut p = params();
        p.post_endpoint = String::new();
        let result = generator.generate_challenge_request(p, KeyRef::new(0, 0));
        assert!(matches!(result, Err(SignError::Model(_))));
    }
}
