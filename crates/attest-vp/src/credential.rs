//! # Credential Signing
//!
//! One proof over one credential. The signer computes and checks
//! signatures; the generator stamps a proof skeleton, delegates to the
//! signer, and returns the assembled document.

use std::sync::Arc;

use attest_crypto::{KeyRef, KeySource};
use attest_models::{CredentialParams, Proof, VerifiableCredential};

use crate::error::SignError;
use crate::verify_proof_entry;

/// Signs and verifies individual verifiable credentials.
#[derive(Clone)]
pub struct CredentialSigner {
    key_source: Arc<dyn KeySource>,
}

impl CredentialSigner {
    /// Create a signer over the given key source.
    pub fn new(key_source: Arc<dyn KeySource>) -> Self {
        Self { key_source }
    }

    /// The proof type string this signer produces:
    /// the key source's algorithm name suffixed with `"Signature2019"`.
    pub fn signature_type(&self) -> String {
        format!("{}Signature2019", self.key_source.algorithm_name())
    }

    /// The underlying key primitive, for callers that need to derive
    /// public keys themselves.
    pub fn key_source(&self) -> &Arc<dyn KeySource> {
        &self.key_source
    }

    /// Sign a credential with the keypair at `key` and return the
    /// hex-encoded signature value.
    ///
    /// The payload is the credential's canonical form with
    /// `proof.signatureValue` absent. The credential is not mutated.
    pub fn sign_credential(
        &self,
        credential: &VerifiableCredential,
        key: KeyRef,
    ) -> Result<String, SignError> {
        let payload = credential.signing_input()?;
        let signature = self.key_source.sign_payload(key, &payload)?;
        tracing::debug!(key = %key, "signed credential");
        Ok(signature.to_hex())
    }

    /// Verify a credential's proof against its recorded
    /// `verificationMethod`.
    ///
    /// Returns `false` for any mismatch — including an absent or
    /// undecodable `signatureValue` — and never panics or errors.
    pub fn verify_credential(&self, credential: &VerifiableCredential) -> bool {
        let Ok(payload) = credential.signing_input() else {
            tracing::trace!("credential signing input could not be canonicalized");
            return false;
        };
        verify_proof_entry(self.key_source.as_ref(), &payload, &credential.proof)
    }
}

/// Assembles signed credentials from caller-supplied params.
pub struct CredentialGenerator {
    signer: CredentialSigner,
}

impl CredentialGenerator {
    /// Create a generator delegating to the given signer.
    pub fn new(signer: CredentialSigner) -> Self {
        Self { signer }
    }

    /// The signer this generator delegates to.
    pub fn signer(&self) -> &CredentialSigner {
        &self.signer
    }

    /// Generate a signed credential.
    ///
    /// Derives the public key for `key`, stamps a fresh proof skeleton
    /// (type, current timestamp, verification method), constructs the
    /// credential, signs it, and attaches the signature. Params are
    /// consumed; the caller keeps no aliased state that could be mutated.
    pub fn generate_credential(
        &self,
        params: CredentialParams,
        key: KeyRef,
    ) -> Result<VerifiableCredential, SignError> {
        let public_key = self.signer.key_source().derive_public_key(key)?;
        let proof = Proof::new(self.signer.signature_type(), public_key.to_hex(), None, None);
        let mut credential = VerifiableCredential::new(params, proof)?;
        let signature = self.signer.sign_credential(&credential, key)?;
        credential.proof.signature_value = Some(signature);
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_crypto::SeedKeySource;
    use serde_json::json;

    fn signer() -> CredentialSigner {
        CredentialSigner::new(Arc::new(SeedKeySource::from_seed([13u8; 32])))
    }

    fn params() -> CredentialParams {
        CredentialParams {
            context: Some(vec![json!("https://schema.org/givenName")]),
            id: Some("did:protocol:address".to_string()),
            credential_type: vec![
                "VerifiableCredential".to_string(),
                "DidOwnership".to_string(),
            ],
            issuer: "did:eth:0xc62CE673".to_string(),
            issuance_date: chrono::Utc::now(),
            credential_subject: json!({"id": "did:eth:0x47b7b31b", "givenName": "John"}),
            credential_status: None,
        }
    }

    #[test]
    fn signature_type_is_algorithm_plus_suffix() {
        assert_eq!(signer().signature_type(), "Ed25519Signature2019");
    }

    #[test]
    fn generate_then_verify() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        assert!(credential.proof.signature_value.is_some());
        assert_eq!(credential.proof.proof_type, "Ed25519Signature2019");
        assert!(signer.verify_credential(&credential));
    }

    #[test]
    fn proof_records_derived_public_key() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let key = KeyRef::new(2, 7);
        let credential = generator.generate_credential(params(), key).unwrap();

        let expected = signer.key_source().derive_public_key(key).unwrap();
        assert_eq!(credential.proof.verification_method, expected.to_hex());
    }

    #[test]
    fn verify_survives_json_round_trip() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        let parsed =
            VerifiableCredential::from_json(&credential.to_json().unwrap()).unwrap();
        assert!(signer.verify_credential(&parsed));
    }

    #[test]
    fn tampered_subject_fails_verification() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let mut credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        credential.credential_subject = json!({"id": "did:eth:0xattacker"});
        assert!(!signer.verify_credential(&credential));
    }

    #[test]
    fn tampered_created_fails_verification() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let mut credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        credential.proof.created += chrono::Duration::seconds(1);
        assert!(!signer.verify_credential(&credential));
    }

    #[test]
    fn replaced_signature_fails_verification() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let mut credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        credential.proof.signature_value = Some("9d".repeat(64));
        assert!(!signer.verify_credential(&credential));
    }

    #[test]
    fn missing_signature_fails_verification() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let mut credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        credential.proof.signature_value = None;
        assert!(!signer.verify_credential(&credential));
    }

    #[test]
    fn garbage_signature_hex_is_false_not_panic() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let mut credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        credential.proof.signature_value = Some("not-hex-at-all".to_string());
        assert!(!signer.verify_credential(&credential));
    }

    #[test]
    fn wrong_key_index_fails_verification() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let mut credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        // Re-point the verification method at a different derived key.
        let other = signer
            .key_source()
            .derive_public_key(KeyRef::new(0, 1))
            .unwrap();
        credential.proof.verification_method = other.to_hex();
        assert!(!signer.verify_credential(&credential));
    }

    #[test]
    fn sign_credential_does_not_mutate() {
        let signer = signer();
        let generator = CredentialGenerator::new(signer.clone());
        let credential = generator
            .generate_credential(params(), KeyRef::new(0, 0))
            .unwrap();

        let before = credential.clone();
        let _ = signer.sign_credential(&credential, KeyRef::new(0, 1)).unwrap();
        assert_eq!(credential, before);
    }

    #[test]
    fn invalid_params_surface_model_error() {
        let generator = CredentialGenerator::new(signer());
        let mut p = params();
        p.credential_type = vec!["NotACredential".to_string()];
        let result = generator.generate_credential(p, KeyRef::new(0, 0));
        assert!(matches!(result, Err(SignError::Model(_))));
    }
}
