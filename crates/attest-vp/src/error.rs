//! # Signing Error Types
//!
//! The orchestration layer is fail-fast: model and primitive failures
//! propagate unchanged, and verification mismatches are never errors —
//! every `verify_*` entry point returns a plain `bool`.

use thiserror::Error;

use attest_crypto::CryptoError;
use attest_models::ModelError;

/// Errors from signing and document generation.
#[derive(Error, Debug)]
pub enum SignError {
    /// Document construction, validation, or canonicalization failed.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// The key primitive failed (derivation or signing).
    #[error("cryptographic error: {0}")]
    Crypto(#[from] CryptoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_model_error() {
        let err = SignError::from(ModelError::MissingField("issuer"));
        assert!(format!("{err}").contains("issuer"));
    }

    #[test]
    fn wraps_crypto_error() {
        let err = SignError::from(CryptoError::KeyDerivation("no seed".to_string()));
        assert!(format!("{err}").contains("no seed"));
    }
}
