//! # Cryptographic Error Types
//!
//! Structured errors for key material handling and derivation. Uses
//! `thiserror` for ergonomic definitions with diagnostic context.
//!
//! Signature *mismatches* are not errors — [`verify_payload`] returns
//! `false` for those. These variants cover structurally invalid key
//! material and failed derivation only.
//!
//! [`verify_payload`]: crate::source::KeySource::verify_payload

use thiserror::Error;

/// Errors from cryptographic operations in the Attest toolkit.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Invalid Ed25519 public key material.
    #[error("invalid Ed25519 public key: {0}")]
    InvalidPublicKey(String),

    /// Invalid Ed25519 signature material.
    #[error("invalid Ed25519 signature: {0}")]
    InvalidSignature(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(String),

    /// Key derivation failure (missing or malformed seed material).
    #[error("key derivation error: {0}")]
    KeyDerivation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_public_key_display() {
        let err = CryptoError::InvalidPublicKey("bad point".to_string());
        assert!(format!("{err}").contains("bad point"));
    }

    #[test]
    fn hex_decode_display() {
        let err = CryptoError::HexDecode("odd length".to_string());
        assert!(format!("{err}").contains("hex decode"));
    }

    #[test]
    fn key_derivation_display() {
        let err = CryptoError::KeyDerivation("seed not set".to_string());
        assert!(format!("{err}").contains("seed not set"));
    }
}
