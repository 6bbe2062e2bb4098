//! # Key and Signature Newtypes
//!
//! Typed wrappers over raw Ed25519 key material. Past the parsing
//! boundary a [`PublicKey`] is always 32 bytes and a [`Signature`] always
//! 64 — length checks happen once, in `from_hex`.
//!
//! ## Serde
//!
//! Both types serialize as lowercase hex strings, matching the
//! `verificationMethod` and `signatureValue` fields of proof objects.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CryptoError;

/// An Ed25519 public key (32 bytes) for signature verification.
///
/// Serializes as a 64-character lowercase hex string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 32]);

/// An Ed25519 signature (64 bytes).
///
/// Serializes as a 128-character lowercase hex string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; 64]);

// ---------------------------------------------------------------------------
// PublicKey impls
// ---------------------------------------------------------------------------

impl PublicKey {
    /// Create a public key from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the public key as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse a public key from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 64 {
            return Err(CryptoError::InvalidPublicKey(format!(
                "public key hex must be 64 chars, got {}",
                hex.len()
            )));
        }
        let bytes = hex_to_bytes(&hex)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Convert to an `ed25519_dalek::VerifyingKey` for verification.
    pub fn to_verifying_key(&self) -> Result<ed25519_dalek::VerifyingKey, CryptoError> {
        ed25519_dalek::VerifyingKey::from_bytes(&self.0)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Signature impls
// ---------------------------------------------------------------------------

impl Signature {
    /// Create a signature from raw 64 bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Return the raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Render the signature as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse a signature from a 128-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 128 {
            return Err(CryptoError::InvalidSignature(format!(
                "signature hex must be 128 chars, got {}",
                hex.len()
            )));
        }
        let bytes = hex_to_bytes(&hex)?;
        let mut arr = [0u8; 64];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn hex_prefix(bytes: &[u8]) -> String {
    bytes_to_hex(&bytes[..4])
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

pub(crate) fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, CryptoError> {
    if hex.len() % 2 != 0 {
        return Err(CryptoError::HexDecode(
            "hex string must have even length".to_string(),
        ));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| CryptoError::HexDecode(format!("invalid hex at position {i}: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_hex_round_trip() {
        let pk = PublicKey::from_bytes([0xab; 32]);
        let hex = pk.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(PublicKey::from_hex(&hex).unwrap(), pk);
    }

    #[test]
    fn signature_hex_round_trip() {
        let sig = Signature::from_bytes([0xcd; 64]);
        let hex = sig.to_hex();
        assert_eq!(hex.len(), 128);
        assert_eq!(Signature::from_hex(&hex).unwrap(), sig);
    }

    #[test]
    fn public_key_serde_is_quoted_hex() {
        let pk = PublicKey::from_bytes([7; 32]);
        let json = serde_json::to_string(&pk).unwrap();
        assert_eq!(json.len(), 64 + 2);
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pk);
    }

    #[test]
    fn signature_serde_is_quoted_hex() {
        let sig = Signature::from_bytes([9; 64]);
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json.len(), 128 + 2);
        let back: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(PublicKey::from_hex("not-hex").is_err());
        assert!(PublicKey::from_hex("aabb").is_err());
        assert!(PublicKey::from_hex(&"zz".repeat(32)).is_err());
        assert!(Signature::from_hex("aabb").is_err());
        assert!(Signature::from_hex(&"zz".repeat(64)).is_err());
    }

    #[test]
    fn from_hex_accepts_uppercase_and_whitespace() {
        let pk = PublicKey::from_bytes([0xab; 32]);
        let hex = pk.to_hex().to_uppercase();
        assert_eq!(PublicKey::from_hex(&format!("  {hex} ")).unwrap(), pk);
    }

    #[test]
    fn debug_shows_prefix_only() {
        let pk = PublicKey::from_bytes([0xab; 32]);
        let debug = format!("{pk:?}");
        assert_eq!(debug, "PublicKey(abababab...)");
    }

    #[test]
    fn display_is_full_hex() {
        let sig = Signature::from_bytes([0x01; 64]);
        assert_eq!(format!("{sig}"), "01".repeat(64));
    }
}
