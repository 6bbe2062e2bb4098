//! # Error Types
//!
//! Structured errors for canonical serialization, built with `thiserror`.
//! Each downstream crate defines its own error enum for its own concern
//! and converts these with `#[from]`.

use thiserror::Error;

/// Errors during canonical payload serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical payloads.
    /// Amounts must be strings or integers.
    #[error("float values are not permitted in canonical payloads; use string or integer for amounts: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_rejected_display() {
        let err = CanonicalizationError::FloatRejected(3.14);
        let msg = format!("{err}");
        assert!(msg.contains("float values are not permitted"));
        assert!(msg.contains("3.14"));
    }

    #[test]
    fn serialization_failed_wraps_serde_json() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CanonicalizationError::from(bad);
        assert!(format!("{err}").contains("serialization failed"));
    }
}
