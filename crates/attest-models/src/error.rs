//! # Model Error Types
//!
//! Structural validation failures surface here, at document construction
//! or parse time — the signing layer never reinterprets them.

use thiserror::Error;

use attest_core::CanonicalizationError;

/// Errors from document model construction, validation, and serialization.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The credential `type` list does not include `"VerifiableCredential"`.
    #[error("credential type must include \"VerifiableCredential\"")]
    NotACredential,

    /// The presentation `type` list does not include `"VerifiablePresentation"`.
    #[error("presentation type must include \"VerifiablePresentation\"")]
    NotAPresentation,

    /// A presentation must embed at least one credential.
    #[error("presentation must embed at least one verifiable credential")]
    NoCredentials,

    /// A challenge request must ask for at least one predicate.
    #[error("challenge request must list at least one predicate to attest or verify")]
    NoPredicates,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Canonicalization of a signing input failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}
