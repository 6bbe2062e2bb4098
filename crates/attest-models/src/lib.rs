//! # attest-models — Document Models for the Attest Toolkit
//!
//! Typed containers for the documents the proof protocol operates on:
//!
//! - **[`Proof`]** (`proof.rs`): the structured signature record —
//!   `{type, created, verificationMethod, nonce, signatureValue}`.
//! - **[`VerifiableCredential`]** (`credential.rs`): a single signed claim
//!   document carrying exactly one proof.
//! - **[`VerifiablePresentation`]** (`presentation.rs`): an envelope of
//!   one or more credentials plus an ordered presentation-level proof set.
//! - **[`ChallengeRequest`]** (`challenge.rs`): a signed handshake
//!   document asking a counterparty to attest and/or disclose claims.
//!
//! ## Signing Input Invariant
//!
//! Every model exposes `signing_input()`, which produces the
//! [`CanonicalBytes`](attest_core::CanonicalBytes) that signatures are
//! computed over: the document serialized with every `signatureValue` in
//! scope absent. The document itself is never mutated — signature fields
//! are stripped from a serialized copy. The signature never signs itself.
//!
//! ## Validation
//!
//! Constructors validate structural requirements (required fields,
//! mandatory type markers, non-empty credential lists) and reject invalid
//! documents with [`ModelError`]. The `from_json` helpers apply the same
//! validation after deserialization, so a parsed document is as
//! trustworthy as a constructed one.

pub mod challenge;
pub mod credential;
pub mod error;
pub mod presentation;
pub mod proof;

// Re-export primary types at crate root for ergonomic imports.
pub use challenge::{AttestationRequest, ChallengeRequest, ChallengeRequestParams, VerificationRequest};
pub use credential::{CredentialParams, CredentialStatus, VerifiableCredential};
pub use error::ModelError;
pub use presentation::{PresentationParams, VerifiablePresentation};
pub use proof::Proof;
