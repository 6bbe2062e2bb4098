#![deny(missing_docs)]

//! # attest-core — Foundational Types for the Attest Toolkit
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **[`CanonicalBytes`] is the sole path to signable payloads.** Every
//!    byte sequence that is signed or verified anywhere in the workspace
//!    flows through `CanonicalBytes::new()`, which serializes with sorted
//!    keys, compact separators, and normalized datetimes. Two documents
//!    with identical field sets always produce identical payloads,
//!    regardless of construction order or a serialize/parse round trip in
//!    between.
//!
//! 2. **UTC-only time.** [`Timestamp`] carries second-precision UTC time;
//!    canonical form is ISO 8601 with a `Z` suffix. Proof creation times
//!    are part of the signed payload, so their textual form must be
//!    deterministic.
//!
//! 3. **Structured errors with `thiserror`.** No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use error::CanonicalizationError;
pub use temporal::Timestamp;
