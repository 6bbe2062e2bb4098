//! # Canonical Payload Serialization
//!
//! This module defines [`CanonicalBytes`], the sole construction path for
//! the bytes that signatures are computed over, everywhere in the
//! workspace.
//!
//! ## Security Invariant
//!
//! The inner `Vec<u8>` is private. The only way to construct
//! `CanonicalBytes` is through [`CanonicalBytes::new()`] or
//! [`CanonicalBytes::from_value()`], which apply the normalization rules
//! below before serialization. Signing a payload that took a different
//! serialization path is structurally impossible.
//!
//! ## Normalization Rules
//!
//! 1. Reject floats — amounts and counters in credential subjects must be
//!    strings or integers.
//! 2. Normalize RFC 3339 datetime strings to UTC with a `Z` suffix,
//!    truncated to seconds.
//! 3. Sort object keys lexicographically.
//! 4. Compact separators (no whitespace).
//!
//! Rule 2 makes the payload insensitive to the subsecond precision and
//! timezone offset a datetime happens to carry after a serialize/parse
//! round trip; rule 3 makes it insensitive to field insertion order.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by canonical serialization: sorted keys,
/// compact output, normalized datetimes, floats rejected.
///
/// The inner `Vec<u8>` is private — downstream code cannot construct
/// `CanonicalBytes` except through the constructors in this module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the only way (with [`from_value`](Self::from_value)) to
    /// construct `CanonicalBytes`. All signature payloads in the workspace
    /// must flow through here.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(value)
    }

    /// Construct canonical bytes from an already-built JSON value.
    ///
    /// Used by document models that strip signature fields from a
    /// serialized copy before canonicalizing.
    pub fn from_value(value: Value) -> Result<Self, CanonicalizationError> {
        let normalized = normalize_json_value(value)?;
        let bytes = serde_json::to_vec(&normalized)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes for signing or verification.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively normalize a JSON value according to the canonicalization
/// rules.
///
/// Objects are rebuilt into `serde_json::Map`, which keeps keys in
/// lexicographic order; `serde_json::to_vec` then emits compact output.
fn normalize_json_value(value: Value) -> Result<Value, CanonicalizationError> {
    match value {
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                // n.as_f64() is always Some for an f64 number.
                return Err(CanonicalizationError::FloatRejected(
                    n.as_f64().unwrap_or(f64::NAN),
                ));
            }
            Ok(Value::Number(n))
        }
        Value::Object(map) => {
            let mut normalized = serde_json::Map::new();
            for (k, v) in map {
                normalized.insert(k, normalize_json_value(v)?);
            }
            Ok(Value::Object(normalized))
        }
        Value::Array(arr) => {
            let normalized: Result<Vec<_>, _> =
                arr.into_iter().map(normalize_json_value).collect();
            Ok(Value::Array(normalized?))
        }
        Value::String(s) => {
            // Datetime normalization: any string parsing as RFC 3339 is
            // rewritten as UTC ISO 8601 with Z suffix, truncated to seconds.
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                let utc = dt.with_timezone(&chrono::Utc);
                Ok(Value::String(utc.format("%Y-%m-%dT%H:%M:%SZ").to_string()))
            } else {
                Ok(Value::String(s))
            }
        }
        // Bool and Null pass through unchanged.
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn keys_are_sorted() {
        let value = json!({"zebra": 1, "apple": 2, "mango": {"c": 3, "a": 4}});
        let canonical = CanonicalBytes::new(&value).unwrap();
        let text = String::from_utf8(canonical.into_bytes()).unwrap();
        assert_eq!(text, r#"{"apple":2,"mango":{"a":4,"c":3},"zebra":1}"#);
    }

    #[test]
    fn output_is_compact() {
        let value = json!({"a": [1, 2, 3], "b": "x"});
        let canonical = CanonicalBytes::new(&value).unwrap();
        let text = String::from_utf8(canonical.into_bytes()).unwrap();
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn floats_are_rejected() {
        let value = json!({"amount": 3.15});
        let result = CanonicalBytes::new(&value);
        assert!(matches!(
            result,
            Err(CanonicalizationError::FloatRejected(_))
        ));
    }

    #[test]
    fn integers_pass_through() {
        let value = json!({"count": 42, "offset": -7});
        assert!(CanonicalBytes::new(&value).is_ok());
    }

    #[test]
    fn datetime_strings_are_normalized() {
        let value = json!({"created": "2019-07-30T09:51:27.589Z"});
        let canonical = CanonicalBytes::new(&value).unwrap();
        let text = String::from_utf8(canonical.into_bytes()).unwrap();
        assert_eq!(text, r#"{"created":"2019-07-30T09:51:27Z"}"#);
    }

    #[test]
    fn datetime_offsets_collapse_to_utc() {
        let with_offset = json!({"t": "2019-01-01T10:00:00+02:00"});
        let utc = json!({"t": "2019-01-01T08:00:00Z"});
        assert_eq!(
            CanonicalBytes::new(&with_offset).unwrap(),
            CanonicalBytes::new(&utc).unwrap()
        );
    }

    #[test]
    fn non_datetime_strings_are_untouched() {
        let value = json!({"name": "2019 annual report", "id": "urn:uuid:abc"});
        let canonical = CanonicalBytes::new(&value).unwrap();
        let text = String::from_utf8(canonical.into_bytes()).unwrap();
        assert!(text.contains("2019 annual report"));
        assert!(text.contains("urn:uuid:abc"));
    }

    #[test]
    fn stringify_parse_round_trip_is_stable() {
        let value = json!({
            "issuer": "did:eth:0xc62CE673",
            "issuanceDate": "2019-01-01T23:34:45.000Z",
            "credentialSubject": {"id": "did:eth:0x47b7b31b", "type": "John"}
        });
        let first = CanonicalBytes::new(&value).unwrap();
        let reparsed: Value =
            serde_json::from_slice(first.as_bytes()).unwrap();
        let second = CanonicalBytes::new(&reparsed).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn canonicalization_is_deterministic(
            keys in proptest::collection::vec("[a-z]{1,8}", 1..6),
            ints in proptest::collection::vec(any::<i64>(), 1..6),
        ) {
            let mut map = serde_json::Map::new();
            for (k, v) in keys.iter().zip(ints.iter()) {
                map.insert(k.clone(), json!(v));
            }
            let value = Value::Object(map);
            let a = CanonicalBytes::new(&value).unwrap();
            let b = CanonicalBytes::new(&value).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
