/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned by `POST /api/auth/nonce`
///
/// Both fields are optional on the wire so that a missing nonce is reported
/// as its own failure instead of a generic decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonceResponse {
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

impl NonceResponse {
    /// Decode from a JSON object body
    ///
    /// Taking a `Map` keeps positional bodies such as `["n"]` from filling
    /// the fields in declaration order.
    pub fn from_object(object: Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(object))
    }

    /// The nonce, if present and non-empty
    pub fn into_issued(self) -> Option<IssuedNonce> {
        match self.nonce {
            Some(value) if !value.is_empty() => Some(IssuedNonce {
                value,
                ttl_secs: self.ttl_secs,
            }),
            _ => None,
        }
    }
}

/// Nonce accepted from the server, ready to be signed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedNonce {
    pub value: String,
    pub ttl_secs: Option<u64>,
}

/// Result of calling the protected endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: u16,
    /// First characters of the response body
    pub body_preview: String,
    pub accepted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_response_without_ttl() {
        let response: NonceResponse = serde_json::from_str(r#"{"nonce":"abc"}"#).unwrap();
        assert_eq!(response.nonce.as_deref(), Some("abc"));
        assert_eq!(response.ttl_secs, None);
    }

    #[test]
    fn test_nonce_response_missing_nonce() {
        let response: NonceResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(response.nonce.is_none());
        assert_eq!(response.into_issued(), None);
    }

    #[test]
    fn test_empty_nonce_not_issued() {
        let response: NonceResponse = serde_json::from_str(r#"{"nonce":""}"#).unwrap();
        assert_eq!(response.into_issued(), None);
    }

    #[test]
    fn test_positional_body_rejected() {
        for body in ["[]", r#"["attacker"]"#, r#"["attacker", 60]"#] {
            let result = serde_json::from_str::<Map<String, Value>>(body);
            assert!(result.is_err(), "{body} decoded as an object");
        }

        let object = serde_json::from_str(r#"{"nonce":"abc","ttl_secs":30}"#).unwrap();
        let issued = NonceResponse::from_object(object).unwrap().into_issued().unwrap();
        assert_eq!(issued.value, "abc");
        assert_eq!(issued.ttl_secs, Some(30));
    }
}
