//! Response normalization.
//!
//! The remote API is inconsistent about reply formats: a 200 body may be JSON
//! or URL-encoded form data, and some business errors come back with status
//! 200 and an error payload while others use an HTTP error status. [`decode`]
//! folds all of that into a single [`Outcome`] so callers never need to know
//! which representation arrived.

use serde_json::{Map, Value};

/// Conventional error-description field in error payloads.
const ERROR_DESCRIPTION_FIELD: &str = "pg_error_description";

/// Normalized result of one completed API call.
///
/// Exactly one of three shapes, created once per call:
///
/// - [`Outcome::Success`]: the API answered with data (status 200);
/// - [`Outcome::BusinessFailure`]: the API understood the request and
///   rejected it; retrying with the same fields will fail identically;
/// - [`Outcome::TransportError`]: the request never produced a business
///   answer (DNS, connect, timeout, TLS, unreadable body); the caller may
///   retry idempotent operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The call succeeded; `data` holds the normalized response mapping.
    Success {
        /// Parsed response fields. Values are strings when the body was
        /// form-encoded and arbitrary JSON otherwise.
        data: Map<String, Value>,
    },

    /// The API rejected the request.
    BusinessFailure {
        /// Error description as reported by the API.
        message: String,
    },

    /// The request failed before a business answer could be obtained.
    TransportError {
        /// What went wrong at the transport level.
        message: String,
    },
}

impl Outcome {
    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The response data, when successful.
    pub fn data(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// The failure message, for either failure variant.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::BusinessFailure { message } | Self::TransportError { message } => Some(message),
        }
    }

    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
        }
    }
}

/// Classify a completed HTTP exchange into an [`Outcome`].
///
/// Total over its inputs: every status/body combination maps to a variant.
///
/// - 200 with a JSON object body → [`Outcome::Success`] with the parsed map;
/// - 200 with anything else → the body is parsed as
///   `application/x-www-form-urlencoded` (`&`-separated `key=value` pairs,
///   segments without `=` ignored, no percent-decoding) → [`Outcome::Success`];
/// - any other status with a JSON object body → [`Outcome::BusinessFailure`]
///   with `pg_error_description`, falling back to `message`, falling back to
///   `"Unknown error"`;
/// - any other status otherwise → [`Outcome::BusinessFailure`] with
///   `"HTTP {status}: {body}"`.
pub fn decode(status: u16, body: &str) -> Outcome {
    if status == 200 {
        if let Ok(Value::Object(data)) = serde_json::from_str::<Value>(body) {
            return Outcome::Success { data };
        }
        return Outcome::Success {
            data: parse_form_body(body),
        };
    }

    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(data)) => error_message(&data),
        _ => format!("HTTP {status}: {body}"),
    };
    Outcome::BusinessFailure { message }
}

fn error_message(data: &Map<String, Value>) -> String {
    data.get(ERROR_DESCRIPTION_FIELD)
        .and_then(Value::as_str)
        .or_else(|| data.get("message").and_then(Value::as_str))
        .map(str::to_owned)
        .unwrap_or_else(|| "Unknown error".to_string())
}

fn parse_form_body(body: &str) -> Map<String, Value> {
    let mut data = Map::new();
    for segment in body.split('&') {
        if let Some((key, value)) = segment.split_once('=') {
            data.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_json_object_is_success() {
        let outcome = decode(200, r#"{"x":1}"#);
        assert!(outcome.is_success());
        assert_eq!(outcome.data().and_then(|d| d.get("x")), Some(&json!(1)));
    }

    #[test]
    fn ok_form_body_is_success_with_string_values() {
        let outcome = decode(200, "a=1&b=2");
        let data = outcome.data().expect("success");
        assert_eq!(data.get("a"), Some(&json!("1")));
        assert_eq!(data.get("b"), Some(&json!("2")));
    }

    #[test]
    fn form_segments_without_equals_are_ignored() {
        let outcome = decode(200, "a=1&junk&b=2");
        let data = outcome.data().expect("success");
        assert_eq!(data.len(), 2);
        assert!(!data.contains_key("junk"));
    }

    #[test]
    fn form_values_keep_the_first_equals_split() {
        let outcome = decode(200, "url=https://x?a=b");
        let data = outcome.data().expect("success");
        assert_eq!(data.get("url"), Some(&json!("https://x?a=b")));
    }

    #[test]
    fn ok_empty_body_is_success_with_empty_data() {
        let outcome = decode(200, "");
        assert_eq!(outcome.data().map(|d| d.len()), Some(0));
    }

    #[test]
    fn error_status_with_description_field() {
        let outcome = decode(500, r#"{"pg_error_description":"bad signature"}"#);
        assert_eq!(
            outcome,
            Outcome::BusinessFailure {
                message: "bad signature".to_string()
            }
        );
    }

    #[test]
    fn error_status_falls_back_to_message_field() {
        let outcome = decode(400, r#"{"message":"missing amount"}"#);
        assert_eq!(outcome.message(), Some("missing amount"));
    }

    #[test]
    fn error_status_with_unhelpful_json_uses_sentinel() {
        let outcome = decode(500, r#"{"pg_status":"error"}"#);
        assert_eq!(outcome.message(), Some("Unknown error"));
    }

    #[test]
    fn error_status_with_plain_body_reports_status_and_body() {
        let outcome = decode(500, "not json");
        assert_eq!(
            outcome,
            Outcome::BusinessFailure {
                message: "HTTP 500: not json".to_string()
            }
        );
    }

    #[test]
    fn error_status_with_non_object_json_reports_status_and_body() {
        let outcome = decode(502, r#""oops""#);
        assert_eq!(outcome.message(), Some(r#"HTTP 502: "oops""#));
    }

    #[test]
    fn transport_variant_never_comes_from_decode() {
        for (status, body) in [(200u16, "a=1"), (500, "x"), (404, "{}")] {
            assert!(!matches!(
                decode(status, body),
                Outcome::TransportError { .. }
            ));
        }
    }
}
