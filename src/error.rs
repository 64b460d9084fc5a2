// Failure taxonomy for the REST data layer.

use std::collections::BTreeMap;
use thiserror::Error;

// Error key -> human-readable message, as the backend returns on validation
// and conflict failures. BTreeMap so iteration order is deterministic.
pub type ErrorMap = BTreeMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request rejected with status {status}")]
    Rejected { status: u16, errors: ErrorMap },

    #[error("Record has no id yet")]
    MissingId,

    #[error("Malformed record body: {0}")]
    Decode(String),
}

impl ApiError {
    // Build a Rejected error from a non-2xx response body. The backend
    // normally answers with a JSON object of error key -> message; a few
    // paths (PUT with a mismatched id) answer with bare text, which folds
    // into an "error" key so the message loop still renders it.
    pub fn rejected(status: u16, body: &str) -> Self {
        let errors = match serde_json::from_str::<ErrorMap>(body) {
            Ok(map) => map,
            Err(_) => {
                let mut map = ErrorMap::new();
                let text = body.trim();
                if !text.is_empty() {
                    map.insert("error".to_string(), text.to_string());
                }
                map
            }
        };
        ApiError::Rejected { status, errors }
    }

    // User-facing messages for this failure: one per error key when the
    // backend supplied a map, otherwise the display form of the error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Rejected { errors, .. } if !errors.is_empty() => {
                errors.values().cloned().collect()
            }
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_parses_error_map_body() {
        let body = r#"{"email": "That email is already used, please use a unique email"}"#;
        let err = ApiError::rejected(409, body);

        match &err {
            ApiError::Rejected { status, errors } => {
                assert_eq!(*status, 409);
                assert_eq!(
                    errors.get("email").map(String::as_str),
                    Some("That email is already used, please use a unique email")
                );
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
        assert_eq!(
            err.messages(),
            vec!["That email is already used, please use a unique email".to_string()]
        );
    }

    #[test]
    fn test_rejected_folds_plain_text_body_into_error_key() {
        let err = ApiError::rejected(409, "The customer ID cannot be modified");

        match &err {
            ApiError::Rejected { errors, .. } => {
                assert_eq!(
                    errors.get("error").map(String::as_str),
                    Some("The customer ID cannot be modified")
                );
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_with_empty_body_falls_back_to_display_message() {
        let err = ApiError::rejected(400, "");
        assert_eq!(err.messages(), vec!["Request rejected with status 400".to_string()]);
    }

    #[test]
    fn test_message_order_follows_key_order() {
        let body = r#"{"phoneNumber": "bad phone", "customerName": "bad name"}"#;
        let err = ApiError::rejected(400, body);

        // BTreeMap keys iterate in ascending order regardless of body order.
        assert_eq!(
            err.messages(),
            vec!["bad name".to_string(), "bad phone".to_string()]
        );
    }

    #[test]
    fn test_non_rejected_errors_surface_their_display_form() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.messages(), vec!["Network error: connection refused".to_string()]);

        let err = ApiError::NotFound("rest/hotels/7".to_string());
        assert_eq!(err.messages(), vec!["Not found: rest/hotels/7".to_string()]);
    }
}
