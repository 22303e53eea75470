//! Failure taxonomy of the API client and the mapping from failures to the
//! strings shown next to the control that triggered them.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when the request never produced an HTTP response.
pub const NETWORK_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

/// Shown when a 2xx body could not be decoded.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "The server returned an unexpected response.";

/// Any failure of an API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure; no HTTP status.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response, with whatever error codes the body carried.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status.
        status: u16,
        /// Codes from the error body.
        codes: Vec<String>,
    },
    /// Body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build an HTTP error from a status and the raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let codes = serde_json::from_str::<ErrorPayload>(body)
            .map(|payload| payload.error_code)
            .unwrap_or_default();
        Self::Http {
            status,
            codes,
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Error codes.
    #[serde(default, alias = "errors")]
    pub error_code: Vec<String>,
    /// Free text, for logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorPayload {
    /// Payload with a single code.
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            error_code: vec![code.into()],
            message: None,
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// HTTP verb half of an endpoint key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// `"POST:/config/individual-parameters/search"`
pub fn endpoint_key(verb: HttpVerb, path: &str) -> String {
    format!("{verb}:{path}")
}

/// Generic message per HTTP status class.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "The request was rejected. Check the entered values.",
        401 => "Your session has expired. Sign in again.",
        403 => "You do not have permission to perform this action.",
        404 => "The requested record was not found.",
        409 => "The record was changed by someone else. Refresh and try again.",
        500..=599 => "Server error. Please try again later.",
        _ => "The request failed. Please try again.",
    }
}

/// Lookup table from `(endpoint key, error code)` to display text.
#[derive(Debug, Clone, Default)]
pub struct ErrorCatalog {
    by_endpoint: HashMap<String, HashMap<String, String>>,
    common: HashMap<String, String>,
}

impl ErrorCatalog {
    /// Empty catalog; everything falls back to status messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `code` on any endpoint.
    pub fn with_common(mut self, code: &str, message: &str) -> Self {
        self.common.insert(code.to_string(), message.to_string());
        self
    }

    /// Message for `code` on one endpoint; wins over the common entry.
    pub fn with_endpoint(mut self, key: &str, code: &str, message: &str) -> Self {
        self.by_endpoint
            .entry(key.to_string())
            .or_default()
            .insert(code.to_string(), message.to_string());
        self
    }

    /// Display strings for `error` raised by the endpoint `key`. Never empty.
    pub fn messages_for(&self, key: &str, error: &ApiError) -> Vec<String> {
        match error {
            ApiError::Network(_) => vec![NETWORK_MESSAGE.to_string()],
            ApiError::Parse(_) => vec![UNEXPECTED_RESPONSE_MESSAGE.to_string()],
            ApiError::Http {
                status,
                codes,
            } => {
                let mut messages: Vec<String> = Vec::new();
                for code in codes {
                    let message = self
                        .by_endpoint
                        .get(key)
                        .and_then(|table| table.get(code))
                        .or_else(|| self.common.get(code))
                        .cloned()
                        .unwrap_or_else(|| status_message(*status).to_string());
                    if !messages.contains(&message) {
                        messages.push(message);
                    }
                }
                if messages.is_empty() {
                    messages.push(status_message(*status).to_string());
                }
                messages
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELETE_KEY: &str = "DELETE:/config/individual-parameters/";

    fn catalog() -> ErrorCatalog {
        ErrorCatalog::new()
            .with_common("RECORD_NOT_FOUND", "Record no longer exists.")
            .with_endpoint(DELETE_KEY, "DELETE_NOT_ALLOWED", "This parameter cannot be deleted.")
    }

    #[test]
    fn endpoint_entry_wins_over_common_entry() {
        let err = ApiError::Http {
            status: 409,
            codes: vec!["DELETE_NOT_ALLOWED".into(), "RECORD_NOT_FOUND".into()],
        };
        assert_eq!(catalog().messages_for(DELETE_KEY, &err), vec![
            "This parameter cannot be deleted.".to_string(),
            "Record no longer exists.".to_string(),
        ]);
    }

    #[test]
    fn unknown_codes_fall_back_to_status_once() {
        let err = ApiError::Http {
            status: 500,
            codes: vec!["X1".into(), "X2".into()],
        };
        assert_eq!(catalog().messages_for(DELETE_KEY, &err), vec![
            "Server error. Please try again later.".to_string()
        ]);
    }

    #[test]
    fn codeless_errors_use_status_message() {
        let err = ApiError::from_response(403, "<html>forbidden</html>");
        assert_eq!(err, ApiError::Http {
            status: 403,
            codes: Vec::new()
        });
        assert_eq!(catalog().messages_for("GET:/x", &err), vec![status_message(403).to_string()]);
    }

    #[test]
    fn transport_and_parse_failures_have_fixed_text() {
        let catalog = catalog();
        assert_eq!(catalog.messages_for(DELETE_KEY, &ApiError::Network("reset".into())), vec![
            NETWORK_MESSAGE.to_string()
        ]);
        assert_eq!(catalog.messages_for(DELETE_KEY, &ApiError::Parse("eof".into())), vec![
            UNEXPECTED_RESPONSE_MESSAGE.to_string()
        ]);
    }

    #[test]
    fn payload_accepts_either_key() {
        let err = ApiError::from_response(409, r#"{"errors":["DELETE_NOT_ALLOWED"]}"#);
        assert_eq!(err, ApiError::Http {
            status: 409,
            codes: vec!["DELETE_NOT_ALLOWED".into()]
        });
    }

    #[test]
    fn endpoint_key_joins_verb_and_path() {
        assert_eq!(
            endpoint_key(HttpVerb::Post, "/config/spidering-attributes/search"),
            "POST:/config/spidering-attributes/search"
        );
    }
}
