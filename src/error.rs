//! Error types for the data model.

use crate::shared::TransactionId;
use thiserror::Error;

/// Errors raised while decoding, narrowing, or encoding model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// JSON encode/decode failure
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Query-string encoding failure
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Discriminator not in the known enumeration (strict decoding only)
    #[error("Unknown {family} type: {type_name:?}")]
    UnknownType {
        family: &'static str,
        type_name: String,
    },

    /// A record resolved to a different type than the slot holding it expects
    #[error("Expected {family} type {expected}, got {found:?}")]
    UnexpectedType {
        family: &'static str,
        expected: &'static str,
        found: String,
    },

    /// Account identifier not of the form `site-division-user-number`
    #[error("Invalid account ID: {0}")]
    InvalidAccountId(String),

    /// Numeric string that is not a decimal
    #[error("Invalid decimal {value:?}: {reason}")]
    InvalidDecimal { value: String, reason: String },

    /// Timestamp string that is not RFC 3339
    #[error("Invalid date/time {value:?}: {reason}")]
    InvalidDateTime { value: String, reason: String },

    /// Invalid parameter provided to a query builder
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Error body returned by the REST API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
    /// Human-readable error message
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
    /// ID of the last transaction created for the account
    #[serde(rename = "lastTransactionID", default)]
    pub last_transaction_id: Option<TransactionId>,
}

impl ErrorResponse {
    /// Get the error message, falling back to the code.
    pub fn get_message(&self) -> String {
        self.error_message
            .clone()
            .or_else(|| self.error_code.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_message_fallback() {
        let resp: ErrorResponse =
            serde_json::from_str(r#"{"errorCode":"NO_SUCH_ORDER"}"#).unwrap();
        assert_eq!(resp.get_message(), "NO_SUCH_ORDER");

        let resp: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.get_message(), "Unknown error");
    }

    #[test]
    fn test_unknown_type_display() {
        let err = ModelError::UnknownType {
            family: "order",
            type_name: "FOO".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown order type: \"FOO\"");
    }
}
