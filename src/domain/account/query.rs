//! Query parameters for GET /v3/accounts/{accountID}/changes.

use crate::error::{ModelError, ModelResult};
use crate::shared::TransactionId;
use serde::Serialize;

/// Poll for changes since a Transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountChangesParams {
    #[serde(rename = "sinceTransactionID")]
    pub since_transaction_id: TransactionId,
}

impl AccountChangesParams {
    pub fn new(since_transaction_id: impl Into<TransactionId>) -> Self {
        Self {
            since_transaction_id: since_transaction_id.into(),
        }
    }

    pub fn to_query_string(&self) -> ModelResult<String> {
        if self.since_transaction_id.is_empty() {
            return Err(ModelError::InvalidParameter(
                "sinceTransactionID is required".to_string(),
            ));
        }
        Ok(serde_urlencoded::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_params() {
        let query = AccountChangesParams::new("6356").to_query_string().unwrap();
        assert_eq!(query, "sinceTransactionID=6356");
        assert!(AccountChangesParams::new("").to_query_string().is_err());
    }
}
