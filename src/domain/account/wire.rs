//! Request and response bodies for Account endpoints.

use super::{Account, AccountChanges, AccountChangesState, AccountProperties, AccountSummary};
use crate::domain::transaction::{ClientConfigureRejectTransaction, ClientConfigureTransaction};
use crate::shared::{DecimalNumber, TransactionId};
use serde::{Deserialize, Serialize};

/// Response for GET /v3/accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsResponse {
    #[serde(default)]
    pub accounts: Vec<AccountProperties>,
}

/// Response for GET /v3/accounts/{accountID}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account: Account,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for GET /v3/accounts/{accountID}/summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummaryResponse {
    pub account: AccountSummary,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for GET /v3/accounts/{accountID}/changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountChangesResponse {
    #[serde(default)]
    pub changes: AccountChanges,
    #[serde(default)]
    pub state: AccountChangesState,
    /// Pass as `sinceTransactionID` on the next poll
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Body for PATCH /v3/accounts/{accountID}/configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfigureBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
}

impl AccountConfigureBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_margin_rate(mut self, margin_rate: impl Into<DecimalNumber>) -> Self {
        self.margin_rate = Some(margin_rate.into());
        self
    }
}

/// Response for PATCH /v3/accounts/{accountID}/configuration.
///
/// A rejected configuration comes back with the reject transaction instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfigureResponse {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub client_configure_transaction: Option<ClientConfigureTransaction>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub client_configure_reject_transaction: Option<ClientConfigureRejectTransaction>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_body() {
        let body = AccountConfigureBody::new()
            .with_alias("My Account")
            .with_margin_rate("0.05");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"alias":"My Account","marginRate":"0.05"}"#
        );
    }

    #[test]
    fn test_changes_response() {
        let resp: AccountChangesResponse = serde_json::from_str(
            r#"{
                "changes": {
                    "ordersFilled": [{"type": "MARKET", "id": "20", "state": "FILLED", "tradeOpenedID": "21"}],
                    "transactions": [{"type": "ORDER_FILL", "id": "21", "orderID": "20", "units": "100"}]
                },
                "state": {"NAV": "1000.0", "orders": [{"id": "30", "trailingStopValue": "1.1000"}]},
                "lastTransactionID": "21"
            }"#,
        )
        .unwrap();
        assert_eq!(resp.changes.orders_filled.len(), 1);
        assert_eq!(resp.changes.transactions[0].id().as_str(), "21");
        assert_eq!(resp.state.orders[0].id.as_str(), "30");
        assert_eq!(resp.last_transaction_id, Some(TransactionId::from("21")));
    }
}
