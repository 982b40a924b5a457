//! Request and response bodies for Position endpoints.

use super::Position;
use crate::domain::order::ClientExtensions;
use crate::domain::transaction::{
    MarketOrderTransaction, OrderCancelTransaction, OrderFillTransaction,
};
use crate::shared::{DecimalNumber, TransactionId};
use serde::{Deserialize, Serialize};

/// Response for GET /positions and /openPositions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsResponse {
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for GET /positions/{instrument}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub position: Position,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Body for PUT /positions/{instrument}/close.
///
/// Each side takes `"ALL"`, `"NONE"` or a unit count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionCloseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_client_extensions: Option<ClientExtensions>,
}

impl PositionCloseBody {
    /// Close both sides entirely.
    pub fn all() -> Self {
        Self {
            long_units: Some("ALL".to_string()),
            short_units: Some("ALL".to_string()),
            ..Default::default()
        }
    }

    pub fn long(units: impl Into<DecimalNumber>) -> Self {
        Self {
            long_units: Some(units.into().into_inner()),
            ..Default::default()
        }
    }

    pub fn short(units: impl Into<DecimalNumber>) -> Self {
        Self {
            short_units: Some(units.into().into_inner()),
            ..Default::default()
        }
    }
}

/// Response for PUT /positions/{instrument}/close.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionCloseResponse {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub long_order_create_transaction: Option<MarketOrderTransaction>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub long_order_fill_transaction: Option<OrderFillTransaction>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub long_order_cancel_transaction: Option<OrderCancelTransaction>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub short_order_create_transaction: Option<MarketOrderTransaction>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub short_order_fill_transaction: Option<OrderFillTransaction>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub short_order_cancel_transaction: Option<OrderCancelTransaction>,
    #[serde(
        rename = "relatedTransactionIDs",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_transaction_ids: Vec<TransactionId>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_body() {
        assert_eq!(
            serde_json::to_string(&PositionCloseBody::all()).unwrap(),
            r#"{"longUnits":"ALL","shortUnits":"ALL"}"#
        );
        assert_eq!(
            serde_json::to_string(&PositionCloseBody::short("100")).unwrap(),
            r#"{"shortUnits":"100"}"#
        );
    }

    #[test]
    fn test_close_response_long_only() {
        let resp: PositionCloseResponse = serde_json::from_str(
            r#"{
                "longOrderCreateTransaction": {"type": "MARKET_ORDER", "id": "70", "reason": "POSITION_CLOSEOUT",
                    "longPositionCloseout": {"instrument": "EUR_USD", "units": "ALL"}},
                "longOrderFillTransaction": {"type": "ORDER_FILL", "id": "71", "orderID": "70", "units": "-1500"},
                "relatedTransactionIDs": ["70", "71"]
            }"#,
        )
        .unwrap();
        assert!(resp.short_order_create_transaction.is_none());
        let fill = resp.long_order_fill_transaction.unwrap();
        assert_eq!(fill.units, Some(DecimalNumber::from("-1500")));
    }
}
