//! Request and response bodies for Trade endpoints.

use super::Trade;
use crate::domain::order::{
    ClientExtensions, GuaranteedStopLossDetails, StopLossDetails, TakeProfitDetails,
    TrailingStopLossDetails,
};
use crate::domain::transaction::{
    MarketOrderTransaction, OrderCancelTransaction, OrderFillTransaction,
};
use crate::shared::{DecimalNumber, TransactionId};
use serde::{Deserialize, Serialize};

/// Response for GET /trades and /openTrades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesResponse {
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for GET /trades/{tradeSpecifier}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub trade: Trade,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Body for PUT /trades/{tradeSpecifier}/close.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeCloseBody {
    /// Units to close, or `"ALL"`. The server closes everything when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl TradeCloseBody {
    pub fn all() -> Self {
        Self {
            units: Some("ALL".to_string()),
        }
    }

    /// Close part of the Trade. `units` is unsigned.
    pub fn partial(units: impl Into<DecimalNumber>) -> Self {
        Self {
            units: Some(units.into().into_inner()),
        }
    }
}

/// Response for PUT /trades/{tradeSpecifier}/close.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeCloseResponse {
    /// The Market Order created to close the Trade
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub order_create_transaction: Option<MarketOrderTransaction>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub order_fill_transaction: Option<OrderFillTransaction>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub order_cancel_transaction: Option<OrderCancelTransaction>,
    #[serde(
        rename = "relatedTransactionIDs",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_transaction_ids: Vec<TransactionId>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Body for PUT /trades/{tradeSpecifier}/clientExtensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Body for PUT /trades/{tradeSpecifier}/orders.
///
/// Each present entry creates or replaces that dependent Order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDependentOrdersBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss: Option<GuaranteedStopLossDetails>,
}

impl TradeDependentOrdersBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_take_profit(mut self, details: TakeProfitDetails) -> Self {
        self.take_profit = Some(details);
        self
    }

    pub fn with_stop_loss(mut self, details: StopLossDetails) -> Self {
        self.stop_loss = Some(details);
        self
    }

    pub fn with_trailing_stop_loss(mut self, details: TrailingStopLossDetails) -> Self {
        self.trailing_stop_loss = Some(details);
        self
    }

    pub fn with_guaranteed_stop_loss(mut self, details: GuaranteedStopLossDetails) -> Self {
        self.guaranteed_stop_loss = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Reason;

    #[test]
    fn test_close_body() {
        assert_eq!(serde_json::to_string(&TradeCloseBody::all()).unwrap(), r#"{"units":"ALL"}"#);
        assert_eq!(
            serde_json::to_string(&TradeCloseBody::partial("250")).unwrap(),
            r#"{"units":"250"}"#
        );
        assert_eq!(serde_json::to_string(&TradeCloseBody::default()).unwrap(), "{}");
    }

    #[test]
    fn test_dependent_orders_body() {
        let body = TradeDependentOrdersBody::new()
            .with_take_profit(TakeProfitDetails::at_price("1.2500"))
            .with_stop_loss(StopLossDetails::at_distance("0.0100"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "takeProfit": {"price": "1.2500"},
                "stopLoss": {"distance": "0.0100"}
            })
        );
    }

    #[test]
    fn test_close_response() {
        let resp: TradeCloseResponse = serde_json::from_str(
            r#"{
                "orderCreateTransaction": {"type": "MARKET_ORDER", "id": "50", "reason": "TRADE_CLOSE", "tradeClose": {"tradeID": "12", "units": "ALL"}},
                "orderFillTransaction": {"type": "ORDER_FILL", "id": "51", "orderID": "50", "tradesClosed": [{"tradeID": "12", "units": "100", "realizedPL": "3.20"}]},
                "relatedTransactionIDs": ["50", "51"],
                "lastTransactionID": "51"
            }"#,
        )
        .unwrap();
        let create = resp.order_create_transaction.unwrap();
        assert_eq!(create.trade_close.unwrap().units.as_deref(), Some("ALL"));
        let fill = resp.order_fill_transaction.unwrap();
        assert_eq!(fill.trades_closed.unwrap()[0].trade_id, "12");
        assert_eq!(resp.related_transaction_ids.len(), 2);
    }

    #[test]
    fn test_close_response_keeps_unrecognized_reason() {
        let resp: TradeCloseResponse = serde_json::from_str(
            r#"{
                "orderCreateTransaction": {"type": "MARKET_ORDER", "id": "50", "reason": "BRAND_NEW_CLOSE"},
                "orderFillTransaction": {"type": "ORDER_FILL", "id": "51", "reason": "BRAND_NEW_FILL"}
            }"#,
        )
        .unwrap();
        let fill = resp.order_fill_transaction.as_ref().unwrap();
        assert_eq!(fill.reason, Some(Reason::Other("BRAND_NEW_FILL".to_string())));

        let out = serde_json::to_value(&resp).unwrap();
        assert_eq!(out["orderCreateTransaction"]["type"], "MARKET_ORDER");
        assert_eq!(out["orderCreateTransaction"]["reason"], "BRAND_NEW_CLOSE");
        assert_eq!(out["orderFillTransaction"]["type"], "ORDER_FILL");
        assert_eq!(out["orderFillTransaction"]["reason"], "BRAND_NEW_FILL");
    }

    #[test]
    fn test_close_response_untyped_slot_takes_slot_type() {
        let resp: TradeCloseResponse =
            serde_json::from_str(r#"{"orderFillTransaction": {"id": "51", "orderID": "50"}}"#).unwrap();
        assert_eq!(resp.order_fill_transaction.unwrap().order_id.unwrap(), "50");
    }

    #[test]
    fn test_close_response_wrong_type_in_slot() {
        let err = serde_json::from_str::<TradeCloseResponse>(
            r#"{"orderFillTransaction": {"type": "ORDER_CANCEL", "id": "51"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ORDER_FILL"), "{err}");

        let err = serde_json::from_str::<TradeCloseResponse>(
            r#"{"orderFillTransaction": {"type": "SOMETHING_NEW", "id": "51"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("SOMETHING_NEW"), "{err}");
    }
}
