//! Wire types for Order endpoints: the superset decode record and response bodies.

use super::{
    ClientExtensions, GuaranteedStopLossDetails, MarketOrderDelayedTradeClose,
    MarketOrderMarginCloseout, MarketOrderPositionCloseout, MarketOrderTradeClose, Order,
    OrderBase, OrderPositionFill, OrderTriggerCondition, StopLossDetails, TakeProfitDetails,
    TimeInForce, TrailingStopLossDetails,
};
use crate::domain::transaction::{OrderCancelTransaction, OrderFillTransaction, Transaction};
use crate::shared::{
    ClientId, DateTime, DecimalNumber, InstrumentName, OrderId, PriceValue, TradeId,
    TransactionId,
};
use serde::{Deserialize, Serialize};

// ─── Superset record ─────────────────────────────────────────────────────────

/// Superset of every field any Order variant defines.
///
/// One JSON decode pass fills this record; [`Order::from`](super::Order) then
/// narrows it to the variant named by `order_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    /// Discriminator. Kept as a string so unrecognized types survive decoding.
    #[serde(rename = "type", default)]
    pub order_type: String,

    #[serde(flatten)]
    pub base: OrderBase,

    /// The instrument the Order is placed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Quantity requested. Positive for long, negative for short.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Worst price the client is willing to have the Order filled at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    /// How positions in the Account are modified when the Order is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    /// Set when the Order was created to close a Trade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_close: Option<MarketOrderTradeClose>,
    /// Set when the Order was created to close out a long Position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_position_closeout: Option<MarketOrderPositionCloseout>,
    /// Set when the Order was created to close out a short Position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_position_closeout: Option<MarketOrderPositionCloseout>,
    /// Set when the Order was created for a margin closeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout: Option<MarketOrderMarginCloseout>,
    /// Set when the Order was created for a delayed Trade close.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delayed_trade_close: Option<MarketOrderDelayedTradeClose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    /// Client extensions to attach to the Trade opened by this Order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
    #[serde(rename = "fillingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub filling_transaction_id: Option<TransactionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled_time: Option<DateTime>,
    #[serde(rename = "tradeOpenedID", default, skip_serializing_if = "Option::is_none")]
    pub trade_opened_id: Option<TradeId>,
    #[serde(rename = "tradeReducedID", default, skip_serializing_if = "Option::is_none")]
    pub trade_reduced_id: Option<TradeId>,
    #[serde(rename = "tradeClosedIDs", default, skip_serializing_if = "Option::is_none")]
    pub trade_closed_ids: Option<Vec<TradeId>>,
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// State the resulting Trade should be set to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_state: Option<String>,
    /// Expiry time when `time_in_force` is GTD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// The Order this one replaced.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Order that replaced this one.
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
    /// Market price at the time the Order was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_market_price: Option<PriceValue>,
    /// The Trade this Order is attached to.
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    /// Price distance from the Trade's open price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    /// Whether the Stop Loss is guaranteed (deprecated by the server).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
    /// Premium charged if a guaranteed Order is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_premium: Option<DecimalNumber>,
    /// Current trigger price of the trailing stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_value: Option<PriceValue>,
}

// ─── Responses ───────────────────────────────────────────────────────────────

/// Response for GET /v3/accounts/{accountID}/orders and /pendingOrders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for GET /v3/accounts/{accountID}/orders/{orderSpecifier}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order: Order,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for POST /orders and PUT /orders/{orderSpecifier}.
///
/// Which transactions are present depends on whether the Order was filled,
/// cancelled or left pending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateResponse {
    /// The transaction that created the Order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_create_transaction: Option<Transaction>,
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
    /// Present when a partially filled Order was reissued for the remainder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_reissue_transaction: Option<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_reissue_reject_transaction: Option<Transaction>,
    /// Present on replace: the cancellation of the replaced Order
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::transaction::wire::typed"
    )]
    pub replacing_order_cancel_transaction: Option<OrderCancelTransaction>,
    #[serde(
        rename = "relatedTransactionIDs",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_transaction_ids: Vec<TransactionId>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for PUT /orders/{orderSpecifier}/cancel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelResponse {
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
