//! The nine concrete Order shapes.
//!
//! Every variant carries the shared [`OrderBase`] flattened into it; the rest of
//! its fields are exactly those the server defines for that Order type.

use super::{
    ClientExtensions, GuaranteedStopLossDetails, MarketOrderDelayedTradeClose,
    MarketOrderMarginCloseout, MarketOrderPositionCloseout, MarketOrderTradeClose, OrderBase,
    OrderPositionFill, OrderTriggerCondition, StopLossDetails, TakeProfitDetails, TimeInForce,
    TrailingStopLossDetails,
};
use crate::shared::{
    ClientId, DateTime, DecimalNumber, InstrumentName, OrderId, PriceValue, TradeId,
    TransactionId,
};
use serde::{Deserialize, Serialize};

/// An Order filled immediately at the current market price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrder {
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
}

/// An Order filled immediately at a specified price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPriceOrder {
    #[serde(flatten)]
    pub base: OrderBase,

    /// The instrument the Order is placed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Quantity requested. Positive for long, negative for short.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// How positions in the Account are modified when the Order is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    /// State the resulting Trade should be set to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_state: Option<String>,
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
}

/// An Order filled at the specified price or better.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrder {
    #[serde(flatten)]
    pub base: OrderBase,

    /// The instrument the Order is placed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Quantity requested. Positive for long, negative for short.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry time when `time_in_force` is GTD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    /// How positions in the Account are modified when the Order is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
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
    /// The Order this one replaced.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Order that replaced this one.
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
}

/// An Order filled once the market reaches the specified price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrder {
    #[serde(flatten)]
    pub base: OrderBase,

    /// The instrument the Order is placed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Quantity requested. Positive for long, negative for short.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Worst price the client is willing to have the Order filled at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry time when `time_in_force` is GTD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    /// How positions in the Account are modified when the Order is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
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
    /// The Order this one replaced.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Order that replaced this one.
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
}

/// An Order that becomes a Market Order once the market touches the specified price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIfTouchedOrder {
    #[serde(flatten)]
    pub base: OrderBase,

    /// The instrument the Order is placed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Quantity requested. Positive for long, negative for short.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Worst price the client is willing to have the Order filled at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry time when `time_in_force` is GTD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    /// How positions in the Account are modified when the Order is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// Market price at the time the Order was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_market_price: Option<PriceValue>,
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
    /// The Order this one replaced.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Order that replaced this one.
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
}

/// Closes a Trade when its price reaches a profitable level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitOrder {
    #[serde(flatten)]
    pub base: OrderBase,

    /// The Trade this Order is attached to.
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry time when `time_in_force` is GTD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
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
    /// The Order this one replaced.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Order that replaced this one.
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
}

/// Closes a Trade when its price reaches a losing level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossOrder {
    #[serde(flatten)]
    pub base: OrderBase,

    /// The Trade this Order is attached to.
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Price distance from the Trade's open price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry time when `time_in_force` is GTD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// Whether the Stop Loss is guaranteed (deprecated by the server).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
    /// Premium charged if a guaranteed Order is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_premium: Option<DecimalNumber>,
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
    /// The Order this one replaced.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Order that replaced this one.
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
}

/// A Stop Loss whose fill price is guaranteed by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedStopLossOrder {
    #[serde(flatten)]
    pub base: OrderBase,

    /// The Trade this Order is attached to.
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Price distance from the Trade's open price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry time when `time_in_force` is GTD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// Premium charged if a guaranteed Order is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_premium: Option<DecimalNumber>,
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
    /// The Order this one replaced.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Order that replaced this one.
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
}

/// A Stop Loss whose trigger price trails the market by a fixed distance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingStopLossOrder {
    #[serde(flatten)]
    pub base: OrderBase,

    /// The Trade this Order is attached to.
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    /// Price distance from the Trade's open price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry time when `time_in_force` is GTD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// Current trigger price of the trailing stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_value: Option<PriceValue>,
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
    /// The Order this one replaced.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Order that replaced this one.
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
}
