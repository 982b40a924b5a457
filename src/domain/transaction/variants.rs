//! The concrete Transaction shapes, one per [`TransactionType`](super::TransactionType).

use super::{
    ClientPrice, FixedPriceOrderReason, FundingReason, GuaranteedStopLossOrderReason,
    HomeConversionFactors, LimitOrderReason, MarketIfTouchedOrderReason, MarketOrderReason,
    OpenTradeDividendAdjustment, OrderCancelReason, OrderFillReason, PositionFinancing,
    StopLossOrderReason, StopOrderReason, TakeProfitOrderReason, TradeOpen, TradeReduce,
    TrailingStopLossOrderReason, TransactionBase, TransactionRejectReason,
};
use crate::domain::account::AccountFinancingMode;
use crate::domain::order::{
    ClientExtensions, GuaranteedStopLossDetails, MarketOrderDelayedTradeClose,
    MarketOrderMarginCloseout, MarketOrderPositionCloseout, MarketOrderTradeClose,
    OrderPositionFill, OrderTriggerCondition, StopLossDetails, TakeProfitDetails, TimeInForce,
    TrailingStopLossDetails,
};
use crate::shared::{
    AccountUnits, ClientId, Currency, DateTime, DecimalNumber, InstrumentName, OrderId,
    PriceValue, Reason, TradeId, TransactionId,
};
use serde::{Deserialize, Serialize};

/// The Account was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "divisionID", default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i64>,
    #[serde(rename = "siteID", default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<i64>,
    #[serde(rename = "accountUserID", default, skip_serializing_if = "Option::is_none")]
    pub account_user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_currency: Option<Currency>,
}

/// The Account was closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,
}

/// A closed Account was reopened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReopenTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,
}

/// The client configured the Account's alias or margin rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigureTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
}

/// A client configuration request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigureRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// Funds were deposited to or withdrawn from the Account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferFundsTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    /// Amount deposited (positive) or withdrawn (negative).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_reason: Option<Reason<FundingReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Account balance after the Transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<AccountUnits>,
}

/// A funds transfer was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferFundsRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    /// Amount deposited (positive) or withdrawn (negative).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_reason: Option<Reason<FundingReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Market Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_close: Option<MarketOrderTradeClose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_position_closeout: Option<MarketOrderPositionCloseout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_position_closeout: Option<MarketOrderPositionCloseout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout: Option<MarketOrderMarginCloseout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delayed_trade_close: Option<MarketOrderDelayedTradeClose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<MarketOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

/// A Market Order request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_close: Option<MarketOrderTradeClose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_position_closeout: Option<MarketOrderPositionCloseout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_position_closeout: Option<MarketOrderPositionCloseout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout: Option<MarketOrderMarginCloseout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delayed_trade_close: Option<MarketOrderDelayedTradeClose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<MarketOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Fixed Price Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPriceOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<FixedPriceOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

/// A Limit Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<LimitOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
    /// The Order this one replaces.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Transaction that cancelled the replaced Order.
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// A Limit Order request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<LimitOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
    /// The Order the rejected request tried to replace.
    #[serde(rename = "intendedReplacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Stop Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<StopOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
    /// The Order this one replaces.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Transaction that cancelled the replaced Order.
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// A Stop Order request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<StopOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
    /// The Order the rejected request tried to replace.
    #[serde(rename = "intendedReplacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Market-if-Touched Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIfTouchedOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<MarketIfTouchedOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
    /// The Order this one replaces.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Transaction that cancelled the replaced Order.
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// A Market-if-Touched Order request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIfTouchedOrderRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<MarketIfTouchedOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
    /// The Order the rejected request tried to replace.
    #[serde(rename = "intendedReplacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Take Profit Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<TakeProfitOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    /// The Order this one replaces.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Transaction that cancelled the replaced Order.
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// A Take Profit Order request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitOrderRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<TakeProfitOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    /// The Order the rejected request tried to replace.
    #[serde(rename = "intendedReplacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Stop Loss Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_premium: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<StopLossOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    /// The Order this one replaces.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Transaction that cancelled the replaced Order.
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// A Stop Loss Order request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossOrderRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<StopLossOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    /// The Order the rejected request tried to replace.
    #[serde(rename = "intendedReplacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Guaranteed Stop Loss Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedStopLossOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_premium: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<GuaranteedStopLossOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    /// The Order this one replaces.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Transaction that cancelled the replaced Order.
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// A Guaranteed Stop Loss Order request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedStopLossOrderRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<GuaranteedStopLossOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    /// The Order the rejected request tried to replace.
    #[serde(rename = "intendedReplacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Trailing Stop Loss Order was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingStopLossOrderTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<TrailingStopLossOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    /// The Order this one replaces.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Transaction that cancelled the replaced Order.
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
}

/// A Trailing Stop Loss Order request was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingStopLossOrderRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<TrailingStopLossOrderReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    /// The Order the rejected request tried to replace.
    #[serde(rename = "intendedReplacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// An Order was filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFillTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "orderID", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(rename = "clientOrderID", default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_units: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Volume-weighted average price across all price buckets used.
    #[serde(rename = "fullVWAP", default, skip_serializing_if = "Option::is_none")]
    pub full_vwap: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_price: Option<ClientPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<OrderFillReason>>,
    /// Profit or loss realized by the fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "quotePL", default, skip_serializing_if = "Option::is_none")]
    pub quote_pl: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_financing: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_financing: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fee: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_guaranteed_execution_fee: Option<DecimalNumber>,
    /// Account balance after the Transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_opened: Option<TradeOpen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trades_closed: Option<Vec<TradeReduce>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_reduced: Option<TradeReduce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_spread_cost: Option<AccountUnits>,
}

/// An Order was cancelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "orderID", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(rename = "clientOrderID", default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<OrderCancelReason>,
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
}

/// An Order cancellation was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "orderID", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(rename = "clientOrderID", default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// An Order's client extensions were modified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsModifyTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "orderID", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(rename = "clientOrderID", default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions_modify: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
}

/// An Order client extensions modification was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsModifyRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "orderID", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(rename = "clientOrderID", default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions_modify: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// A Trade's client extensions were modified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsModifyTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
}

/// A Trade client extensions modification was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsModifyRejectTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<TransactionRejectReason>,
}

/// The Account entered a margin call state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginCallEnterTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,
}

/// The Account's margin call state was extended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginCallExtendTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_number: Option<i64>,
}

/// The Account left the margin call state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginCallExitTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,
}

/// Trades were closed once their market reopened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedTradeClosureTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<MarketOrderReason>>,
    /// The Trades closed by this delayed closure.
    #[serde(rename = "tradeIDs", default, skip_serializing_if = "Option::is_none")]
    pub trade_ids: Option<TradeId>,
}

/// Daily financing was applied to the Account's open Positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFinancingTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    /// Account balance after the Transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_financing_mode: Option<AccountFinancingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_financings: Option<Vec<PositionFinancing>>,
}

/// A dividend adjustment was applied for an instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendAdjustmentTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_adjustment: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_dividend_adjustment: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_conversion_factors: Option<HomeConversionFactors>,
    /// Account balance after the Transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_trade_dividend_adjustments: Option<Vec<OpenTradeDividendAdjustment>>,
}

/// The Account's resettable P/L counter was reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResettablePLTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,
}
