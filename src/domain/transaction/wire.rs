//! Wire types for Transaction endpoints: the superset decode record and responses.

use super::{
    ClientPrice, HomeConversionFactors, OpenTradeDividendAdjustment,
    PositionFinancing, TradeOpen, TradeReduce, Transaction, TransactionBase, TransactionFilter,
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
    PriceValue, TradeId, TransactionId,
};
use serde::{Deserialize, Serialize};

// ─── Superset record ─────────────────────────────────────────────────────────

/// Superset of every field any Transaction variant defines.
///
/// `reason`, `fundingReason` and `rejectReason` mean different enumerations
/// depending on the variant, so they are held as strings here and typed on
/// resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    /// Discriminator. Kept as a string so unrecognized types survive decoding.
    #[serde(rename = "type", default)]
    pub transaction_type: String,

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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
    /// Amount deposited (positive) or withdrawn (negative).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Account balance after the Transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<AccountUnits>,
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
    pub reason: Option<String>,
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
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// The Order this one replaces.
    #[serde(rename = "replacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderId>,
    /// The Transaction that cancelled the replaced Order.
    #[serde(rename = "cancellingTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionId>,
    /// The Order the rejected request tried to replace.
    #[serde(rename = "intendedReplacesOrderID", default, skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderId>,
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    /// The fill that opened the Trade, when created on fill.
    #[serde(rename = "orderFillTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_premium: Option<DecimalNumber>,
    #[serde(rename = "orderID", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(rename = "clientOrderID", default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_units: Option<DecimalNumber>,
    /// Volume-weighted average price across all price buckets used.
    #[serde(rename = "fullVWAP", default, skip_serializing_if = "Option::is_none")]
    pub full_vwap: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_price: Option<ClientPrice>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_opened: Option<TradeOpen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trades_closed: Option<Vec<TradeReduce>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_reduced: Option<TradeReduce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_spread_cost: Option<AccountUnits>,
    #[serde(rename = "replacedByOrderID", default, skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions_modify: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_number: Option<i64>,
    /// The Trades closed by this delayed closure.
    #[serde(rename = "tradeIDs", default, skip_serializing_if = "Option::is_none")]
    pub trade_ids: Option<TradeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_financing_mode: Option<AccountFinancingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_financings: Option<Vec<PositionFinancing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_adjustment: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_dividend_adjustment: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_conversion_factors: Option<HomeConversionFactors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_trade_dividend_adjustments: Option<Vec<OpenTradeDividendAdjustment>>,
}

// ─── Typed envelope slots ────────────────────────────────────────────────────

/// Serde adapter for envelope fields that hold one known Transaction shape,
/// e.g. `orderFillTransaction`.
///
/// Decoding goes through [`RawTransaction`] and the resolver like any other
/// Transaction, then checks the resolved type. A record without a `type` is
/// taken to be the slot's type. Encoding writes the `type` tag back.
pub mod typed {
    use super::RawTransaction;
    use crate::domain::transaction::{Transaction, TransactionVariant};
    use crate::shared::serde_util::Tagged;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: TransactionVariant,
    {
        match value {
            Some(body) => Tagged::new(T::TRANSACTION_TYPE.as_str(), body).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TransactionVariant,
    {
        let Some(mut raw) = Option::<RawTransaction>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if raw.transaction_type.is_empty() {
            raw.transaction_type = T::TRANSACTION_TYPE.as_str().to_string();
        }
        T::try_from(Transaction::from(raw))
            .map(Some)
            .map_err(de::Error::custom)
    }
}

// ─── Responses ───────────────────────────────────────────────────────────────

/// Response for GET /v3/accounts/{accountID}/transactions.
///
/// Holds page URLs rather than the Transactions themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPagesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Filters the pages were built with
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<TransactionFilter>,
    /// Total Transactions across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for /transactions/idrange and /transactions/sinceid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

/// Response for GET /v3/accounts/{accountID}/transactions/{transactionID}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub transaction: Transaction,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}
