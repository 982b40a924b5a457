//! Transaction domain: the polymorphic [`Transaction`] value and its parts.
//!
//! Every change to an Account is recorded as a Transaction. The 38 concrete
//! shapes share [`TransactionBase`] and are told apart by the `type` field.

pub mod convert;
pub mod query;
pub mod variants;
pub mod wire;

pub use query::{TransactionIdRangeParams, TransactionsParams, TransactionsSinceParams};
pub use variants::{
    ClientConfigureRejectTransaction, ClientConfigureTransaction, CloseTransaction,
    CreateTransaction, DailyFinancingTransaction, DelayedTradeClosureTransaction,
    DividendAdjustmentTransaction, FixedPriceOrderTransaction,
    GuaranteedStopLossOrderRejectTransaction, GuaranteedStopLossOrderTransaction,
    LimitOrderRejectTransaction, LimitOrderTransaction, MarginCallEnterTransaction,
    MarginCallExitTransaction, MarginCallExtendTransaction, MarketIfTouchedOrderRejectTransaction,
    MarketIfTouchedOrderTransaction, MarketOrderRejectTransaction, MarketOrderTransaction,
    OrderCancelRejectTransaction, OrderCancelTransaction,
    OrderClientExtensionsModifyRejectTransaction, OrderClientExtensionsModifyTransaction,
    OrderFillTransaction, ReopenTransaction, ResetResettablePLTransaction,
    StopLossOrderRejectTransaction, StopLossOrderTransaction, StopOrderRejectTransaction,
    StopOrderTransaction, TakeProfitOrderRejectTransaction, TakeProfitOrderTransaction,
    TradeClientExtensionsModifyRejectTransaction, TradeClientExtensionsModifyTransaction,
    TrailingStopLossOrderRejectTransaction, TrailingStopLossOrderTransaction,
    TransferFundsRejectTransaction, TransferFundsTransaction,
};
pub use wire::{
    RawTransaction, TransactionPagesResponse, TransactionResponse, TransactionsResponse,
};

use crate::domain::account::AccountFinancingMode;
use crate::domain::order::ClientExtensions;
use crate::error::ModelError;
use crate::shared::serde_util::{parse_enum, Tagged};
use crate::shared::{
    string_newtype, AccountId, AccountUnits, DateTime, DecimalNumber, InstrumentName,
    PriceValue, RequestId, TradeId, TransactionId,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── TransactionType ─────────────────────────────────────────────────────────

/// Transaction discriminator as sent in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Create,
    Close,
    Reopen,
    ClientConfigure,
    ClientConfigureReject,
    TransferFunds,
    TransferFundsReject,
    MarketOrder,
    MarketOrderReject,
    FixedPriceOrder,
    LimitOrder,
    LimitOrderReject,
    StopOrder,
    StopOrderReject,
    MarketIfTouchedOrder,
    MarketIfTouchedOrderReject,
    TakeProfitOrder,
    TakeProfitOrderReject,
    StopLossOrder,
    StopLossOrderReject,
    GuaranteedStopLossOrder,
    GuaranteedStopLossOrderReject,
    TrailingStopLossOrder,
    TrailingStopLossOrderReject,
    OrderFill,
    OrderCancel,
    OrderCancelReject,
    OrderClientExtensionsModify,
    OrderClientExtensionsModifyReject,
    TradeClientExtensionsModify,
    TradeClientExtensionsModifyReject,
    MarginCallEnter,
    MarginCallExtend,
    MarginCallExit,
    DelayedTradeClosure,
    DailyFinancing,
    DividendAdjustment,
    ResetResettablePl,
}

impl TransactionType {
    /// Every Transaction type, in declaration order.
    pub const ALL: [TransactionType; 38] = [
        TransactionType::Create,
        TransactionType::Close,
        TransactionType::Reopen,
        TransactionType::ClientConfigure,
        TransactionType::ClientConfigureReject,
        TransactionType::TransferFunds,
        TransactionType::TransferFundsReject,
        TransactionType::MarketOrder,
        TransactionType::MarketOrderReject,
        TransactionType::FixedPriceOrder,
        TransactionType::LimitOrder,
        TransactionType::LimitOrderReject,
        TransactionType::StopOrder,
        TransactionType::StopOrderReject,
        TransactionType::MarketIfTouchedOrder,
        TransactionType::MarketIfTouchedOrderReject,
        TransactionType::TakeProfitOrder,
        TransactionType::TakeProfitOrderReject,
        TransactionType::StopLossOrder,
        TransactionType::StopLossOrderReject,
        TransactionType::GuaranteedStopLossOrder,
        TransactionType::GuaranteedStopLossOrderReject,
        TransactionType::TrailingStopLossOrder,
        TransactionType::TrailingStopLossOrderReject,
        TransactionType::OrderFill,
        TransactionType::OrderCancel,
        TransactionType::OrderCancelReject,
        TransactionType::OrderClientExtensionsModify,
        TransactionType::OrderClientExtensionsModifyReject,
        TransactionType::TradeClientExtensionsModify,
        TransactionType::TradeClientExtensionsModifyReject,
        TransactionType::MarginCallEnter,
        TransactionType::MarginCallExtend,
        TransactionType::MarginCallExit,
        TransactionType::DelayedTradeClosure,
        TransactionType::DailyFinancing,
        TransactionType::DividendAdjustment,
        TransactionType::ResetResettablePl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Create => "CREATE",
            TransactionType::Close => "CLOSE",
            TransactionType::Reopen => "REOPEN",
            TransactionType::ClientConfigure => "CLIENT_CONFIGURE",
            TransactionType::ClientConfigureReject => "CLIENT_CONFIGURE_REJECT",
            TransactionType::TransferFunds => "TRANSFER_FUNDS",
            TransactionType::TransferFundsReject => "TRANSFER_FUNDS_REJECT",
            TransactionType::MarketOrder => "MARKET_ORDER",
            TransactionType::MarketOrderReject => "MARKET_ORDER_REJECT",
            TransactionType::FixedPriceOrder => "FIXED_PRICE_ORDER",
            TransactionType::LimitOrder => "LIMIT_ORDER",
            TransactionType::LimitOrderReject => "LIMIT_ORDER_REJECT",
            TransactionType::StopOrder => "STOP_ORDER",
            TransactionType::StopOrderReject => "STOP_ORDER_REJECT",
            TransactionType::MarketIfTouchedOrder => "MARKET_IF_TOUCHED_ORDER",
            TransactionType::MarketIfTouchedOrderReject => "MARKET_IF_TOUCHED_ORDER_REJECT",
            TransactionType::TakeProfitOrder => "TAKE_PROFIT_ORDER",
            TransactionType::TakeProfitOrderReject => "TAKE_PROFIT_ORDER_REJECT",
            TransactionType::StopLossOrder => "STOP_LOSS_ORDER",
            TransactionType::StopLossOrderReject => "STOP_LOSS_ORDER_REJECT",
            TransactionType::GuaranteedStopLossOrder => "GUARANTEED_STOP_LOSS_ORDER",
            TransactionType::GuaranteedStopLossOrderReject => "GUARANTEED_STOP_LOSS_ORDER_REJECT",
            TransactionType::TrailingStopLossOrder => "TRAILING_STOP_LOSS_ORDER",
            TransactionType::TrailingStopLossOrderReject => "TRAILING_STOP_LOSS_ORDER_REJECT",
            TransactionType::OrderFill => "ORDER_FILL",
            TransactionType::OrderCancel => "ORDER_CANCEL",
            TransactionType::OrderCancelReject => "ORDER_CANCEL_REJECT",
            TransactionType::OrderClientExtensionsModify => "ORDER_CLIENT_EXTENSIONS_MODIFY",
            TransactionType::OrderClientExtensionsModifyReject => {
                "ORDER_CLIENT_EXTENSIONS_MODIFY_REJECT"
            }
            TransactionType::TradeClientExtensionsModify => "TRADE_CLIENT_EXTENSIONS_MODIFY",
            TransactionType::TradeClientExtensionsModifyReject => {
                "TRADE_CLIENT_EXTENSIONS_MODIFY_REJECT"
            }
            TransactionType::MarginCallEnter => "MARGIN_CALL_ENTER",
            TransactionType::MarginCallExtend => "MARGIN_CALL_EXTEND",
            TransactionType::MarginCallExit => "MARGIN_CALL_EXIT",
            TransactionType::DelayedTradeClosure => "DELAYED_TRADE_CLOSURE",
            TransactionType::DailyFinancing => "DAILY_FINANCING",
            TransactionType::DividendAdjustment => "DIVIDEND_ADJUSTMENT",
            TransactionType::ResetResettablePl => "RESET_RESETTABLE_PL",
        }
    }

    /// Whether this type records a rejected request.
    pub fn is_reject(&self) -> bool {
        self.as_str().ends_with("_REJECT")
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_enum(s).ok_or_else(|| ModelError::UnknownType {
            family: "transaction",
            type_name: s.to_string(),
        })
    }
}

/// Filter for Transaction list queries: a category or a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionFilter {
    /// Order-related Transactions
    Order,
    /// Funding-related Transactions
    Funding,
    /// Administrative Transactions
    Admin,
    Type(TransactionType),
}

impl TransactionFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionFilter::Order => "ORDER",
            TransactionFilter::Funding => "FUNDING",
            TransactionFilter::Admin => "ADMIN",
            TransactionFilter::Type(t) => t.as_str(),
        }
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORDER" => Ok(TransactionFilter::Order),
            "FUNDING" => Ok(TransactionFilter::Funding),
            "ADMIN" => Ok(TransactionFilter::Admin),
            other => other.parse().map(TransactionFilter::Type),
        }
    }
}

impl From<TransactionType> for TransactionFilter {
    fn from(t: TransactionType) -> Self {
        TransactionFilter::Type(t)
    }
}

impl Serialize for TransactionFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Reasons ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundingReason {
    ClientFunding,
    AccountTransfer,
    DivisionMigration,
    SiteMigration,
    Adjustment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketOrderReason {
    ClientOrder,
    TradeClose,
    PositionCloseout,
    MarginCloseout,
    DelayedTradeClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixedPriceOrderReason {
    PlatformAccountMigration,
    TradeCloseDivisionAccountMigration,
    TradeCloseAdministrativeAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LimitOrderReason {
    ClientOrder,
    Replacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopOrderReason {
    ClientOrder,
    Replacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketIfTouchedOrderReason {
    ClientOrder,
    Replacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TakeProfitOrderReason {
    ClientOrder,
    Replacement,
    /// Created when the opening Order filled
    OnFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopLossOrderReason {
    ClientOrder,
    Replacement,
    OnFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuaranteedStopLossOrderReason {
    ClientOrder,
    Replacement,
    OnFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrailingStopLossOrderReason {
    ClientOrder,
    Replacement,
    OnFill,
}

/// Which kind of Order produced a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderFillReason {
    LimitOrder,
    StopOrder,
    MarketIfTouchedOrder,
    TakeProfitOrder,
    StopLossOrder,
    GuaranteedStopLossOrder,
    TrailingStopLossOrder,
    MarketOrder,
    MarketOrderTradeClose,
    MarketOrderPositionCloseout,
    MarketOrderMarginCloseout,
    MarketOrderDelayedTradeClose,
    FixedPriceOrder,
    FixedPriceOrderPlatformAccountMigration,
    FixedPriceOrderDivisionAccountMigration,
    FixedPriceOrderAdministrativeAction,
}

string_newtype!(
    /// Why an Order was cancelled, e.g. `"CLIENT_REQUEST"` or `"MARKET_HALTED"`.
    ///
    /// The server adds values over time, so this stays an open string.
    OrderCancelReason
);

string_newtype!(
    /// Why a request was rejected, e.g. `"INSUFFICIENT_MARGIN"`.
    TransactionRejectReason
);

// ─── Detail records ──────────────────────────────────────────────────────────

/// A Trade opened by a fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOpen {
    #[serde(rename = "tradeID", default)]
    pub trade_id: TradeId,
    #[serde(default)]
    pub units: DecimalNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fee: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_guaranteed_execution_fee: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_spread_cost: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_margin_required: Option<AccountUnits>,
}

/// A Trade closed or reduced by a fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeReduce {
    #[serde(rename = "tradeID", default)]
    pub trade_id: TradeId,
    #[serde(default)]
    pub units: DecimalNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(rename = "realizedPL", default, skip_serializing_if = "Option::is_none")]
    pub realized_pl: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_financing: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_financing: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_rate: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fee: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_guaranteed_execution_fee: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_spread_cost: Option<AccountUnits>,
}

/// Financing paid or collected for one open Trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTradeFinancing {
    #[serde(rename = "tradeID", default)]
    pub trade_id: TradeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_financing: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_financing: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_rate: Option<DecimalNumber>,
}

/// Financing paid or collected for one instrument's Position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFinancing {
    #[serde(default)]
    pub instrument: InstrumentName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_financing: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_financing: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_conversion_factors: Option<HomeConversionFactors>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub open_trade_financings: Vec<OpenTradeFinancing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_financing_mode: Option<AccountFinancingMode>,
}

/// Dividend adjustment applied to one open Trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTradeDividendAdjustment {
    #[serde(rename = "tradeID", default)]
    pub trade_id: TradeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_adjustment: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_dividend_adjustment: Option<DecimalNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionFactor {
    #[serde(default)]
    pub factor: DecimalNumber,
}

/// Factors converting quote/base amounts into the Account's home currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeConversionFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain_quote_home: Option<ConversionFactor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss_quote_home: Option<ConversionFactor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain_base_home: Option<ConversionFactor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss_base_home: Option<ConversionFactor>,
}

/// One level of available liquidity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub price: PriceValue,
    #[serde(default)]
    pub liquidity: i64,
}

/// The prices a fill was executed against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime>,
    #[serde(default)]
    pub bids: Vec<PriceBucket>,
    #[serde(default)]
    pub asks: Vec<PriceBucket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closeout_bid: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closeout_ask: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tradeable: Option<bool>,
}

// ─── Transaction ─────────────────────────────────────────────────────────────

/// Fields shared by every Transaction type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionBase {
    #[serde(default, skip_serializing_if = "TransactionId::is_empty")]
    pub id: TransactionId,
    #[serde(default, skip_serializing_if = "DateTime::is_empty")]
    pub time: DateTime,
    #[serde(rename = "userID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "accountID", default, skip_serializing_if = "AccountId::is_empty")]
    pub account_id: AccountId,
    /// Transactions applied atomically together share a batch ID.
    #[serde(rename = "batchID", default, skip_serializing_if = "TransactionId::is_empty")]
    pub batch_id: TransactionId,
    #[serde(rename = "requestID", default, skip_serializing_if = "RequestId::is_empty")]
    pub request_id: RequestId,
}

/// A concrete Transaction shape and the discriminator it is sent with.
pub trait TransactionVariant: Serialize + TryFrom<Transaction, Error = ModelError> {
    const TRANSACTION_TYPE: TransactionType;
}

/// Declares [`Transaction`] and its per-variant dispatch from one list of
/// `Variant(Body)` pairs. Each variant name matches its [`TransactionType`].
macro_rules! transactions {
    ($($variant:ident($body:ident)),* $(,)?) => {
        /// A Transaction of any type, resolved from its `type` discriminator.
        ///
        /// An unrecognized discriminator is kept as [`Transaction::Unknown`]
        /// holding the decoded superset record.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Transaction {
            $($variant($body),)*
            /// Discriminator not recognized; the decoded superset record, untouched.
            Unknown(Box<RawTransaction>),
        }

        impl Transaction {
            /// The resolved Transaction type, or `None` for [`Transaction::Unknown`].
            pub fn transaction_type(&self) -> Option<TransactionType> {
                match self {
                    $(Transaction::$variant(_) => Some(TransactionType::$variant),)*
                    Transaction::Unknown(_) => None,
                }
            }

            pub fn base(&self) -> &TransactionBase {
                match self {
                    $(Transaction::$variant(t) => &t.base,)*
                    Transaction::Unknown(raw) => &raw.base,
                }
            }

            /// Decodes `value` straight into the body for `transaction_type`,
            /// without going through the superset record.
            #[cfg(test)]
            pub(crate) fn decode_as(
                transaction_type: TransactionType,
                value: serde_json::Value,
            ) -> serde_json::Result<Self> {
                match transaction_type {
                    $(TransactionType::$variant => {
                        serde_json::from_value(value).map(Transaction::$variant)
                    })*
                }
            }
        }

        $(
            impl TransactionVariant for $body {
                const TRANSACTION_TYPE: TransactionType = TransactionType::$variant;
            }

            impl From<$body> for Transaction {
                fn from(body: $body) -> Self {
                    Transaction::$variant(body)
                }
            }

            impl TryFrom<Transaction> for $body {
                type Error = ModelError;

                fn try_from(transaction: Transaction) -> Result<Self, Self::Error> {
                    match transaction {
                        Transaction::$variant(body) => Ok(body),
                        other => Err(ModelError::UnexpectedType {
                            family: "transaction",
                            expected: TransactionType::$variant.as_str(),
                            found: other.type_name().to_string(),
                        }),
                    }
                }
            }
        )*

        impl Serialize for Transaction {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let type_name = self.type_name();
                match self {
                    $(Transaction::$variant(t) => Tagged::new(type_name, t).serialize(serializer),)*
                    Transaction::Unknown(raw) => raw.serialize(serializer),
                }
            }
        }
    };
}

transactions!(
    Create(CreateTransaction),
    Close(CloseTransaction),
    Reopen(ReopenTransaction),
    ClientConfigure(ClientConfigureTransaction),
    ClientConfigureReject(ClientConfigureRejectTransaction),
    TransferFunds(TransferFundsTransaction),
    TransferFundsReject(TransferFundsRejectTransaction),
    MarketOrder(MarketOrderTransaction),
    MarketOrderReject(MarketOrderRejectTransaction),
    FixedPriceOrder(FixedPriceOrderTransaction),
    LimitOrder(LimitOrderTransaction),
    LimitOrderReject(LimitOrderRejectTransaction),
    StopOrder(StopOrderTransaction),
    StopOrderReject(StopOrderRejectTransaction),
    MarketIfTouchedOrder(MarketIfTouchedOrderTransaction),
    MarketIfTouchedOrderReject(MarketIfTouchedOrderRejectTransaction),
    TakeProfitOrder(TakeProfitOrderTransaction),
    TakeProfitOrderReject(TakeProfitOrderRejectTransaction),
    StopLossOrder(StopLossOrderTransaction),
    StopLossOrderReject(StopLossOrderRejectTransaction),
    GuaranteedStopLossOrder(GuaranteedStopLossOrderTransaction),
    GuaranteedStopLossOrderReject(GuaranteedStopLossOrderRejectTransaction),
    TrailingStopLossOrder(TrailingStopLossOrderTransaction),
    TrailingStopLossOrderReject(TrailingStopLossOrderRejectTransaction),
    OrderFill(OrderFillTransaction),
    OrderCancel(OrderCancelTransaction),
    OrderCancelReject(OrderCancelRejectTransaction),
    OrderClientExtensionsModify(OrderClientExtensionsModifyTransaction),
    OrderClientExtensionsModifyReject(OrderClientExtensionsModifyRejectTransaction),
    TradeClientExtensionsModify(TradeClientExtensionsModifyTransaction),
    TradeClientExtensionsModifyReject(TradeClientExtensionsModifyRejectTransaction),
    MarginCallEnter(MarginCallEnterTransaction),
    MarginCallExtend(MarginCallExtendTransaction),
    MarginCallExit(MarginCallExitTransaction),
    DelayedTradeClosure(DelayedTradeClosureTransaction),
    DailyFinancing(DailyFinancingTransaction),
    DividendAdjustment(DividendAdjustmentTransaction),
    ResetResettablePl(ResetResettablePLTransaction),
);

impl Transaction {
    /// The discriminator string, including unrecognized ones.
    pub fn type_name(&self) -> &str {
        match self {
            Transaction::Unknown(raw) => &raw.transaction_type,
            _ => self
                .transaction_type()
                .map(|t| t.as_str())
                .unwrap_or_default(),
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.base().id
    }

    pub fn time(&self) -> &DateTime {
        &self.base().time
    }

    pub fn account_id(&self) -> &AccountId {
        &self.base().account_id
    }

    pub fn batch_id(&self) -> &TransactionId {
        &self.base().batch_id
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Transaction::Unknown(_))
    }

    /// The superset record of an unrecognized Transaction.
    pub fn as_raw(&self) -> Option<&RawTransaction> {
        match self {
            Transaction::Unknown(raw) => Some(raw.as_ref()),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawTransaction::deserialize(deserializer).map(Transaction::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::OrderId;

    #[test]
    fn test_transaction_type_names_match_serde() {
        for t in TransactionType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(t.as_str().parse::<TransactionType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_type_parse_error() {
        let err = "NOT_A_TYPE".parse::<TransactionType>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownType { family: "transaction", .. }));
    }

    #[test]
    fn test_is_reject() {
        assert!(TransactionType::OrderCancelReject.is_reject());
        assert!(TransactionType::TrailingStopLossOrderReject.is_reject());
        assert!(!TransactionType::OrderCancel.is_reject());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("ADMIN".parse::<TransactionFilter>().unwrap(), TransactionFilter::Admin);
        assert_eq!(
            "DAILY_FINANCING".parse::<TransactionFilter>().unwrap(),
            TransactionFilter::Type(TransactionType::DailyFinancing)
        );
        assert!("BOGUS".parse::<TransactionFilter>().is_err());
    }

    #[test]
    fn test_base_ids() {
        let txn: Transaction = serde_json::from_str(
            r#"{"type":"MARGIN_CALL_ENTER","id":"6410","accountID":"001-011-5838423-001","batchID":"6409","userID":5838423,"time":"2016-06-22T18:41:29.285982286Z"}"#,
        )
        .unwrap();
        assert_eq!(txn.transaction_type(), Some(TransactionType::MarginCallEnter));
        assert_eq!(txn.id().as_str(), "6410");
        assert_eq!(txn.batch_id().as_str(), "6409");
        assert_eq!(txn.base().user_id, Some(5838423));
        assert_eq!(txn.account_id().parts().unwrap().user, "5838423");
    }

    #[test]
    fn test_serialize_round_trip_keeps_type() {
        let txn = Transaction::MarginCallExtend(MarginCallExtendTransaction {
            base: TransactionBase {
                id: TransactionId::from("12"),
                ..Default::default()
            },
            extension_number: Some(2),
        });
        let json = serde_json::to_string(&txn).unwrap();
        assert_eq!(json, r#"{"type":"MARGIN_CALL_EXTEND","id":"12","extensionNumber":2}"#);
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_variant_conversions() {
        let fill = OrderFillTransaction {
            order_id: Some(OrderId::from("50")),
            ..Default::default()
        };
        let txn = Transaction::from(fill.clone());
        assert_eq!(txn.transaction_type(), Some(OrderFillTransaction::TRANSACTION_TYPE));
        assert_eq!(OrderFillTransaction::try_from(txn).unwrap(), fill);

        let exit = Transaction::from(MarginCallExitTransaction::default());
        let err = OrderFillTransaction::try_from(exit).unwrap_err();
        assert!(matches!(
            err,
            ModelError::UnexpectedType { expected: "ORDER_FILL", ref found, .. } if found == "MARGIN_CALL_EXIT"
        ));
    }
}
