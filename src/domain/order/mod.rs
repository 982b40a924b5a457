//! Order domain: order types, the polymorphic [`Order`] value, and requests.

pub mod convert;
pub mod query;
pub mod request;
pub mod variants;
pub mod wire;

pub use query::OrdersParams;
pub use request::{
    CreateOrderBody, GuaranteedStopLossOrderRequest, LimitOrderRequest,
    MarketIfTouchedOrderRequest, MarketOrderRequest, OrderClientExtensionsBody, OrderRequest,
    ReplaceOrderBody, StopLossOrderRequest, StopOrderRequest, TakeProfitOrderRequest,
    TrailingStopLossOrderRequest,
};
pub use variants::{
    FixedPriceOrder, GuaranteedStopLossOrder, LimitOrder, MarketIfTouchedOrder, MarketOrder,
    StopLossOrder, StopOrder, TakeProfitOrder, TrailingStopLossOrder,
};
pub use wire::{
    OrderCancelResponse, OrderCreateResponse, OrderResponse, OrdersResponse, RawOrder,
};

use crate::shared::serde_util::Tagged;
use crate::shared::{
    ClientComment, ClientId, ClientTag, DateTime, DecimalNumber, InstrumentName, OrderId,
    PriceValue, Reason, TradeId, TransactionId,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─── Enumerations ────────────────────────────────────────────────────────────

/// Order discriminator as sent in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    FixedPrice,
    Limit,
    Stop,
    MarketIfTouched,
    TakeProfit,
    StopLoss,
    GuaranteedStopLoss,
    TrailingStopLoss,
}

impl OrderType {
    /// Every Order type, in declaration order.
    pub const ALL: [OrderType; 9] = [
        OrderType::Market,
        OrderType::FixedPrice,
        OrderType::Limit,
        OrderType::Stop,
        OrderType::MarketIfTouched,
        OrderType::TakeProfit,
        OrderType::StopLoss,
        OrderType::GuaranteedStopLoss,
        OrderType::TrailingStopLoss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::FixedPrice => "FIXED_PRICE",
            OrderType::Limit => "LIMIT",
            OrderType::Stop => "STOP",
            OrderType::MarketIfTouched => "MARKET_IF_TOUCHED",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::StopLoss => "STOP_LOSS",
            OrderType::GuaranteedStopLoss => "GUARANTEED_STOP_LOSS",
            OrderType::TrailingStopLoss => "TRAILING_STOP_LOSS",
        }
    }

    /// Whether Orders of this type are attached to an existing Trade.
    pub fn is_dependent(&self) -> bool {
        matches!(
            self,
            OrderType::TakeProfit
                | OrderType::StopLoss
                | OrderType::GuaranteedStopLoss
                | OrderType::TrailingStopLoss
        )
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an Order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Pending,
    Filled,
    Triggered,
    Cancelled,
}

/// State filter for Order list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStateFilter {
    Pending,
    Filled,
    Triggered,
    Cancelled,
    All,
}

/// How long an Order stays in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good until cancelled
    Gtc,
    /// Good until `gtd_time`
    Gtd,
    /// Good for the trading day
    Gfd,
    /// Filled entirely or cancelled
    Fok,
    /// Filled partially, the remainder cancelled
    Ioc,
}

/// How Positions are modified when an Order fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPositionFill {
    OpenOnly,
    ReduceFirst,
    ReduceOnly,
    Default,
}

/// Which price component triggers a price-dependent Order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderTriggerCondition {
    Default,
    Inverse,
    Bid,
    Ask,
    Mid,
}

/// Why a margin closeout Market Order was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketOrderMarginCloseoutReason {
    MarginCheckViolation,
    RegulatoryMarginCallViolation,
    RegulatoryMarginCheckViolation,
}

// ─── Detail records ──────────────────────────────────────────────────────────

/// Client-attached id/tag/comment bundle on an Order or Trade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientExtensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ClientTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<ClientComment>,
}

impl ClientExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<ClientId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<ClientTag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<ClientComment>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Take Profit to create when the Order opens a Trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

impl TakeProfitDetails {
    pub fn at_price(price: impl Into<PriceValue>) -> Self {
        Self {
            price: Some(price.into()),
            ..Default::default()
        }
    }
}

/// Stop Loss to create when the Order opens a Trade.
///
/// Exactly one of `price` or `distance` is expected by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Deprecated; use [`GuaranteedStopLossDetails`] instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
}

impl StopLossDetails {
    pub fn at_price(price: impl Into<PriceValue>) -> Self {
        Self {
            price: Some(price.into()),
            ..Default::default()
        }
    }

    pub fn at_distance(distance: impl Into<DecimalNumber>) -> Self {
        Self {
            distance: Some(distance.into()),
            ..Default::default()
        }
    }
}

/// Guaranteed Stop Loss to create when the Order opens a Trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedStopLossDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Trailing Stop Loss to create when the Order opens a Trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingStopLossDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// The Trade a closing Market Order was created for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderTradeClose {
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    /// Number of units to close, or `"ALL"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// The Position side a closeout Market Order was created for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderPositionCloseout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Number of units to close out, or `"ALL"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderMarginCloseout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason<MarketOrderMarginCloseoutReason>>,
}

/// A Trade close that was delayed until its market opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderDelayedTradeClose {
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeId>,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    #[serde(
        rename = "sourceTransactionID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_transaction_id: Option<TransactionId>,
}

/// Price-dependent state of a pending trailing Order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicOrderState {
    pub id: OrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_value: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_distance: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_trigger_distance_exact: Option<bool>,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// Fields shared by every Order type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBase {
    #[serde(default, skip_serializing_if = "OrderId::is_empty")]
    pub id: OrderId,
    #[serde(default, skip_serializing_if = "DateTime::is_empty")]
    pub create_time: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// An Order of any type, resolved from its `type` discriminator.
///
/// Decoding never fails on an unrecognized discriminator: the record is kept as
/// [`Order::Unknown`] so callers decide how strict to be (see
/// [`Decoder`](crate::decode::Decoder) for a rejecting policy).
#[derive(Debug, Clone, PartialEq)]
pub enum Order {
    Market(MarketOrder),
    FixedPrice(FixedPriceOrder),
    Limit(LimitOrder),
    Stop(StopOrder),
    MarketIfTouched(MarketIfTouchedOrder),
    TakeProfit(TakeProfitOrder),
    StopLoss(StopLossOrder),
    GuaranteedStopLoss(GuaranteedStopLossOrder),
    TrailingStopLoss(TrailingStopLossOrder),
    /// Discriminator not recognized; the decoded superset record, untouched.
    Unknown(Box<RawOrder>),
}

impl Order {
    /// The resolved Order type, or `None` for [`Order::Unknown`].
    pub fn order_type(&self) -> Option<OrderType> {
        match self {
            Order::Market(_) => Some(OrderType::Market),
            Order::FixedPrice(_) => Some(OrderType::FixedPrice),
            Order::Limit(_) => Some(OrderType::Limit),
            Order::Stop(_) => Some(OrderType::Stop),
            Order::MarketIfTouched(_) => Some(OrderType::MarketIfTouched),
            Order::TakeProfit(_) => Some(OrderType::TakeProfit),
            Order::StopLoss(_) => Some(OrderType::StopLoss),
            Order::GuaranteedStopLoss(_) => Some(OrderType::GuaranteedStopLoss),
            Order::TrailingStopLoss(_) => Some(OrderType::TrailingStopLoss),
            Order::Unknown(_) => None,
        }
    }

    /// The discriminator string, including unrecognized ones.
    pub fn type_name(&self) -> &str {
        match self {
            Order::Unknown(raw) => &raw.order_type,
            _ => self.order_type().map(|t| t.as_str()).unwrap_or_default(),
        }
    }

    pub fn base(&self) -> &OrderBase {
        match self {
            Order::Market(o) => &o.base,
            Order::FixedPrice(o) => &o.base,
            Order::Limit(o) => &o.base,
            Order::Stop(o) => &o.base,
            Order::MarketIfTouched(o) => &o.base,
            Order::TakeProfit(o) => &o.base,
            Order::StopLoss(o) => &o.base,
            Order::GuaranteedStopLoss(o) => &o.base,
            Order::TrailingStopLoss(o) => &o.base,
            Order::Unknown(raw) => &raw.base,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.base().id
    }

    pub fn state(&self) -> Option<OrderState> {
        self.base().state
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Order::Unknown(_))
    }

    /// The superset record of an unrecognized Order.
    pub fn as_raw(&self) -> Option<&RawOrder> {
        match self {
            Order::Unknown(raw) => Some(raw.as_ref()),
            _ => None,
        }
    }
}

impl Serialize for Order {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let type_name = self.type_name();
        match self {
            Order::Market(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::FixedPrice(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::Limit(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::Stop(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::MarketIfTouched(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::TakeProfit(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::StopLoss(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::GuaranteedStopLoss(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::TrailingStopLoss(o) => Tagged::new(type_name, o).serialize(serializer),
            Order::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawOrder::deserialize(deserializer).map(Order::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_names_match_serde() {
        for t in OrderType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_dependent_types() {
        assert!(OrderType::TrailingStopLoss.is_dependent());
        assert!(!OrderType::MarketIfTouched.is_dependent());
    }

    #[test]
    fn test_accessors() {
        let order: Order = serde_json::from_str(
            r#"{"type":"LIMIT","id":"42","createTime":"2016-06-22T18:41:29.285982286Z","state":"PENDING"}"#,
        )
        .unwrap();
        assert_eq!(order.order_type(), Some(OrderType::Limit));
        assert_eq!(order.type_name(), "LIMIT");
        assert_eq!(order.id(), &OrderId::from("42"));
        assert_eq!(order.state(), Some(OrderState::Pending));
        assert!(!order.is_unknown());
        assert!(order.as_raw().is_none());
    }

    #[test]
    fn test_serialize_emits_type_tag() {
        let order = Order::TakeProfit(TakeProfitOrder {
            trade_id: Some(TradeId::from("7")),
            price: Some(PriceValue::from("1.1050")),
            ..Default::default()
        });
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "TAKE_PROFIT", "tradeID": "7", "price": "1.1050"})
        );
    }

    #[test]
    fn test_client_extensions_builder() {
        let ext = ClientExtensions::new().with_id("my-id").with_tag("strategy-a");
        let json = serde_json::to_string(&ext).unwrap();
        assert_eq!(json, r#"{"id":"my-id","tag":"strategy-a"}"#);
    }
}
