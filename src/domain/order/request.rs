//! Order request bodies for POST /orders and PUT /orders/{orderSpecifier}.

use super::{
    ClientExtensions, GuaranteedStopLossDetails, OrderPositionFill, OrderTriggerCondition,
    StopLossDetails, TakeProfitDetails, TimeInForce, TrailingStopLossDetails,
};
use crate::shared::{ClientId, DateTime, DecimalNumber, InstrumentName, PriceValue, TradeId};
use serde::{Deserialize, Serialize};

/// An Order to create, tagged by `type`.
///
/// Fixed-price Orders are created by the server only and have no request form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderRequest {
    Market(MarketOrderRequest),
    Limit(LimitOrderRequest),
    Stop(StopOrderRequest),
    MarketIfTouched(MarketIfTouchedOrderRequest),
    TakeProfit(TakeProfitOrderRequest),
    StopLoss(StopLossOrderRequest),
    GuaranteedStopLoss(GuaranteedStopLossOrderRequest),
    TrailingStopLoss(TrailingStopLossOrderRequest),
}

macro_rules! into_order_request {
    ($($variant:ident($request:ident)),* $(,)?) => {
        $(
            impl From<$request> for OrderRequest {
                fn from(request: $request) -> Self {
                    OrderRequest::$variant(request)
                }
            }
        )*
    };
}

into_order_request!(
    Market(MarketOrderRequest),
    Limit(LimitOrderRequest),
    Stop(StopOrderRequest),
    MarketIfTouched(MarketIfTouchedOrderRequest),
    TakeProfit(TakeProfitOrderRequest),
    StopLoss(StopLossOrderRequest),
    GuaranteedStopLoss(GuaranteedStopLossOrderRequest),
    TrailingStopLoss(TrailingStopLossOrderRequest),
);

// ─── Entry orders ────────────────────────────────────────────────────────────

/// Request to fill immediately at the current market price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    pub instrument: InstrumentName,
    /// Positive for long, negative for short
    pub units: DecimalNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
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

impl MarketOrderRequest {
    pub fn new(instrument: impl Into<InstrumentName>, units: impl Into<DecimalNumber>) -> Self {
        Self {
            instrument: instrument.into(),
            units: units.into(),
            ..Default::default()
        }
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    /// Set the worst acceptable fill price.
    pub fn with_price_bound(mut self, price: impl Into<PriceValue>) -> Self {
        self.price_bound = Some(price.into());
        self
    }

    pub fn with_position_fill(mut self, position_fill: OrderPositionFill) -> Self {
        self.position_fill = Some(position_fill);
        self
    }

    pub fn with_client_extensions(mut self, extensions: ClientExtensions) -> Self {
        self.client_extensions = Some(extensions);
        self
    }

    pub fn with_take_profit(mut self, details: TakeProfitDetails) -> Self {
        self.take_profit_on_fill = Some(details);
        self
    }

    pub fn with_stop_loss(mut self, details: StopLossDetails) -> Self {
        self.stop_loss_on_fill = Some(details);
        self
    }
}

/// Request for an Order filled at `price` or better.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    pub instrument: InstrumentName,
    pub units: DecimalNumber,
    pub price: PriceValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
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

impl LimitOrderRequest {
    pub fn new(
        instrument: impl Into<InstrumentName>,
        units: impl Into<DecimalNumber>,
        price: impl Into<PriceValue>,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            units: units.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    /// Keep the Order until `gtd_time`; sets time-in-force to GTD.
    pub fn good_till(mut self, gtd_time: impl Into<DateTime>) -> Self {
        self.time_in_force = Some(TimeInForce::Gtd);
        self.gtd_time = Some(gtd_time.into());
        self
    }

    pub fn with_trigger_condition(mut self, condition: OrderTriggerCondition) -> Self {
        self.trigger_condition = Some(condition);
        self
    }

    pub fn with_client_extensions(mut self, extensions: ClientExtensions) -> Self {
        self.client_extensions = Some(extensions);
        self
    }

    pub fn with_take_profit(mut self, details: TakeProfitDetails) -> Self {
        self.take_profit_on_fill = Some(details);
        self
    }

    pub fn with_stop_loss(mut self, details: StopLossDetails) -> Self {
        self.stop_loss_on_fill = Some(details);
        self
    }
}

/// Request for an Order filled once the market reaches `price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest {
    pub instrument: InstrumentName,
    pub units: DecimalNumber,
    pub price: PriceValue,
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

impl StopOrderRequest {
    pub fn new(
        instrument: impl Into<InstrumentName>,
        units: impl Into<DecimalNumber>,
        price: impl Into<PriceValue>,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            units: units.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    pub fn with_price_bound(mut self, price: impl Into<PriceValue>) -> Self {
        self.price_bound = Some(price.into());
        self
    }
}

/// Request for an Order that becomes a Market Order once `price` is touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIfTouchedOrderRequest {
    pub instrument: InstrumentName,
    pub units: DecimalNumber,
    pub price: PriceValue,
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

impl MarketIfTouchedOrderRequest {
    pub fn new(
        instrument: impl Into<InstrumentName>,
        units: impl Into<DecimalNumber>,
        price: impl Into<PriceValue>,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            units: units.into(),
            price: price.into(),
            ..Default::default()
        }
    }
}

// ─── Dependent orders ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitOrderRequest {
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    pub price: PriceValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

impl TakeProfitOrderRequest {
    pub fn new(trade_id: impl Into<TradeId>, price: impl Into<PriceValue>) -> Self {
        Self {
            trade_id: trade_id.into(),
            price: price.into(),
            ..Default::default()
        }
    }
}

/// Stop Loss on an open Trade. Set either `price` or `distance`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossOrderRequest {
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
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
    pub client_extensions: Option<ClientExtensions>,
}

impl StopLossOrderRequest {
    pub fn at_price(trade_id: impl Into<TradeId>, price: impl Into<PriceValue>) -> Self {
        Self {
            trade_id: trade_id.into(),
            price: Some(price.into()),
            ..Default::default()
        }
    }

    pub fn at_distance(trade_id: impl Into<TradeId>, distance: impl Into<DecimalNumber>) -> Self {
        Self {
            trade_id: trade_id.into(),
            distance: Some(distance.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedStopLossOrderRequest {
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
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
    pub client_extensions: Option<ClientExtensions>,
}

impl GuaranteedStopLossOrderRequest {
    pub fn at_price(trade_id: impl Into<TradeId>, price: impl Into<PriceValue>) -> Self {
        Self {
            trade_id: trade_id.into(),
            price: Some(price.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingStopLossOrderRequest {
    #[serde(rename = "tradeID")]
    pub trade_id: TradeId,
    #[serde(rename = "clientTradeID", default, skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientId>,
    pub distance: DecimalNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

impl TrailingStopLossOrderRequest {
    pub fn new(trade_id: impl Into<TradeId>, distance: impl Into<DecimalNumber>) -> Self {
        Self {
            trade_id: trade_id.into(),
            distance: distance.into(),
            ..Default::default()
        }
    }
}

// ─── Bodies ──────────────────────────────────────────────────────────────────

/// Body for POST /v3/accounts/{accountID}/orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderBody {
    pub order: OrderRequest,
}

impl CreateOrderBody {
    pub fn new(order: impl Into<OrderRequest>) -> Self {
        Self {
            order: order.into(),
        }
    }
}

/// Body for PUT /v3/accounts/{accountID}/orders/{orderSpecifier}.
///
/// The existing Order is cancelled and `order` created in its place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaceOrderBody {
    pub order: OrderRequest,
}

impl ReplaceOrderBody {
    pub fn new(order: impl Into<OrderRequest>) -> Self {
        Self {
            order: order.into(),
        }
    }
}

/// Body for PUT /orders/{orderSpecifier}/clientExtensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_market_request_body() {
        let body = CreateOrderBody::new(
            MarketOrderRequest::new("EUR_USD", "100")
                .with_time_in_force(TimeInForce::Fok)
                .with_stop_loss(StopLossDetails::at_distance("0.0050")),
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "order": {
                    "type": "MARKET",
                    "instrument": "EUR_USD",
                    "units": "100",
                    "timeInForce": "FOK",
                    "stopLossOnFill": {"distance": "0.0050"}
                }
            })
        );
    }

    #[test]
    fn test_limit_good_till() {
        let request = LimitOrderRequest::new("USD_JPY", "-500", "110.250")
            .good_till("2016-06-30T00:00:00.000000000Z");
        let value = serde_json::to_value(OrderRequest::from(request)).unwrap();
        assert_eq!(value["type"], "LIMIT");
        assert_eq!(value["timeInForce"], "GTD");
        assert_eq!(value["gtdTime"], "2016-06-30T00:00:00.000000000Z");
    }

    #[test]
    fn test_dependent_request_uses_trade_id() {
        let request = OrderRequest::from(TrailingStopLossOrderRequest::new("77", "0.0025"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"type": "TRAILING_STOP_LOSS", "tradeID": "77", "distance": "0.0025"})
        );
        let back: OrderRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back, request);
    }
}
