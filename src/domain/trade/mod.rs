//! Trade domain: open and closed Trades and their dependent Orders.

pub mod query;
pub mod wire;

pub use query::TradesParams;
pub use wire::{
    TradeClientExtensionsBody, TradeCloseBody, TradeCloseResponse, TradeDependentOrdersBody,
    TradeResponse, TradesResponse,
};

use crate::domain::order::{
    ClientExtensions, GuaranteedStopLossOrder, StopLossOrder, TakeProfitOrder,
    TrailingStopLossOrder,
};
use crate::error::ModelResult;
use crate::shared::{
    AccountUnits, DateTime, DecimalNumber, InstrumentName, OrderId, PriceValue, TradeId,
    TransactionId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeState {
    Open,
    Closed,
    /// Close requested while the market was closed
    CloseWhenTradeable,
}

/// State filter for Trade list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStateFilter {
    Open,
    Closed,
    CloseWhenTradeable,
    All,
}

/// A Trade with its dependent Orders inlined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: TradeId,
    #[serde(default)]
    pub instrument: InstrumentName,
    /// Execution price
    #[serde(default)]
    pub price: PriceValue,
    #[serde(default)]
    pub open_time: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<TradeState>,
    #[serde(default)]
    pub initial_units: DecimalNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_margin_required: Option<AccountUnits>,
    /// Zero once the Trade is closed
    #[serde(default)]
    pub current_units: DecimalNumber,
    #[serde(rename = "realizedPL", default, skip_serializing_if = "Option::is_none")]
    pub realized_pl: Option<AccountUnits>,
    #[serde(rename = "unrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_close_price: Option<PriceValue>,
    #[serde(rename = "closingTransactionIDs", default, skip_serializing_if = "Vec::is_empty")]
    pub closing_transaction_ids: Vec<TransactionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_adjustment: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit_order: Option<TakeProfitOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_order: Option<StopLossOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_order: Option<GuaranteedStopLossOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_order: Option<TrailingStopLossOrder>,
}

impl Trade {
    /// Positive for a long Trade, negative for a short one.
    pub fn current_units(&self) -> ModelResult<Decimal> {
        self.current_units.to_decimal()
    }

    pub fn is_long(&self) -> ModelResult<bool> {
        Ok(self.initial_units.to_decimal()?.is_sign_positive())
    }
}

/// A Trade with only the IDs of its dependent Orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSummary {
    pub id: TradeId,
    #[serde(default)]
    pub instrument: InstrumentName,
    #[serde(default)]
    pub price: PriceValue,
    #[serde(default)]
    pub open_time: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<TradeState>,
    #[serde(default)]
    pub initial_units: DecimalNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_margin_required: Option<AccountUnits>,
    #[serde(default)]
    pub current_units: DecimalNumber,
    #[serde(rename = "realizedPL", default, skip_serializing_if = "Option::is_none")]
    pub realized_pl: Option<AccountUnits>,
    #[serde(rename = "unrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_close_price: Option<PriceValue>,
    #[serde(rename = "closingTransactionIDs", default, skip_serializing_if = "Vec::is_empty")]
    pub closing_transaction_ids: Vec<TransactionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_adjustment: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    #[serde(rename = "takeProfitOrderID", default, skip_serializing_if = "Option::is_none")]
    pub take_profit_order_id: Option<OrderId>,
    #[serde(rename = "stopLossOrderID", default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_order_id: Option<OrderId>,
    #[serde(
        rename = "guaranteedStopLossOrderID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub guaranteed_stop_loss_order_id: Option<OrderId>,
    #[serde(
        rename = "trailingStopLossOrderID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trailing_stop_loss_order_id: Option<OrderId>,
}

impl From<&Trade> for TradeSummary {
    fn from(trade: &Trade) -> Self {
        TradeSummary {
            id: trade.id.clone(),
            instrument: trade.instrument.clone(),
            price: trade.price.clone(),
            open_time: trade.open_time.clone(),
            state: trade.state,
            initial_units: trade.initial_units.clone(),
            initial_margin_required: trade.initial_margin_required.clone(),
            current_units: trade.current_units.clone(),
            realized_pl: trade.realized_pl.clone(),
            unrealized_pl: trade.unrealized_pl.clone(),
            margin_used: trade.margin_used.clone(),
            average_close_price: trade.average_close_price.clone(),
            closing_transaction_ids: trade.closing_transaction_ids.clone(),
            financing: trade.financing.clone(),
            dividend_adjustment: trade.dividend_adjustment.clone(),
            close_time: trade.close_time.clone(),
            client_extensions: trade.client_extensions.clone(),
            take_profit_order_id: trade.take_profit_order.as_ref().map(|o| o.base.id.clone()),
            stop_loss_order_id: trade.stop_loss_order.as_ref().map(|o| o.base.id.clone()),
            guaranteed_stop_loss_order_id: trade
                .guaranteed_stop_loss_order
                .as_ref()
                .map(|o| o.base.id.clone()),
            trailing_stop_loss_order_id: trade
                .trailing_stop_loss_order
                .as_ref()
                .map(|o| o.base.id.clone()),
        }
    }
}

/// Price-dependent state of an open Trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedTradeState {
    pub id: TradeId,
    #[serde(rename = "unrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRADE: &str = r#"{
        "id": "6397",
        "instrument": "USD_CAD",
        "price": "1.28059",
        "openTime": "2016-06-22T18:41:48.258142231Z",
        "state": "OPEN",
        "initialUnits": "-2500",
        "currentUnits": "-2500",
        "realizedPL": "0.0000",
        "unrealizedPL": "-0.0216",
        "takeProfitOrder": {
            "type": "TAKE_PROFIT",
            "id": "6399",
            "createTime": "2016-06-22T18:41:48.258142231Z",
            "state": "PENDING",
            "tradeID": "6397",
            "price": "1.26000",
            "timeInForce": "GTC"
        }
    }"#;

    #[test]
    fn test_trade_with_dependent_order() {
        let trade: Trade = serde_json::from_str(TRADE).unwrap();
        assert_eq!(trade.state, Some(TradeState::Open));
        assert!(!trade.is_long().unwrap());
        assert_eq!(trade.current_units().unwrap(), Decimal::new(-2500, 0));

        let tp = trade.take_profit_order.as_ref().unwrap();
        assert_eq!(tp.price, Some(PriceValue::from("1.26000")));
        assert!(trade.stop_loss_order.is_none());
    }

    #[test]
    fn test_summary_from_trade() {
        let trade: Trade = serde_json::from_str(TRADE).unwrap();
        let summary = TradeSummary::from(&trade);
        assert_eq!(summary.id, trade.id);
        assert_eq!(summary.take_profit_order_id, Some(OrderId::from("6399")));
        assert_eq!(summary.stop_loss_order_id, None);
    }
}
