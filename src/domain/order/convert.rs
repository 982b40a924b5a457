//! Conversions: superset wire record → resolved [`Order`].

use super::wire::RawOrder;
use super::{
    FixedPriceOrder, GuaranteedStopLossOrder, LimitOrder, MarketIfTouchedOrder, MarketOrder,
    Order, OrderType, StopLossOrder, StopOrder, TakeProfitOrder, TrailingStopLossOrder,
};
use crate::shared::serde_util::parse_enum;

impl From<RawOrder> for Order {
    fn from(raw: RawOrder) -> Self {
        match parse_enum::<OrderType>(&raw.order_type) {
            Some(OrderType::Market) => Order::Market(MarketOrder {
                base: raw.base,
                instrument: raw.instrument,
                units: raw.units,
                time_in_force: raw.time_in_force,
                price_bound: raw.price_bound,
                position_fill: raw.position_fill,
                trade_close: raw.trade_close,
                long_position_closeout: raw.long_position_closeout,
                short_position_closeout: raw.short_position_closeout,
                margin_closeout: raw.margin_closeout,
                delayed_trade_close: raw.delayed_trade_close,
                take_profit_on_fill: raw.take_profit_on_fill,
                stop_loss_on_fill: raw.stop_loss_on_fill,
                guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                trade_client_extensions: raw.trade_client_extensions,
                filling_transaction_id: raw.filling_transaction_id,
                filled_time: raw.filled_time,
                trade_opened_id: raw.trade_opened_id,
                trade_reduced_id: raw.trade_reduced_id,
                trade_closed_ids: raw.trade_closed_ids,
                cancelling_transaction_id: raw.cancelling_transaction_id,
                cancelled_time: raw.cancelled_time,
            }),
            Some(OrderType::FixedPrice) => Order::FixedPrice(FixedPriceOrder {
                base: raw.base,
                instrument: raw.instrument,
                units: raw.units,
                price: raw.price,
                position_fill: raw.position_fill,
                trade_state: raw.trade_state,
                take_profit_on_fill: raw.take_profit_on_fill,
                stop_loss_on_fill: raw.stop_loss_on_fill,
                guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                trade_client_extensions: raw.trade_client_extensions,
                filling_transaction_id: raw.filling_transaction_id,
                filled_time: raw.filled_time,
                trade_opened_id: raw.trade_opened_id,
                trade_reduced_id: raw.trade_reduced_id,
                trade_closed_ids: raw.trade_closed_ids,
                cancelling_transaction_id: raw.cancelling_transaction_id,
                cancelled_time: raw.cancelled_time,
            }),
            Some(OrderType::Limit) => Order::Limit(LimitOrder {
                base: raw.base,
                instrument: raw.instrument,
                units: raw.units,
                price: raw.price,
                time_in_force: raw.time_in_force,
                gtd_time: raw.gtd_time,
                position_fill: raw.position_fill,
                trigger_condition: raw.trigger_condition,
                take_profit_on_fill: raw.take_profit_on_fill,
                stop_loss_on_fill: raw.stop_loss_on_fill,
                guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                trade_client_extensions: raw.trade_client_extensions,
                filling_transaction_id: raw.filling_transaction_id,
                filled_time: raw.filled_time,
                trade_opened_id: raw.trade_opened_id,
                trade_reduced_id: raw.trade_reduced_id,
                trade_closed_ids: raw.trade_closed_ids,
                cancelling_transaction_id: raw.cancelling_transaction_id,
                cancelled_time: raw.cancelled_time,
                replaces_order_id: raw.replaces_order_id,
                replaced_by_order_id: raw.replaced_by_order_id,
            }),
            Some(OrderType::Stop) => Order::Stop(StopOrder {
                base: raw.base,
                instrument: raw.instrument,
                units: raw.units,
                price: raw.price,
                price_bound: raw.price_bound,
                time_in_force: raw.time_in_force,
                gtd_time: raw.gtd_time,
                position_fill: raw.position_fill,
                trigger_condition: raw.trigger_condition,
                take_profit_on_fill: raw.take_profit_on_fill,
                stop_loss_on_fill: raw.stop_loss_on_fill,
                guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                trade_client_extensions: raw.trade_client_extensions,
                filling_transaction_id: raw.filling_transaction_id,
                filled_time: raw.filled_time,
                trade_opened_id: raw.trade_opened_id,
                trade_reduced_id: raw.trade_reduced_id,
                trade_closed_ids: raw.trade_closed_ids,
                cancelling_transaction_id: raw.cancelling_transaction_id,
                cancelled_time: raw.cancelled_time,
                replaces_order_id: raw.replaces_order_id,
                replaced_by_order_id: raw.replaced_by_order_id,
            }),
            Some(OrderType::MarketIfTouched) => Order::MarketIfTouched(MarketIfTouchedOrder {
                base: raw.base,
                instrument: raw.instrument,
                units: raw.units,
                price: raw.price,
                price_bound: raw.price_bound,
                time_in_force: raw.time_in_force,
                gtd_time: raw.gtd_time,
                position_fill: raw.position_fill,
                trigger_condition: raw.trigger_condition,
                initial_market_price: raw.initial_market_price,
                take_profit_on_fill: raw.take_profit_on_fill,
                stop_loss_on_fill: raw.stop_loss_on_fill,
                guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                trade_client_extensions: raw.trade_client_extensions,
                filling_transaction_id: raw.filling_transaction_id,
                filled_time: raw.filled_time,
                trade_opened_id: raw.trade_opened_id,
                trade_reduced_id: raw.trade_reduced_id,
                trade_closed_ids: raw.trade_closed_ids,
                cancelling_transaction_id: raw.cancelling_transaction_id,
                cancelled_time: raw.cancelled_time,
                replaces_order_id: raw.replaces_order_id,
                replaced_by_order_id: raw.replaced_by_order_id,
            }),
            Some(OrderType::TakeProfit) => Order::TakeProfit(TakeProfitOrder {
                base: raw.base,
                trade_id: raw.trade_id,
                client_trade_id: raw.client_trade_id,
                price: raw.price,
                time_in_force: raw.time_in_force,
                gtd_time: raw.gtd_time,
                trigger_condition: raw.trigger_condition,
                filling_transaction_id: raw.filling_transaction_id,
                filled_time: raw.filled_time,
                trade_opened_id: raw.trade_opened_id,
                trade_reduced_id: raw.trade_reduced_id,
                trade_closed_ids: raw.trade_closed_ids,
                cancelling_transaction_id: raw.cancelling_transaction_id,
                cancelled_time: raw.cancelled_time,
                replaces_order_id: raw.replaces_order_id,
                replaced_by_order_id: raw.replaced_by_order_id,
            }),
            Some(OrderType::StopLoss) => Order::StopLoss(StopLossOrder {
                base: raw.base,
                trade_id: raw.trade_id,
                client_trade_id: raw.client_trade_id,
                price: raw.price,
                distance: raw.distance,
                time_in_force: raw.time_in_force,
                gtd_time: raw.gtd_time,
                trigger_condition: raw.trigger_condition,
                guaranteed: raw.guaranteed,
                guaranteed_execution_premium: raw.guaranteed_execution_premium,
                filling_transaction_id: raw.filling_transaction_id,
                filled_time: raw.filled_time,
                trade_opened_id: raw.trade_opened_id,
                trade_reduced_id: raw.trade_reduced_id,
                trade_closed_ids: raw.trade_closed_ids,
                cancelling_transaction_id: raw.cancelling_transaction_id,
                cancelled_time: raw.cancelled_time,
                replaces_order_id: raw.replaces_order_id,
                replaced_by_order_id: raw.replaced_by_order_id,
            }),
            Some(OrderType::GuaranteedStopLoss) => {
                Order::GuaranteedStopLoss(GuaranteedStopLossOrder {
                    base: raw.base,
                    trade_id: raw.trade_id,
                    client_trade_id: raw.client_trade_id,
                    price: raw.price,
                    distance: raw.distance,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    trigger_condition: raw.trigger_condition,
                    guaranteed_execution_premium: raw.guaranteed_execution_premium,
                    filling_transaction_id: raw.filling_transaction_id,
                    filled_time: raw.filled_time,
                    trade_opened_id: raw.trade_opened_id,
                    trade_reduced_id: raw.trade_reduced_id,
                    trade_closed_ids: raw.trade_closed_ids,
                    cancelling_transaction_id: raw.cancelling_transaction_id,
                    cancelled_time: raw.cancelled_time,
                    replaces_order_id: raw.replaces_order_id,
                    replaced_by_order_id: raw.replaced_by_order_id,
                })
            }
            Some(OrderType::TrailingStopLoss) => Order::TrailingStopLoss(TrailingStopLossOrder {
                base: raw.base,
                trade_id: raw.trade_id,
                client_trade_id: raw.client_trade_id,
                distance: raw.distance,
                time_in_force: raw.time_in_force,
                gtd_time: raw.gtd_time,
                trigger_condition: raw.trigger_condition,
                trailing_stop_value: raw.trailing_stop_value,
                filling_transaction_id: raw.filling_transaction_id,
                filled_time: raw.filled_time,
                trade_opened_id: raw.trade_opened_id,
                trade_reduced_id: raw.trade_reduced_id,
                trade_closed_ids: raw.trade_closed_ids,
                cancelling_transaction_id: raw.cancelling_transaction_id,
                cancelled_time: raw.cancelled_time,
                replaces_order_id: raw.replaces_order_id,
                replaced_by_order_id: raw.replaced_by_order_id,
            }),
            None => {
                tracing::debug!(
                    order_type = %raw.order_type,
                    "Unrecognized order type, keeping raw record"
                );
                Order::Unknown(Box::new(raw))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderTriggerCondition, TimeInForce};
    use crate::shared::{DecimalNumber, InstrumentName, PriceValue, TradeId};

    fn raw(json: &str) -> RawOrder {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_market_order() {
        let order = Order::from(raw(
            r#"{"type":"MARKET","instrument":"EUR_USD","units":"100","timeInForce":"FOK"}"#,
        ));
        match order {
            Order::Market(o) => {
                assert_eq!(o.instrument, Some(InstrumentName::from("EUR_USD")));
                assert_eq!(o.units, Some(DecimalNumber::from("100")));
                assert_eq!(o.time_in_force, Some(TimeInForce::Fok));
            }
            other => panic!("Expected market order, got {:?}", other),
        }
    }

    #[test]
    fn test_stop_loss_order() {
        let order = Order::from(raw(
            r#"{"type":"STOP_LOSS","tradeID":"123","price":"1.2000","guaranteed":true}"#,
        ));
        match order {
            Order::StopLoss(o) => {
                assert_eq!(o.trade_id, Some(TradeId::from("123")));
                assert_eq!(o.price, Some(PriceValue::from("1.2000")));
                assert_eq!(o.guaranteed, Some(true));
            }
            other => panic!("Expected stop loss order, got {:?}", other),
        }
    }

    #[test]
    fn test_irrelevant_fields_dropped() {
        let input = raw(
            r#"{"type":"TRAILING_STOP_LOSS","tradeID":"9","distance":"0.0050","instrument":"EUR_USD","units":"10","triggerCondition":"BID"}"#,
        );
        assert!(input.instrument.is_some());
        match Order::from(input) {
            Order::TrailingStopLoss(o) => {
                assert_eq!(o.distance, Some(DecimalNumber::from("0.0050")));
                assert_eq!(o.trigger_condition, Some(OrderTriggerCondition::Bid));
                let json = serde_json::to_value(&o).unwrap();
                assert!(json.get("instrument").is_none());
                assert!(json.get("units").is_none());
            }
            other => panic!("Expected trailing stop loss order, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_keeps_raw() {
        let input = raw(r#"{"type":"UNKNOWN_FUTURE_TYPE","foo":"bar","price":"1.5"}"#);
        let order = Order::from(input.clone());
        assert!(order.is_unknown());
        assert_eq!(order.as_raw(), Some(&input));
        assert_eq!(order.type_name(), "UNKNOWN_FUTURE_TYPE");
    }

    #[test]
    fn test_missing_type_is_unknown() {
        let order = Order::from(raw(r#"{"id":"5"}"#));
        assert!(order.is_unknown());
        assert_eq!(order.id().as_str(), "5");
    }

    #[test]
    fn test_every_type_resolves() {
        for t in OrderType::ALL {
            let order = Order::from(raw(&format!(r#"{{"type":"{}","id":"1"}}"#, t.as_str())));
            assert_eq!(order.order_type(), Some(t));
        }
    }

    /// Every field of the superset record, each with a distinct value.
    fn every_field() -> serde_json::Value {
        serde_json::json!({
            "id": "101",
            "createTime": "2016-06-22T18:41:29.285982286Z",
            "state": "PENDING",
            "clientExtensions": {"id": "my-order", "tag": "strategy-9", "comment": "entry"},
            "instrument": "EUR_USD",
            "units": "-1500",
            "timeInForce": "GTD",
            "priceBound": "1.15100",
            "positionFill": "REDUCE_FIRST",
            "tradeClose": {"tradeID": "71", "clientTradeID": "close-71", "units": "ALL"},
            "longPositionCloseout": {"instrument": "EUR_USD", "units": "ALL"},
            "shortPositionCloseout": {"instrument": "USD_JPY", "units": "NONE"},
            "marginCloseout": {"reason": "MARGIN_CHECK_VIOLATION"},
            "delayedTradeClose": {"tradeID": "72", "clientTradeID": "delayed-72", "sourceTransactionID": "90"},
            "takeProfitOnFill": {"price": "1.16000", "timeInForce": "GTC"},
            "stopLossOnFill": {"distance": "0.0050", "timeInForce": "GTC"},
            "guaranteedStopLossOnFill": {"price": "1.14000"},
            "trailingStopLossOnFill": {"distance": "0.0075"},
            "tradeClientExtensions": {"tag": "opened-by-101"},
            "fillingTransactionID": "102",
            "filledTime": "2016-06-22T18:42:00.000000000Z",
            "tradeOpenedID": "73",
            "tradeReducedID": "74",
            "tradeClosedIDs": ["75", "76"],
            "cancellingTransactionID": "103",
            "cancelledTime": "2016-06-22T18:43:00.000000000Z",
            "price": "1.15050",
            "tradeState": "OPEN",
            "gtdTime": "2016-06-29T18:41:29.000000000Z",
            "triggerCondition": "MID",
            "replacesOrderID": "99",
            "replacedByOrderID": "104",
            "initialMarketPrice": "1.15020",
            "tradeID": "77",
            "clientTradeID": "my-trade-77",
            "distance": "0.0025",
            "guaranteed": false,
            "guaranteedExecutionPremium": "0.35",
            "trailingStopValue": "1.14800"
        })
    }

    fn decode_as(order_type: OrderType, value: serde_json::Value) -> Order {
        let order = match order_type {
            OrderType::Market => serde_json::from_value(value).map(Order::Market),
            OrderType::FixedPrice => serde_json::from_value(value).map(Order::FixedPrice),
            OrderType::Limit => serde_json::from_value(value).map(Order::Limit),
            OrderType::Stop => serde_json::from_value(value).map(Order::Stop),
            OrderType::MarketIfTouched => serde_json::from_value(value).map(Order::MarketIfTouched),
            OrderType::TakeProfit => serde_json::from_value(value).map(Order::TakeProfit),
            OrderType::StopLoss => serde_json::from_value(value).map(Order::StopLoss),
            OrderType::GuaranteedStopLoss => {
                serde_json::from_value(value).map(Order::GuaranteedStopLoss)
            }
            OrderType::TrailingStopLoss => serde_json::from_value(value).map(Order::TrailingStopLoss),
        };
        order.unwrap()
    }

    #[test]
    fn test_resolution_copies_every_field_of_each_type() {
        for t in OrderType::ALL {
            let mut input = every_field();
            input["type"] = serde_json::Value::from(t.as_str());

            let resolved = Order::from(serde_json::from_value::<RawOrder>(input.clone()).unwrap());
            assert_eq!(resolved, decode_as(t, input.clone()), "{}", t.as_str());

            let output = serde_json::to_value(&resolved).unwrap();
            for (key, value) in output.as_object().unwrap() {
                assert_eq!(Some(value), input.get(key), "{} field {}", t.as_str(), key);
            }

            let back: Order = serde_json::from_value(output).unwrap();
            assert_eq!(back, resolved, "{}", t.as_str());
        }
    }
}
