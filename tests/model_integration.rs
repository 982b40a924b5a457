//! End-to-end decoding tests against representative server payloads.
//!
//! Each module exercises one family through the public API only: JSON in,
//! resolved values out, and back to JSON again.
//!
//! Run with:
//! ```bash
//! cargo test --test model_integration
//! ```

use fxtrade_model::prelude::*;

mod order_types {
    use super::*;
    use fxtrade_model::domain::order::{
        LimitOrder, OrderBase, OrderTriggerCondition, OrdersResponse,
    };

    #[test]
    fn test_market_order_from_superset() {
        let order: Order = serde_json::from_str(
            r#"{"type":"MARKET","instrument":"EUR_USD","units":"100","timeInForce":"FOK"}"#,
        )
        .unwrap();
        match order {
            Order::Market(market) => {
                assert_eq!(market.instrument.unwrap(), "EUR_USD");
                assert_eq!(market.units.unwrap(), "100");
                assert_eq!(market.time_in_force, Some(TimeInForce::Fok));
            }
            other => panic!("expected market order, got {other:?}"),
        }
    }

    #[test]
    fn test_stop_loss_order_from_superset() {
        let order: Order = serde_json::from_str(
            r#"{"type":"STOP_LOSS","tradeID":"123","price":"1.2000","guaranteed":true}"#,
        )
        .unwrap();
        match order {
            Order::StopLoss(stop_loss) => {
                assert_eq!(stop_loss.trade_id.unwrap(), "123");
                assert_eq!(stop_loss.price.unwrap(), "1.2000");
                assert_eq!(stop_loss.guaranteed, Some(true));
            }
            other => panic!("expected stop loss order, got {other:?}"),
        }
    }

    #[test]
    fn test_every_discriminator_resolves_to_its_variant() {
        for order_type in OrderType::ALL {
            let json = format!(
                r#"{{"type":"{}","id":"42","createTime":"2016-06-22T18:41:29.264030555Z","state":"PENDING"}}"#,
                order_type
            );
            let order: Order = serde_json::from_str(&json).unwrap();
            assert_eq!(order.order_type(), Some(order_type));
            assert_eq!(order.type_name(), order_type.as_str());
            assert_eq!(order.id().as_str(), "42");
            assert_eq!(order.state(), Some(OrderState::Pending));
            assert!(!order.is_unknown());
        }
    }

    #[test]
    fn test_unknown_discriminator_keeps_superset_record() {
        let json = r#"{"type":"UNKNOWN_FUTURE_TYPE","foo":"bar"}"#;
        let raw: RawOrder = serde_json::from_str(json).unwrap();
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order, Order::Unknown(Box::new(raw.clone())));
        assert_eq!(order.as_raw(), Some(&raw));
        assert_eq!(order.order_type(), None);
    }

    #[test]
    fn test_fields_outside_variant_are_dropped() {
        let order: Order = serde_json::from_str(
            r#"{"type":"TAKE_PROFIT","tradeID":"7","price":"1.5","units":"100","distance":"0.01"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "TAKE_PROFIT");
        assert_eq!(json["tradeID"], "7");
        assert!(json.get("units").is_none());
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn test_concrete_variant_round_trips() {
        let original = Order::Limit(LimitOrder {
            base: OrderBase {
                id: "6372".into(),
                create_time: "2016-06-22T18:41:29.285982286Z".into(),
                state: Some(OrderState::Pending),
                client_extensions: Some(
                    ClientExtensions::new().with_id("my-order").with_tag("strategy-9"),
                ),
            },
            instrument: Some("USD_CAD".into()),
            units: Some("-1000".into()),
            price: Some("1.30000".into()),
            time_in_force: Some(TimeInForce::Gtc),
            trigger_condition: Some(OrderTriggerCondition::Default),
            take_profit_on_fill: Some(TakeProfitDetails::at_price("1.25000")),
            ..Default::default()
        });

        let json = serde_json::to_string(&original).unwrap();
        assert!(json.starts_with(r#"{"type":"LIMIT""#));

        let decoded: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_unknown_round_trips_unchanged() {
        let json = r#"{"type":"SOMETHING_NEW","id":"3","price":"1.1"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        let again: Order = serde_json::from_str(&serde_json::to_string(&order).unwrap()).unwrap();
        assert_eq!(again, order);
    }

    #[test]
    fn test_orders_response_mixes_known_and_unknown() {
        let response: OrdersResponse = serde_json::from_str(
            r#"{
                "orders": [
                    {"type":"LIMIT","id":"1","price":"1.1","units":"10","instrument":"EUR_USD"},
                    {"type":"TRAILING_STOP_LOSS","id":"2","tradeID":"9","distance":"0.005"},
                    {"type":"NEW_KIND","id":"3"}
                ],
                "lastTransactionID": "6375"
            }"#,
        )
        .unwrap();
        let types: Vec<_> = response.orders.iter().map(|o| o.order_type()).collect();
        assert_eq!(
            types,
            vec![Some(OrderType::Limit), Some(OrderType::TrailingStopLoss), None]
        );
        assert_eq!(response.last_transaction_id.unwrap(), "6375");

        assert!(Decoder::default().check_order(response.orders[2].clone()).is_ok());
        assert!(Decoder::strict().check_order(response.orders[2].clone()).is_err());
    }
}

mod transaction_types {
    use super::*;
    use fxtrade_model::domain::transaction::{
        OrderFillReason, OrderFillTransaction, TradeOpen, TransactionBase, TransactionsResponse,
    };

    #[test]
    fn test_order_fill_from_superset() {
        let txn: Transaction = serde_json::from_str(
            r#"{"type":"ORDER_FILL","orderID":"55","units":"-50","pl":"12.34"}"#,
        )
        .unwrap();
        match txn {
            Transaction::OrderFill(fill) => {
                assert_eq!(fill.order_id.unwrap(), "55");
                assert_eq!(fill.units.unwrap(), "-50");
                assert_eq!(fill.pl.unwrap(), "12.34");
            }
            other => panic!("expected order fill, got {other:?}"),
        }
    }

    #[test]
    fn test_every_discriminator_resolves_to_its_variant() {
        for txn_type in TransactionType::ALL {
            let json = format!(
                r#"{{"type":"{}","id":"6410","accountID":"001-011-5838423-001","batchID":"6409"}}"#,
                txn_type
            );
            let txn: Transaction = serde_json::from_str(&json).unwrap();
            assert_eq!(txn.transaction_type(), Some(txn_type));
            assert_eq!(txn.id().as_str(), "6410");
            assert_eq!(txn.account_id().as_str(), "001-011-5838423-001");
            assert_eq!(txn.batch_id().as_str(), "6409");
        }
    }

    #[test]
    fn test_unknown_discriminator_keeps_superset_record() {
        let json = r#"{"type":"UNKNOWN_FUTURE_TYPE","foo":"bar"}"#;
        let raw: RawTransaction = serde_json::from_str(json).unwrap();
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn, Transaction::Unknown(Box::new(raw)));
    }

    #[test]
    fn test_concrete_variant_round_trips() {
        let original = Transaction::OrderFill(OrderFillTransaction {
            base: TransactionBase {
                id: "6410".into(),
                time: "2016-06-22T18:41:29.285982286Z".into(),
                user_id: Some(5838423),
                account_id: "001-011-5838423-001".into(),
                batch_id: "6409".into(),
                request_id: "24149521303969504".into(),
            },
            order_id: Some("6409".into()),
            instrument: Some("EUR_USD".into()),
            units: Some("100".into()),
            price: Some("1.13032".into()),
            reason: Some(Reason::Known(OrderFillReason::MarketOrder)),
            pl: Some("0.0000".into()),
            account_balance: Some("99999.9000".into()),
            trade_opened: Some(TradeOpen {
                trade_id: "6410".into(),
                units: "100".into(),
                ..Default::default()
            }),
            ..Default::default()
        });

        let json = serde_json::to_string(&original).unwrap();
        assert!(json.starts_with(r#"{"type":"ORDER_FILL""#));

        let decoded: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_transactions_response_preserves_order() {
        let response: TransactionsResponse = serde_json::from_str(
            r#"{
                "transactions": [
                    {"type":"MARKET_ORDER","id":"6409","instrument":"EUR_USD","units":"100","reason":"CLIENT_ORDER"},
                    {"type":"ORDER_FILL","id":"6410","orderID":"6409","reason":"MARKET_ORDER"},
                    {"type":"BRAND_NEW","id":"6411"}
                ],
                "lastTransactionID": "6411"
            }"#,
        )
        .unwrap();
        let ids: Vec<_> = response.transactions.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["6409", "6410", "6411"]);
        assert!(response.transactions[2].is_unknown());
    }
}

mod decoding_policy {
    use super::*;

    #[test]
    fn test_strict_decoder_rejects_unknown_types() {
        let decoder = Decoder::new(DecodeConfig::strict());
        let err = decoder
            .decode_transaction(r#"{"type":"UNKNOWN_FUTURE_TYPE","foo":"bar"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("UNKNOWN_FUTURE_TYPE"));
    }

    #[test]
    fn test_lenient_decoder_matches_plain_serde() {
        let json = r#"{"type":"GUARANTEED_STOP_LOSS","tradeID":"1","price":"1.0"}"#;
        let via_decoder = Decoder::default().decode_order(json).unwrap();
        let via_serde: Order = serde_json::from_str(json).unwrap();
        assert_eq!(via_decoder, via_serde);
    }

    #[test]
    fn test_malformed_payload_surfaces_json_error() {
        let err = Decoder::default()
            .decode_transaction(r#"{"type":"ORDER_FILL","units":[1]}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::Serde(_)));
    }
}

mod requests_and_queries {
    use super::*;

    #[test]
    fn test_market_order_request_body() {
        let body = CreateOrderBody::new(
            MarketOrderRequest::new("EUR_USD", "100")
                .with_client_extensions(ClientExtensions::new().with_comment("scalp")),
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["order"]["type"], "MARKET");
        assert_eq!(json["order"]["instrument"], "EUR_USD");
        assert_eq!(json["order"]["units"], "100");
        assert_eq!(json["order"]["clientExtensions"]["comment"], "scalp");
    }

    #[test]
    fn test_list_queries() {
        let orders = OrdersParams::new()
            .with_instrument("EUR_USD")
            .with_count(10)
            .to_query_string()
            .unwrap();
        assert_eq!(orders, "instrument=EUR_USD&count=10");

        let transactions = TransactionsParams::new()
            .with_filter([TransactionType::OrderFill])
            .to_query_string()
            .unwrap();
        assert_eq!(transactions, "type=ORDER_FILL");
    }

    #[test]
    fn test_specifiers() {
        let by_client: OrderSpecifier = "@my-order".parse().unwrap();
        assert!(by_client.is_client());
        assert_eq!(by_client.to_string(), "@my-order");

        let by_id: TradeSpecifier = "6410".parse().unwrap();
        assert_eq!(by_id, TradeSpecifier::Id("6410".into()));
    }
}

mod account_ids {
    use super::*;

    #[test]
    fn test_parses_four_components() {
        let parts = AccountId::from("001-011-5838423-001").parts().unwrap();
        assert_eq!(parts.site, "001");
        assert_eq!(parts.division, "011");
        assert_eq!(parts.user, "5838423");
        assert_eq!(parts.account_number, "001");
        assert_eq!(AccountId::from(parts), "001-011-5838423-001");
    }

    #[test]
    fn test_rejects_wrong_separator_count() {
        for bad in ["001-011-5838423", "001-011-5838423-001-9", "", "0010115838423001"] {
            let err = AccountId::from(bad).parts().unwrap_err();
            assert!(matches!(err, ModelError::InvalidAccountId(_)), "{bad}");
        }
    }
}
