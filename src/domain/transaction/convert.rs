//! Conversions: superset wire record → resolved [`Transaction`].

use super::variants::*;
use super::wire::RawTransaction;
use super::{Transaction, TransactionType};
use crate::shared::serde_util::parse_enum;

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        match parse_enum::<TransactionType>(&raw.transaction_type) {
            Some(TransactionType::Create) => Transaction::Create(CreateTransaction {
                base: raw.base,
                division_id: raw.division_id,
                site_id: raw.site_id,
                account_user_id: raw.account_user_id,
                account_number: raw.account_number,
                home_currency: raw.home_currency,
            }),
            Some(TransactionType::Close) => Transaction::Close(CloseTransaction { base: raw.base }),
            Some(TransactionType::Reopen) => {
                Transaction::Reopen(ReopenTransaction { base: raw.base })
            }
            Some(TransactionType::ClientConfigure) => {
                Transaction::ClientConfigure(ClientConfigureTransaction {
                    base: raw.base,
                    alias: raw.alias,
                    margin_rate: raw.margin_rate,
                })
            }
            Some(TransactionType::ClientConfigureReject) => {
                Transaction::ClientConfigureReject(ClientConfigureRejectTransaction {
                    base: raw.base,
                    alias: raw.alias,
                    margin_rate: raw.margin_rate,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::TransferFunds) => {
                Transaction::TransferFunds(TransferFundsTransaction {
                    base: raw.base,
                    amount: raw.amount,
                    funding_reason: raw.funding_reason.map(Into::into),
                    comment: raw.comment,
                    account_balance: raw.account_balance,
                })
            }
            Some(TransactionType::TransferFundsReject) => {
                Transaction::TransferFundsReject(TransferFundsRejectTransaction {
                    base: raw.base,
                    amount: raw.amount,
                    funding_reason: raw.funding_reason.map(Into::into),
                    comment: raw.comment,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::MarketOrder) => Transaction::MarketOrder(MarketOrderTransaction {
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
                reason: raw.reason.map(Into::into),
                client_extensions: raw.client_extensions,
                take_profit_on_fill: raw.take_profit_on_fill,
                stop_loss_on_fill: raw.stop_loss_on_fill,
                guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                trade_client_extensions: raw.trade_client_extensions,
            }),
            Some(TransactionType::MarketOrderReject) => {
                Transaction::MarketOrderReject(MarketOrderRejectTransaction {
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
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    take_profit_on_fill: raw.take_profit_on_fill,
                    stop_loss_on_fill: raw.stop_loss_on_fill,
                    guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                    trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                    trade_client_extensions: raw.trade_client_extensions,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::FixedPriceOrder) => {
                Transaction::FixedPriceOrder(FixedPriceOrderTransaction {
                    base: raw.base,
                    instrument: raw.instrument,
                    units: raw.units,
                    price: raw.price,
                    position_fill: raw.position_fill,
                    trade_state: raw.trade_state,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    take_profit_on_fill: raw.take_profit_on_fill,
                    stop_loss_on_fill: raw.stop_loss_on_fill,
                    guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                    trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                    trade_client_extensions: raw.trade_client_extensions,
                })
            }
            Some(TransactionType::LimitOrder) => Transaction::LimitOrder(LimitOrderTransaction {
                base: raw.base,
                instrument: raw.instrument,
                units: raw.units,
                price: raw.price,
                time_in_force: raw.time_in_force,
                gtd_time: raw.gtd_time,
                position_fill: raw.position_fill,
                trigger_condition: raw.trigger_condition,
                reason: raw.reason.map(Into::into),
                client_extensions: raw.client_extensions,
                take_profit_on_fill: raw.take_profit_on_fill,
                stop_loss_on_fill: raw.stop_loss_on_fill,
                guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                trade_client_extensions: raw.trade_client_extensions,
                replaces_order_id: raw.replaces_order_id,
                cancelling_transaction_id: raw.cancelling_transaction_id,
            }),
            Some(TransactionType::LimitOrderReject) => {
                Transaction::LimitOrderReject(LimitOrderRejectTransaction {
                    base: raw.base,
                    instrument: raw.instrument,
                    units: raw.units,
                    price: raw.price,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    position_fill: raw.position_fill,
                    trigger_condition: raw.trigger_condition,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    take_profit_on_fill: raw.take_profit_on_fill,
                    stop_loss_on_fill: raw.stop_loss_on_fill,
                    guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                    trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                    trade_client_extensions: raw.trade_client_extensions,
                    intended_replaces_order_id: raw.intended_replaces_order_id,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::StopOrder) => Transaction::StopOrder(StopOrderTransaction {
                base: raw.base,
                instrument: raw.instrument,
                units: raw.units,
                price: raw.price,
                price_bound: raw.price_bound,
                time_in_force: raw.time_in_force,
                gtd_time: raw.gtd_time,
                position_fill: raw.position_fill,
                trigger_condition: raw.trigger_condition,
                reason: raw.reason.map(Into::into),
                client_extensions: raw.client_extensions,
                take_profit_on_fill: raw.take_profit_on_fill,
                stop_loss_on_fill: raw.stop_loss_on_fill,
                guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                trade_client_extensions: raw.trade_client_extensions,
                replaces_order_id: raw.replaces_order_id,
                cancelling_transaction_id: raw.cancelling_transaction_id,
            }),
            Some(TransactionType::StopOrderReject) => {
                Transaction::StopOrderReject(StopOrderRejectTransaction {
                    base: raw.base,
                    instrument: raw.instrument,
                    units: raw.units,
                    price: raw.price,
                    price_bound: raw.price_bound,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    position_fill: raw.position_fill,
                    trigger_condition: raw.trigger_condition,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    take_profit_on_fill: raw.take_profit_on_fill,
                    stop_loss_on_fill: raw.stop_loss_on_fill,
                    guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                    trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                    trade_client_extensions: raw.trade_client_extensions,
                    intended_replaces_order_id: raw.intended_replaces_order_id,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::MarketIfTouchedOrder) => {
                Transaction::MarketIfTouchedOrder(MarketIfTouchedOrderTransaction {
                    base: raw.base,
                    instrument: raw.instrument,
                    units: raw.units,
                    price: raw.price,
                    price_bound: raw.price_bound,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    position_fill: raw.position_fill,
                    trigger_condition: raw.trigger_condition,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    take_profit_on_fill: raw.take_profit_on_fill,
                    stop_loss_on_fill: raw.stop_loss_on_fill,
                    guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                    trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                    trade_client_extensions: raw.trade_client_extensions,
                    replaces_order_id: raw.replaces_order_id,
                    cancelling_transaction_id: raw.cancelling_transaction_id,
                })
            }
            Some(TransactionType::MarketIfTouchedOrderReject) => {
                Transaction::MarketIfTouchedOrderReject(MarketIfTouchedOrderRejectTransaction {
                    base: raw.base,
                    instrument: raw.instrument,
                    units: raw.units,
                    price: raw.price,
                    price_bound: raw.price_bound,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    position_fill: raw.position_fill,
                    trigger_condition: raw.trigger_condition,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    take_profit_on_fill: raw.take_profit_on_fill,
                    stop_loss_on_fill: raw.stop_loss_on_fill,
                    guaranteed_stop_loss_on_fill: raw.guaranteed_stop_loss_on_fill,
                    trailing_stop_loss_on_fill: raw.trailing_stop_loss_on_fill,
                    trade_client_extensions: raw.trade_client_extensions,
                    intended_replaces_order_id: raw.intended_replaces_order_id,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::TakeProfitOrder) => {
                Transaction::TakeProfitOrder(TakeProfitOrderTransaction {
                    base: raw.base,
                    trade_id: raw.trade_id,
                    client_trade_id: raw.client_trade_id,
                    price: raw.price,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    trigger_condition: raw.trigger_condition,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    order_fill_transaction_id: raw.order_fill_transaction_id,
                    replaces_order_id: raw.replaces_order_id,
                    cancelling_transaction_id: raw.cancelling_transaction_id,
                })
            }
            Some(TransactionType::TakeProfitOrderReject) => {
                Transaction::TakeProfitOrderReject(TakeProfitOrderRejectTransaction {
                    base: raw.base,
                    trade_id: raw.trade_id,
                    client_trade_id: raw.client_trade_id,
                    price: raw.price,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    trigger_condition: raw.trigger_condition,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    order_fill_transaction_id: raw.order_fill_transaction_id,
                    intended_replaces_order_id: raw.intended_replaces_order_id,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::StopLossOrder) => {
                Transaction::StopLossOrder(StopLossOrderTransaction {
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
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    order_fill_transaction_id: raw.order_fill_transaction_id,
                    replaces_order_id: raw.replaces_order_id,
                    cancelling_transaction_id: raw.cancelling_transaction_id,
                })
            }
            Some(TransactionType::StopLossOrderReject) => {
                Transaction::StopLossOrderReject(StopLossOrderRejectTransaction {
                    base: raw.base,
                    trade_id: raw.trade_id,
                    client_trade_id: raw.client_trade_id,
                    price: raw.price,
                    distance: raw.distance,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    trigger_condition: raw.trigger_condition,
                    guaranteed: raw.guaranteed,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    order_fill_transaction_id: raw.order_fill_transaction_id,
                    intended_replaces_order_id: raw.intended_replaces_order_id,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::GuaranteedStopLossOrder) => {
                Transaction::GuaranteedStopLossOrder(GuaranteedStopLossOrderTransaction {
                    base: raw.base,
                    trade_id: raw.trade_id,
                    client_trade_id: raw.client_trade_id,
                    price: raw.price,
                    distance: raw.distance,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    trigger_condition: raw.trigger_condition,
                    guaranteed_execution_premium: raw.guaranteed_execution_premium,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    order_fill_transaction_id: raw.order_fill_transaction_id,
                    replaces_order_id: raw.replaces_order_id,
                    cancelling_transaction_id: raw.cancelling_transaction_id,
                })
            }
            Some(TransactionType::GuaranteedStopLossOrderReject) => {
                Transaction::GuaranteedStopLossOrderReject(
                    GuaranteedStopLossOrderRejectTransaction {
                        base: raw.base,
                        trade_id: raw.trade_id,
                        client_trade_id: raw.client_trade_id,
                        price: raw.price,
                        distance: raw.distance,
                        time_in_force: raw.time_in_force,
                        gtd_time: raw.gtd_time,
                        trigger_condition: raw.trigger_condition,
                        reason: raw.reason.map(Into::into),
                        client_extensions: raw.client_extensions,
                        order_fill_transaction_id: raw.order_fill_transaction_id,
                        intended_replaces_order_id: raw.intended_replaces_order_id,
                        reject_reason: raw.reject_reason.map(Into::into),
                    },
                )
            }
            Some(TransactionType::TrailingStopLossOrder) => {
                Transaction::TrailingStopLossOrder(TrailingStopLossOrderTransaction {
                    base: raw.base,
                    trade_id: raw.trade_id,
                    client_trade_id: raw.client_trade_id,
                    distance: raw.distance,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    trigger_condition: raw.trigger_condition,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    order_fill_transaction_id: raw.order_fill_transaction_id,
                    replaces_order_id: raw.replaces_order_id,
                    cancelling_transaction_id: raw.cancelling_transaction_id,
                })
            }
            Some(TransactionType::TrailingStopLossOrderReject) => {
                Transaction::TrailingStopLossOrderReject(TrailingStopLossOrderRejectTransaction {
                    base: raw.base,
                    trade_id: raw.trade_id,
                    client_trade_id: raw.client_trade_id,
                    distance: raw.distance,
                    time_in_force: raw.time_in_force,
                    gtd_time: raw.gtd_time,
                    trigger_condition: raw.trigger_condition,
                    reason: raw.reason.map(Into::into),
                    client_extensions: raw.client_extensions,
                    order_fill_transaction_id: raw.order_fill_transaction_id,
                    intended_replaces_order_id: raw.intended_replaces_order_id,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::OrderFill) => Transaction::OrderFill(OrderFillTransaction {
                base: raw.base,
                order_id: raw.order_id,
                client_order_id: raw.client_order_id,
                instrument: raw.instrument,
                units: raw.units,
                requested_units: raw.requested_units,
                price: raw.price,
                full_vwap: raw.full_vwap,
                full_price: raw.full_price,
                reason: raw.reason.map(Into::into),
                pl: raw.pl,
                quote_pl: raw.quote_pl,
                financing: raw.financing,
                base_financing: raw.base_financing,
                quote_financing: raw.quote_financing,
                commission: raw.commission,
                guaranteed_execution_fee: raw.guaranteed_execution_fee,
                quote_guaranteed_execution_fee: raw.quote_guaranteed_execution_fee,
                account_balance: raw.account_balance,
                trade_opened: raw.trade_opened,
                trades_closed: raw.trades_closed,
                trade_reduced: raw.trade_reduced,
                half_spread_cost: raw.half_spread_cost,
            }),
            Some(TransactionType::OrderCancel) => Transaction::OrderCancel(OrderCancelTransaction {
                base: raw.base,
                order_id: raw.order_id,
                client_order_id: raw.client_order_id,
                reason: raw.reason.map(Into::into),
                replaced_by_order_id: raw.replaced_by_order_id,
            }),
            Some(TransactionType::OrderCancelReject) => {
                Transaction::OrderCancelReject(OrderCancelRejectTransaction {
                    base: raw.base,
                    order_id: raw.order_id,
                    client_order_id: raw.client_order_id,
                    reject_reason: raw.reject_reason.map(Into::into),
                })
            }
            Some(TransactionType::OrderClientExtensionsModify) => {
                Transaction::OrderClientExtensionsModify(OrderClientExtensionsModifyTransaction {
                    base: raw.base,
                    order_id: raw.order_id,
                    client_order_id: raw.client_order_id,
                    client_extensions_modify: raw.client_extensions_modify,
                    trade_client_extensions_modify: raw.trade_client_extensions_modify,
                })
            }
            Some(TransactionType::OrderClientExtensionsModifyReject) => {
                Transaction::OrderClientExtensionsModifyReject(
                    OrderClientExtensionsModifyRejectTransaction {
                        base: raw.base,
                        order_id: raw.order_id,
                        client_order_id: raw.client_order_id,
                        client_extensions_modify: raw.client_extensions_modify,
                        trade_client_extensions_modify: raw.trade_client_extensions_modify,
                        reject_reason: raw.reject_reason.map(Into::into),
                    },
                )
            }
            Some(TransactionType::TradeClientExtensionsModify) => {
                Transaction::TradeClientExtensionsModify(TradeClientExtensionsModifyTransaction {
                    base: raw.base,
                    trade_id: raw.trade_id,
                    client_trade_id: raw.client_trade_id,
                    trade_client_extensions_modify: raw.trade_client_extensions_modify,
                })
            }
            Some(TransactionType::TradeClientExtensionsModifyReject) => {
                Transaction::TradeClientExtensionsModifyReject(
                    TradeClientExtensionsModifyRejectTransaction {
                        base: raw.base,
                        trade_id: raw.trade_id,
                        client_trade_id: raw.client_trade_id,
                        trade_client_extensions_modify: raw.trade_client_extensions_modify,
                        reject_reason: raw.reject_reason.map(Into::into),
                    },
                )
            }
            Some(TransactionType::MarginCallEnter) => {
                Transaction::MarginCallEnter(MarginCallEnterTransaction { base: raw.base })
            }
            Some(TransactionType::MarginCallExtend) => {
                Transaction::MarginCallExtend(MarginCallExtendTransaction {
                    base: raw.base,
                    extension_number: raw.extension_number,
                })
            }
            Some(TransactionType::MarginCallExit) => {
                Transaction::MarginCallExit(MarginCallExitTransaction { base: raw.base })
            }
            Some(TransactionType::DelayedTradeClosure) => {
                Transaction::DelayedTradeClosure(DelayedTradeClosureTransaction {
                    base: raw.base,
                    reason: raw.reason.map(Into::into),
                    trade_ids: raw.trade_ids,
                })
            }
            Some(TransactionType::DailyFinancing) => {
                Transaction::DailyFinancing(DailyFinancingTransaction {
                    base: raw.base,
                    financing: raw.financing,
                    account_balance: raw.account_balance,
                    account_financing_mode: raw.account_financing_mode,
                    position_financings: raw.position_financings,
                })
            }
            Some(TransactionType::DividendAdjustment) => {
                Transaction::DividendAdjustment(DividendAdjustmentTransaction {
                    base: raw.base,
                    instrument: raw.instrument,
                    dividend_adjustment: raw.dividend_adjustment,
                    quote_dividend_adjustment: raw.quote_dividend_adjustment,
                    home_conversion_factors: raw.home_conversion_factors,
                    account_balance: raw.account_balance,
                    open_trade_dividend_adjustments: raw.open_trade_dividend_adjustments,
                })
            }
            Some(TransactionType::ResetResettablePl) => {
                Transaction::ResetResettablePl(ResetResettablePLTransaction { base: raw.base })
            }
            None => {
                tracing::debug!(
                    transaction_type = %raw.transaction_type,
                    "Unrecognized transaction type, keeping raw record"
                );
                Transaction::Unknown(Box::new(raw))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::{LimitOrderReason, OrderFillReason, TransactionRejectReason};
    use crate::shared::{AccountUnits, DecimalNumber, OrderId, Reason};

    fn resolve(json: &str) -> Transaction {
        Transaction::from(serde_json::from_str::<RawTransaction>(json).unwrap())
    }

    #[test]
    fn test_order_fill() {
        match resolve(r#"{"type":"ORDER_FILL","orderID":"55","units":"-50","pl":"12.34"}"#) {
            Transaction::OrderFill(t) => {
                assert_eq!(t.order_id, Some(OrderId::from("55")));
                assert_eq!(t.units, Some(DecimalNumber::from("-50")));
                assert_eq!(t.pl, Some(AccountUnits::from("12.34")));
                assert_eq!(t.reason, None);
            }
            other => panic!("Expected order fill, got {:?}", other),
        }
    }

    #[test]
    fn test_reason_typed_per_variant() {
        match resolve(r#"{"type":"LIMIT_ORDER","reason":"REPLACEMENT","replacesOrderID":"8"}"#) {
            Transaction::LimitOrder(t) => {
                assert_eq!(t.reason, Some(Reason::Known(LimitOrderReason::Replacement)));
                assert_eq!(t.replaces_order_id, Some(OrderId::from("8")));
            }
            other => panic!("Expected limit order, got {:?}", other),
        }

        match resolve(r#"{"type":"ORDER_FILL","reason":"MARKET_ORDER_TRADE_CLOSE"}"#) {
            Transaction::OrderFill(t) => {
                assert_eq!(t.reason, Some(Reason::Known(OrderFillReason::MarketOrderTradeClose)));
            }
            other => panic!("Expected order fill, got {:?}", other),
        }
    }

    #[test]
    fn test_reason_from_other_variant_kept() {
        // ON_FILL is a stop loss reason, not a limit order one
        match resolve(r#"{"type":"LIMIT_ORDER","reason":"ON_FILL","units":"10"}"#) {
            Transaction::LimitOrder(t) => {
                assert_eq!(t.reason, Some(Reason::Other("ON_FILL".to_string())));
                assert_eq!(t.units, Some(DecimalNumber::from("10")));
            }
            other => panic!("Expected limit order, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_reason_survives_reencode() {
        let input = r#"{"type":"MARKET_ORDER","id":"1","reason":"FUTURE_REASON"}"#;
        let txn = resolve(input);
        match &txn {
            Transaction::MarketOrder(t) => {
                assert_eq!(t.reason, Some(Reason::Other("FUTURE_REASON".to_string())));
            }
            other => panic!("Expected market order, got {:?}", other),
        }
        assert_eq!(serde_json::to_string(&txn).unwrap(), input);

        let funding = resolve(r#"{"type":"TRANSFER_FUNDS","fundingReason":"NEW_FUNDING_KIND"}"#);
        let json = serde_json::to_value(&funding).unwrap();
        assert_eq!(json["fundingReason"], "NEW_FUNDING_KIND");
    }

    #[test]
    fn test_open_reasons_kept_verbatim() {
        match resolve(r#"{"type":"ORDER_CANCEL","orderID":"3","reason":"MARKET_HALTED"}"#) {
            Transaction::OrderCancel(t) => {
                assert_eq!(t.reason.as_ref().map(|r| r.as_str()), Some("MARKET_HALTED"));
            }
            other => panic!("Expected order cancel, got {:?}", other),
        }

        match resolve(
            r#"{"type":"MARKET_ORDER_REJECT","instrument":"EUR_USD","rejectReason":"INSUFFICIENT_MARGIN"}"#,
        ) {
            Transaction::MarketOrderReject(t) => {
                assert_eq!(
                    t.reject_reason,
                    Some(TransactionRejectReason::from("INSUFFICIENT_MARGIN"))
                );
            }
            other => panic!("Expected market order reject, got {:?}", other),
        }
    }

    #[test]
    fn test_daily_financing_nested() {
        let txn = resolve(
            r#"{
                "type": "DAILY_FINANCING",
                "financing": "-0.5",
                "accountFinancingMode": "DAILY",
                "positionFinancings": [{
                    "instrument": "EUR_USD",
                    "financing": "-0.5",
                    "openTradeFinancings": [{"tradeID": "21", "financing": "-0.5"}]
                }]
            }"#,
        );
        match txn {
            Transaction::DailyFinancing(t) => {
                let positions = t.position_financings.unwrap();
                assert_eq!(positions.len(), 1);
                assert_eq!(positions[0].open_trade_financings[0].trade_id, "21");
            }
            other => panic!("Expected daily financing, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_keeps_raw() {
        let raw: RawTransaction =
            serde_json::from_str(r#"{"type":"UNKNOWN_FUTURE_TYPE","foo":"bar","amount":"5"}"#)
                .unwrap();
        let txn = Transaction::from(raw.clone());
        assert!(txn.is_unknown());
        assert_eq!(txn.as_raw(), Some(&raw));
        assert_eq!(txn.type_name(), "UNKNOWN_FUTURE_TYPE");
    }

    #[test]
    fn test_every_type_resolves() {
        for t in TransactionType::ALL {
            let txn = resolve(&format!(r#"{{"type":"{}","id":"1"}}"#, t.as_str()));
            assert_eq!(txn.transaction_type(), Some(t));
            assert_eq!(txn.id().as_str(), "1");
        }
    }

    /// Every field of the superset record, each with a distinct value.
    fn every_field() -> serde_json::Value {
        serde_json::json!({
            "id": "6410",
            "time": "2016-06-22T18:41:29.285982286Z",
            "userID": 5838423,
            "accountID": "001-011-5838423-001",
            "batchID": "6409",
            "requestID": "24919948889",
            "divisionID": 4,
            "siteID": 101,
            "accountUserID": 5838424,
            "accountNumber": 7,
            "homeCurrency": "USD",
            "alias": "Primary",
            "marginRate": "0.05",
            "rejectReason": "INSUFFICIENT_MARGIN",
            "amount": "2500.00",
            "fundingReason": "CLIENT_FUNDING",
            "comment": "initial deposit",
            "accountBalance": "10240.55",
            "instrument": "EUR_USD",
            "units": "-1500",
            "timeInForce": "GTD",
            "priceBound": "1.15100",
            "positionFill": "REDUCE_FIRST",
            "tradeClose": {"tradeID": "71", "clientTradeID": "close-71", "units": "ALL"},
            "longPositionCloseout": {"instrument": "EUR_USD", "units": "ALL"},
            "shortPositionCloseout": {"instrument": "USD_JPY", "units": "NONE"},
            "marginCloseout": {"reason": "MARGIN_CHECK_VIOLATION"},
            "delayedTradeClose": {"tradeID": "72", "clientTradeID": "delayed-72", "sourceTransactionID": "6390"},
            "reason": "CLIENT_ORDER",
            "clientExtensions": {"id": "my-order", "tag": "strategy-9", "comment": "entry"},
            "takeProfitOnFill": {"price": "1.16000", "timeInForce": "GTC"},
            "stopLossOnFill": {"distance": "0.0050", "timeInForce": "GTC"},
            "guaranteedStopLossOnFill": {"price": "1.14000"},
            "trailingStopLossOnFill": {"distance": "0.0075"},
            "tradeClientExtensions": {"tag": "opened-by-101"},
            "price": "1.15050",
            "tradeState": "OPEN",
            "gtdTime": "2016-06-29T18:41:29.000000000Z",
            "triggerCondition": "MID",
            "replacesOrderID": "99",
            "cancellingTransactionID": "6398",
            "intendedReplacesOrderID": "98",
            "tradeID": "77",
            "clientTradeID": "my-trade-77",
            "orderFillTransactionID": "6405",
            "distance": "0.0025",
            "guaranteed": false,
            "guaranteedExecutionPremium": "0.35",
            "orderID": "101",
            "clientOrderID": "client-101",
            "requestedUnits": "-1600",
            "fullVWAP": "1.15047",
            "fullPrice": {
                "instrument": "EUR_USD",
                "time": "2016-06-22T18:41:29.100000000Z",
                "bids": [{"price": "1.15040", "liquidity": 1000000}],
                "asks": [{"price": "1.15060", "liquidity": 500000}],
                "closeoutBid": "1.15030",
                "closeoutAsk": "1.15070"
            },
            "pl": "12.34",
            "quotePL": "13.50",
            "financing": "-0.42",
            "baseFinancing": "-0.38",
            "quoteFinancing": "-0.46",
            "commission": "0.10",
            "guaranteedExecutionFee": "0.05",
            "quoteGuaranteedExecutionFee": "0.06",
            "tradeOpened": {"tradeID": "78", "units": "-1000", "price": "1.15047", "halfSpreadCost": "0.08"},
            "tradesClosed": [{"tradeID": "71", "units": "500", "realizedPL": "3.20", "financing": "-0.10"}],
            "tradeReduced": {"tradeID": "72", "units": "250", "realizedPL": "1.10"},
            "halfSpreadCost": "0.12",
            "replacedByOrderID": "104",
            "clientExtensionsModify": {"comment": "edited"},
            "tradeClientExtensionsModify": {"tag": "edited-tag"},
            "extensionNumber": 3,
            "tradeIDs": "71",
            "accountFinancingMode": "DAILY",
            "positionFinancings": [{
                "instrument": "EUR_USD",
                "financing": "-0.42",
                "openTradeFinancings": [{"tradeID": "78", "financing": "-0.42"}]
            }],
            "dividendAdjustment": "1.25",
            "quoteDividendAdjustment": "1.40",
            "homeConversionFactors": {"gainQuoteHome": {"factor": "0.91"}, "lossQuoteHome": {"factor": "0.92"}},
            "openTradeDividendAdjustments": [{"tradeID": "78", "dividendAdjustment": "1.25"}]
        })
    }

    #[test]
    fn test_resolution_copies_every_field_of_each_type() {
        for t in TransactionType::ALL {
            let mut input = every_field();
            input["type"] = serde_json::Value::from(t.as_str());

            let raw: RawTransaction = serde_json::from_value(input.clone()).unwrap();
            let resolved = Transaction::from(raw);
            let direct = Transaction::decode_as(t, input.clone()).unwrap();
            assert_eq!(resolved, direct, "{}", t.as_str());

            let output = serde_json::to_value(&resolved).unwrap();
            let fields = output.as_object().unwrap();
            assert!(fields.len() > 1, "{}", t.as_str());
            for (key, value) in fields {
                assert_eq!(Some(value), input.get(key), "{} field {}", t.as_str(), key);
            }

            let back: Transaction = serde_json::from_value(output).unwrap();
            assert_eq!(back, resolved, "{}", t.as_str());
        }
    }
}
