//! Account domain: account snapshots, summaries, and incremental changes.

pub mod query;
pub mod wire;

pub use query::AccountChangesParams;
pub use wire::{
    AccountChangesResponse, AccountConfigureBody, AccountConfigureResponse, AccountResponse,
    AccountSummaryResponse, AccountsResponse,
};

use crate::domain::order::{DynamicOrderState, Order, OrderState};
use crate::domain::position::{CalculatedPositionState, Position};
use crate::domain::trade::{CalculatedTradeState, TradeSummary};
use crate::domain::transaction::Transaction;
use crate::shared::{AccountId, AccountUnits, Currency, DateTime, DecimalNumber, TransactionId};
use serde::{Deserialize, Serialize};

// ─── Enumerations ────────────────────────────────────────────────────────────

/// Whether guaranteed Stop Loss Orders may or must be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuaranteedStopLossOrderMode {
    Disabled,
    Allowed,
    Required,
}

/// How financing is charged to the Account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountFinancingMode {
    NoFinancing,
    SecondBySecond,
    Daily,
    DailyInstrument,
}

/// How long and short Positions are combined for margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionAggregationMode {
    AbsoluteSum,
    MaximalSide,
    NetSum,
}

// ─── Account ─────────────────────────────────────────────────────────────────

/// A tag attached to an Account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTag {
    #[serde(rename = "type", default)]
    pub tag_type: String,
    #[serde(default)]
    pub name: String,
}

/// Entry in the Account list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountProperties {
    pub id: AccountId,
    #[serde(rename = "mt4AccountID", default, skip_serializing_if = "Option::is_none")]
    pub mt4_account_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<AccountTag>,
}

/// Account state without its Trades, Positions and Orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Home currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(rename = "createdByUserID", default, skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_order_mode: Option<GuaranteedStopLossOrderMode>,
    #[serde(rename = "resettablePL", default, skip_serializing_if = "Option::is_none")]
    pub resettable_pl: Option<AccountUnits>,
    #[serde(rename = "resettablePLTime", default, skip_serializing_if = "Option::is_none")]
    pub resettable_pl_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_adjustment: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fees: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_call_enter_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_call_extension_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_margin_call_extension_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_trade_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_position_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_order_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hedging_enabled: Option<bool>,
    #[serde(rename = "unrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    /// Net asset value
    #[serde(rename = "NAV", default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_available: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_value: Option<AccountUnits>,
    #[serde(
        rename = "marginCloseoutUnrealizedPL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub margin_closeout_unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "marginCloseoutNAV", default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout_nav: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout_margin_used: Option<AccountUnits>,
    /// Fraction of NAV at which a margin closeout happens; 1.0 closes out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout_percent: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout_position_value: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_limit: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_call_margin_used: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_call_percent: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "lastTransactionID", default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionId>,
}

impl AccountSummary {
    pub fn is_in_margin_call(&self) -> bool {
        self.margin_call_enter_time.is_some()
    }
}

/// Full Account snapshot, including open Trades, Positions and pending Orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub summary: AccountSummary,
    #[serde(default)]
    pub trades: Vec<TradeSummary>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Account {
    pub fn id(&self) -> &AccountId {
        &self.summary.id
    }

    /// Orders still waiting to be filled or cancelled.
    pub fn pending_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(|o| o.state() == Some(OrderState::Pending))
    }
}

// ─── Changes ─────────────────────────────────────────────────────────────────

/// What happened to an Account since a given Transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountChanges {
    #[serde(default)]
    pub orders_created: Vec<Order>,
    #[serde(default)]
    pub orders_cancelled: Vec<Order>,
    #[serde(default)]
    pub orders_filled: Vec<Order>,
    #[serde(default)]
    pub orders_triggered: Vec<Order>,
    #[serde(default)]
    pub trades_opened: Vec<TradeSummary>,
    #[serde(default)]
    pub trades_reduced: Vec<TradeSummary>,
    #[serde(default)]
    pub trades_closed: Vec<TradeSummary>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.orders_created.is_empty()
            && self.orders_cancelled.is_empty()
            && self.orders_filled.is_empty()
            && self.orders_triggered.is_empty()
            && self.trades_opened.is_empty()
            && self.trades_reduced.is_empty()
            && self.trades_closed.is_empty()
            && self.positions.is_empty()
            && self.transactions.is_empty()
    }
}

/// Price-dependent Account state at the time of an Account changes poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountChangesState {
    #[serde(rename = "unrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "NAV", default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_available: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_value: Option<AccountUnits>,
    #[serde(
        rename = "marginCloseoutUnrealizedPL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub margin_closeout_unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "marginCloseoutNAV", default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout_nav: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout_margin_used: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout_percent: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_closeout_position_value: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_limit: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_call_margin_used: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_call_percent: Option<DecimalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "resettablePL", default, skip_serializing_if = "Option::is_none")]
    pub resettable_pl: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_adjustment: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fees: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_call_enter_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_call_extension_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_margin_call_extension_time: Option<DateTime>,
    #[serde(default)]
    pub orders: Vec<DynamicOrderState>,
    #[serde(default)]
    pub trades: Vec<CalculatedTradeState>,
    #[serde(default)]
    pub positions: Vec<CalculatedPositionState>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderType;

    #[test]
    fn test_account_with_orders() {
        let json = r#"{
            "id": "001-011-5838423-001",
            "currency": "USD",
            "NAV": "100000.0000",
            "unrealizedPL": "0.0000",
            "marginCloseoutPercent": "0.00000",
            "lastTransactionID": "6356",
            "trades": [],
            "positions": [],
            "orders": [
                {"type": "LIMIT", "id": "6357", "state": "PENDING", "instrument": "EUR_USD", "units": "10", "price": "1.1000"},
                {"type": "TAKE_PROFIT", "id": "6358", "state": "CANCELLED", "tradeID": "6300", "price": "1.2000"}
            ]
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id(), &AccountId::from("001-011-5838423-001"));
        assert_eq!(account.summary.nav, Some(AccountUnits::from("100000.0000")));
        assert_eq!(account.orders.len(), 2);
        assert_eq!(account.orders[1].order_type(), Some(OrderType::TakeProfit));

        let pending: Vec<_> = account.pending_orders().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id().as_str(), "6357");
        assert!(!account.summary.is_in_margin_call());
    }

    #[test]
    fn test_account_properties() {
        let props: AccountProperties = serde_json::from_str(
            r#"{"id":"101-004-1-001","mt4AccountID":7,"tags":[{"type":"BRAIN","name":"x"}]}"#,
        )
        .unwrap();
        assert_eq!(props.mt4_account_id, Some(7));
        assert_eq!(props.tags[0].tag_type, "BRAIN");
    }

    #[test]
    fn test_changes_empty() {
        let changes: AccountChanges = serde_json::from_str("{}").unwrap();
        assert!(changes.is_empty());

        let changes: AccountChanges = serde_json::from_str(
            r#"{"transactions":[{"type":"MARGIN_CALL_EXIT","id":"9"}]}"#,
        )
        .unwrap();
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_financing_mode_names() {
        let mode: AccountFinancingMode = serde_json::from_str("\"SECOND_BY_SECOND\"").unwrap();
        assert_eq!(mode, AccountFinancingMode::SecondBySecond);
    }
}
