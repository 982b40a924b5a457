//! # fxtrade-model
//!
//! Typed data model for a forex/CFD trading REST API (v20 wire format).
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared** — Transparent string newtypes for IDs, decimals and timestamps
//! 2. **Domain** — Accounts, orders, trades, positions and transactions as vertical slices
//! 3. **Decode** — Polymorphic Order/Transaction decoding with an unknown-type policy
//!
//! Orders and Transactions arrive as one flat JSON object whose `type` field picks
//! the concrete variant. Each family decodes into a superset record first
//! ([`domain::order::RawOrder`], [`domain::transaction::RawTransaction`]) which is
//! then resolved into the matching variant. Unrecognized types are kept as
//! `Unknown` so nothing the server sends is lost.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fxtrade_model::prelude::*;
//!
//! let order: Order = serde_json::from_str(r#"{"type":"LIMIT","id":"1","price":"1.1"}"#)?;
//! assert_eq!(order.order_type(), Some(OrderType::Limit));
//!
//! let strict = Decoder::strict();
//! let txn = strict.decode_transaction(r#"{"type":"ORDER_FILL","id":"6410"}"#)?;
//!
//! let body = CreateOrderBody::new(MarketOrderRequest::new("EUR_USD", "100"));
//! let json = serde_json::to_string(&body)?;
//! ```

#![recursion_limit = "256"]

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Model error types.
pub mod error;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, queries.
pub mod domain;

// ── Layer 3: Decode ──────────────────────────────────────────────────────────

/// Decoder with a configurable unknown-type policy.
pub mod decode;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        AccountId, AccountUnits, ClientId, Currency, DateTime, DecimalNumber, InstrumentName,
        OrderId, OrderSpecifier, PriceValue, Reason, TradeId, TradeSpecifier, TransactionId,
    };

    // Domain types — account
    pub use crate::domain::account::{
        Account, AccountChanges, AccountChangesParams, AccountChangesState, AccountProperties,
        AccountSummary,
    };

    // Domain types — order
    pub use crate::domain::order::{
        ClientExtensions, CreateOrderBody, LimitOrderRequest, MarketOrderRequest, Order,
        OrderRequest, OrderState, OrderType, OrdersParams, RawOrder, StopLossDetails,
        TakeProfitDetails, TimeInForce,
    };

    // Domain types — trade, position
    pub use crate::domain::position::{Position, PositionSide};
    pub use crate::domain::trade::{Trade, TradeState, TradeSummary, TradesParams};

    // Domain types — transaction
    pub use crate::domain::transaction::{
        RawTransaction, Transaction, TransactionFilter, TransactionType, TransactionVariant,
        TransactionsParams,
    };

    // Decoding
    pub use crate::decode::{DecodeConfig, Decoder, UnknownTypePolicy};

    // Errors
    pub use crate::error::{ErrorResponse, ModelError, ModelResult};
}
