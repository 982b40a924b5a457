//! Decoding of polymorphic Order and Transaction payloads.
//!
//! Plain `serde_json::from_str::<Order>` never fails on an unrecognized `type`;
//! the record comes back as `Order::Unknown`. A [`Decoder`] applies a
//! [`DecodeConfig`] on top so strict callers can turn that into an error.

use crate::domain::order::{Order, RawOrder};
use crate::domain::transaction::{RawTransaction, Transaction};
use crate::error::{ModelError, ModelResult};

/// What to do with a discriminator outside the known enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
    /// Keep the superset record as the `Unknown` variant.
    #[default]
    Preserve,
    /// Fail with [`ModelError::UnknownType`].
    Reject,
}

/// Configuration for [`Decoder`].
#[derive(Debug, Clone, Default)]
pub struct DecodeConfig {
    pub unknown_types: UnknownTypePolicy,
}

impl DecodeConfig {
    /// Reject unrecognized discriminators.
    pub fn strict() -> Self {
        Self {
            unknown_types: UnknownTypePolicy::Reject,
        }
    }

    pub fn with_unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }
}

/// Decodes JSON payloads into resolved Orders and Transactions.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecodeConfig,
}

impl Decoder {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    pub fn strict() -> Self {
        Self::new(DecodeConfig::strict())
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    // ─── Orders ──────────────────────────────────────────────────────────

    pub fn resolve_order(&self, raw: RawOrder) -> ModelResult<Order> {
        self.check_order(Order::from(raw))
    }

    pub fn decode_order(&self, json: &str) -> ModelResult<Order> {
        let raw: RawOrder = serde_json::from_str(json)?;
        self.resolve_order(raw)
    }

    /// Decode a JSON array of Orders.
    pub fn decode_orders(&self, json: &str) -> ModelResult<Vec<Order>> {
        let raws: Vec<RawOrder> = serde_json::from_str(json)?;
        raws.into_iter().map(|raw| self.resolve_order(raw)).collect()
    }

    /// Apply the unknown-type policy to an already resolved Order,
    /// e.g. one taken from a response envelope.
    pub fn check_order(&self, order: Order) -> ModelResult<Order> {
        if let Some(raw) = order.as_raw() {
            self.unknown("order", &raw.order_type)?;
        }
        Ok(order)
    }

    // ─── Transactions ────────────────────────────────────────────────────

    pub fn resolve_transaction(&self, raw: RawTransaction) -> ModelResult<Transaction> {
        self.check_transaction(Transaction::from(raw))
    }

    pub fn decode_transaction(&self, json: &str) -> ModelResult<Transaction> {
        let raw: RawTransaction = serde_json::from_str(json)?;
        self.resolve_transaction(raw)
    }

    /// Decode a JSON array of Transactions.
    pub fn decode_transactions(&self, json: &str) -> ModelResult<Vec<Transaction>> {
        let raws: Vec<RawTransaction> = serde_json::from_str(json)?;
        raws.into_iter().map(|raw| self.resolve_transaction(raw)).collect()
    }

    pub fn check_transaction(&self, transaction: Transaction) -> ModelResult<Transaction> {
        if let Some(raw) = transaction.as_raw() {
            self.unknown("transaction", &raw.transaction_type)?;
        }
        Ok(transaction)
    }

    fn unknown(&self, family: &'static str, type_name: &str) -> ModelResult<()> {
        match self.config.unknown_types {
            UnknownTypePolicy::Preserve => Ok(()),
            UnknownTypePolicy::Reject => {
                tracing::warn!(family, type_name, "Rejecting unknown type");
                Err(ModelError::UnknownType {
                    family,
                    type_name: type_name.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderType;
    use crate::domain::transaction::TransactionType;

    const UNKNOWN: &str = r#"{"type":"UNKNOWN_FUTURE_TYPE","foo":"bar"}"#;

    #[test]
    fn test_default_preserves_unknown() {
        let decoder = Decoder::default();
        assert_eq!(decoder.config().unknown_types, UnknownTypePolicy::Preserve);
        assert!(decoder.decode_order(UNKNOWN).unwrap().is_unknown());
        assert!(decoder.decode_transaction(UNKNOWN).unwrap().is_unknown());
    }

    #[test]
    fn test_strict_rejects_unknown() {
        let decoder = Decoder::strict();
        match decoder.decode_order(UNKNOWN) {
            Err(ModelError::UnknownType { family, type_name }) => {
                assert_eq!(family, "order");
                assert_eq!(type_name, "UNKNOWN_FUTURE_TYPE");
            }
            other => panic!("Expected UnknownType, got {:?}", other),
        }
        assert!(matches!(
            decoder.decode_transaction(UNKNOWN),
            Err(ModelError::UnknownType { family: "transaction", .. })
        ));
    }

    #[test]
    fn test_strict_accepts_known() {
        let decoder =
            Decoder::new(DecodeConfig::default().with_unknown_types(UnknownTypePolicy::Reject));
        let order = decoder.decode_order(r#"{"type":"STOP","price":"1.3"}"#).unwrap();
        assert_eq!(order.order_type(), Some(OrderType::Stop));
        let txn = decoder.decode_transaction(r#"{"type":"REOPEN"}"#).unwrap();
        assert_eq!(txn.transaction_type(), Some(TransactionType::Reopen));
    }

    #[test]
    fn test_decode_arrays() {
        let orders = Decoder::default()
            .decode_orders(r#"[{"type":"MARKET"},{"type":"LIMIT"},{"type":"SOMETHING_NEW"}]"#)
            .unwrap();
        assert_eq!(orders.len(), 3);
        assert!(orders[2].is_unknown());

        let err = Decoder::strict()
            .decode_transactions(r#"[{"type":"CLOSE"},{"type":"SOMETHING_NEW"}]"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownType { .. }));
    }

    #[test]
    fn test_malformed_json_is_serde_error() {
        let err = Decoder::default().decode_order("{not json").unwrap_err();
        assert!(matches!(err, ModelError::Serde(_)));

        let err = Decoder::default()
            .decode_order(r#"{"type":"MARKET","units":100}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::Serde(_)));
    }
}
