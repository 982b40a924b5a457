//! Position domain: per-instrument long/short exposure.

pub mod wire;

pub use wire::{PositionCloseBody, PositionCloseResponse, PositionResponse, PositionsResponse};

use crate::error::ModelResult;
use crate::shared::{AccountUnits, DecimalNumber, InstrumentName, PriceValue, TradeId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One side (long or short) of a Position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSide {
    /// Negative on the short side
    #[serde(default)]
    pub units: DecimalNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_price: Option<PriceValue>,
    #[serde(rename = "tradeIDs", default, skip_serializing_if = "Vec::is_empty")]
    pub trade_ids: Vec<TradeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "unrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "resettablePL", default, skip_serializing_if = "Option::is_none")]
    pub resettable_pl: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_adjustment: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fees: Option<AccountUnits>,
}

impl PositionSide {
    pub fn is_flat(&self) -> bool {
        self.units.is_empty() || self.units.to_decimal().is_ok_and(|u| u.is_zero())
    }
}

/// An instrument's Position in an Account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub instrument: InstrumentName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "unrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
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
    #[serde(default)]
    pub long: PositionSide,
    #[serde(default)]
    pub short: PositionSide,
}

impl Position {
    /// Long units plus (negative) short units.
    pub fn net_units(&self) -> ModelResult<Decimal> {
        Ok(side_units(&self.long)? + side_units(&self.short)?)
    }
}

fn side_units(side: &PositionSide) -> ModelResult<Decimal> {
    if side.units.is_empty() {
        return Ok(Decimal::ZERO);
    }
    side.units.to_decimal()
}

/// Price-dependent state of a Position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedPositionState {
    pub instrument: InstrumentName,
    #[serde(rename = "netUnrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub net_unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "longUnrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub long_unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "shortUnrealizedPL", default, skip_serializing_if = "Option::is_none")]
    pub short_unrealized_pl: Option<AccountUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_units() {
        let position: Position = serde_json::from_str(
            r#"{
                "instrument": "EUR_USD",
                "long": {"units": "1500", "averagePrice": "1.1000", "tradeIDs": ["1", "2"]},
                "short": {"units": "-500", "tradeIDs": ["3"]}
            }"#,
        )
        .unwrap();
        assert_eq!(position.net_units().unwrap(), Decimal::new(1000, 0));
        assert_eq!(position.long.trade_ids.len(), 2);
        assert!(!position.short.is_flat());
    }

    #[test]
    fn test_missing_side_is_flat() {
        let position: Position = serde_json::from_str(r#"{"instrument":"USD_JPY"}"#).unwrap();
        assert!(position.long.is_flat());
        assert_eq!(position.net_units().unwrap(), Decimal::ZERO);
    }
}
