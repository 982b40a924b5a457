//! Query parameters for GET /v3/accounts/{accountID}/trades.

use super::TradeStateFilter;
use crate::error::{ModelError, ModelResult};
use crate::shared::{serde_util, InstrumentName, TradeId};
use serde::Serialize;

/// Largest `count` the Trade list endpoint accepts.
pub const MAX_TRADES_COUNT: u32 = 500;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradesParams {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serde_util::comma_separated::serialize"
    )]
    pub ids: Option<Vec<TradeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TradeStateFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Max results (1-500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(rename = "beforeID", skip_serializing_if = "Option::is_none")]
    pub before_id: Option<TradeId>,
}

impl TradesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = impl Into<TradeId>>) -> Self {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_state(mut self, state: TradeStateFilter) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_instrument(mut self, instrument: impl Into<InstrumentName>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_before_id(mut self, id: impl Into<TradeId>) -> Self {
        self.before_id = Some(id.into());
        self
    }

    pub fn to_query_string(&self) -> ModelResult<String> {
        if let Some(count) = self.count {
            if !(1..=MAX_TRADES_COUNT).contains(&count) {
                return Err(ModelError::InvalidParameter(format!(
                    "count must be between 1 and {}, got {}",
                    MAX_TRADES_COUNT, count
                )));
            }
        }
        Ok(serde_urlencoded::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trades_params() {
        let query = TradesParams::new()
            .with_state(TradeStateFilter::CloseWhenTradeable)
            .with_instrument("USD_CAD")
            .to_query_string()
            .unwrap();
        assert_eq!(query, "state=CLOSE_WHEN_TRADEABLE&instrument=USD_CAD");
    }

    #[test]
    fn test_trade_ids() {
        let query = TradesParams::new().with_ids(["1", "2", "3"]).to_query_string().unwrap();
        assert_eq!(query, "ids=1%2C2%2C3");
        assert!(TradesParams::new().with_count(1000).to_query_string().is_err());
    }
}
