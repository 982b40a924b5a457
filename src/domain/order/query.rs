//! Query parameters for GET /v3/accounts/{accountID}/orders.

use super::OrderStateFilter;
use crate::error::{ModelError, ModelResult};
use crate::shared::{serde_util, InstrumentName, OrderId};
use serde::Serialize;

/// Largest `count` the Order list endpoint accepts.
pub const MAX_ORDERS_COUNT: u32 = 500;

/// Filters for the Order list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrdersParams {
    /// Only these Orders
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serde_util::comma_separated::serialize"
    )]
    pub ids: Option<Vec<OrderId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderStateFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Max results (1-500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Only Orders with an ID less than this one
    #[serde(rename = "beforeID", skip_serializing_if = "Option::is_none")]
    pub before_id: Option<OrderId>,
}

impl OrdersParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = impl Into<OrderId>>) -> Self {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_state(mut self, state: OrderStateFilter) -> Self {
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

    pub fn with_before_id(mut self, id: impl Into<OrderId>) -> Self {
        self.before_id = Some(id.into());
        self
    }

    /// Encode as a query string (without the leading `?`).
    pub fn to_query_string(&self) -> ModelResult<String> {
        if let Some(count) = self.count {
            if !(1..=MAX_ORDERS_COUNT).contains(&count) {
                return Err(ModelError::InvalidParameter(format!(
                    "count must be between 1 and {}, got {}",
                    MAX_ORDERS_COUNT, count
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
    fn test_empty_params() {
        assert_eq!(OrdersParams::new().to_query_string().unwrap(), "");
    }

    #[test]
    fn test_full_params() {
        let query = OrdersParams::new()
            .with_ids(["12", "15"])
            .with_state(OrderStateFilter::Pending)
            .with_instrument("EUR_USD")
            .with_count(50)
            .with_before_id("100")
            .to_query_string()
            .unwrap();
        assert_eq!(
            query,
            "ids=12%2C15&state=PENDING&instrument=EUR_USD&count=50&beforeID=100"
        );
    }

    #[test]
    fn test_count_out_of_range() {
        let err = OrdersParams::new().with_count(0).to_query_string().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter(_)));
        assert!(OrdersParams::new().with_count(501).to_query_string().is_err());
    }
}
