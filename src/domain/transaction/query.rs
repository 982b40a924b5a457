//! Query parameters for the Transaction list endpoints.

use super::TransactionFilter;
use crate::error::{ModelError, ModelResult};
use crate::shared::{serde_util, DateTime, TransactionId};
use serde::Serialize;

/// Largest page size the Transaction pages endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Params for GET /v3/accounts/{accountID}/transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsParams {
    /// Start of the time range (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime>,
    /// End of the time range (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime>,
    /// Transactions per page (1-1000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(
        rename = "type",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serde_util::comma_separated::serialize"
    )]
    pub filter: Option<Vec<TransactionFilter>>,
}

impl TransactionsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_range(mut self, from: impl Into<DateTime>, to: impl Into<DateTime>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_filter(
        mut self,
        filter: impl IntoIterator<Item = impl Into<TransactionFilter>>,
    ) -> Self {
        self.filter = Some(filter.into_iter().map(Into::into).collect());
        self
    }

    /// Encode as a query string (without the leading `?`).
    pub fn to_query_string(&self) -> ModelResult<String> {
        if let Some(page_size) = self.page_size {
            if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
                return Err(ModelError::InvalidParameter(format!(
                    "page size must be between 1 and {}, got {}",
                    MAX_PAGE_SIZE, page_size
                )));
            }
        }
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Params for GET /v3/accounts/{accountID}/transactions/idrange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionIdRangeParams {
    /// First Transaction ID (inclusive)
    pub from: TransactionId,
    /// Last Transaction ID (inclusive)
    pub to: TransactionId,
    #[serde(
        rename = "type",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serde_util::comma_separated::serialize"
    )]
    pub filter: Option<Vec<TransactionFilter>>,
}

impl TransactionIdRangeParams {
    pub fn new(from: impl Into<TransactionId>, to: impl Into<TransactionId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            filter: None,
        }
    }

    pub fn with_filter(
        mut self,
        filter: impl IntoIterator<Item = impl Into<TransactionFilter>>,
    ) -> Self {
        self.filter = Some(filter.into_iter().map(Into::into).collect());
        self
    }

    pub fn to_query_string(&self) -> ModelResult<String> {
        if self.from.is_empty() || self.to.is_empty() {
            return Err(ModelError::InvalidParameter(
                "transaction ID range needs both ends".to_string(),
            ));
        }
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Params for GET /v3/accounts/{accountID}/transactions/sinceid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionsSinceParams {
    /// Only Transactions after this ID
    pub id: TransactionId,
    #[serde(
        rename = "type",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serde_util::comma_separated::serialize"
    )]
    pub filter: Option<Vec<TransactionFilter>>,
}

impl TransactionsSinceParams {
    pub fn new(id: impl Into<TransactionId>) -> Self {
        Self {
            id: id.into(),
            filter: None,
        }
    }

    pub fn with_filter(
        mut self,
        filter: impl IntoIterator<Item = impl Into<TransactionFilter>>,
    ) -> Self {
        self.filter = Some(filter.into_iter().map(Into::into).collect());
        self
    }

    pub fn to_query_string(&self) -> ModelResult<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionType;

    #[test]
    fn test_pages_params() {
        let query = TransactionsParams::new()
            .with_time_range("2016-06-01T00:00:00Z", "2016-06-02T00:00:00Z")
            .with_page_size(100)
            .with_filter([TransactionFilter::Order, TransactionFilter::Funding])
            .to_query_string()
            .unwrap();
        assert_eq!(
            query,
            "from=2016-06-01T00%3A00%3A00Z&to=2016-06-02T00%3A00%3A00Z&pageSize=100&type=ORDER%2CFUNDING"
        );
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(TransactionsParams::new().with_page_size(1000).to_query_string().is_ok());
        for bad in [0, 1001] {
            let err = TransactionsParams::new()
                .with_page_size(bad)
                .to_query_string()
                .unwrap_err();
            assert!(matches!(err, ModelError::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_id_range_params() {
        let query = TransactionIdRangeParams::new("100", "200")
            .with_filter([TransactionType::OrderFill, TransactionType::DailyFinancing])
            .to_query_string()
            .unwrap();
        assert_eq!(query, "from=100&to=200&type=ORDER_FILL%2CDAILY_FINANCING");

        assert!(TransactionIdRangeParams::new("", "200").to_query_string().is_err());
    }

    #[test]
    fn test_since_params() {
        let query = TransactionsSinceParams::new("6409").to_query_string().unwrap();
        assert_eq!(query, "id=6409");
    }
}
