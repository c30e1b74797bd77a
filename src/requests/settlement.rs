//! Settlement batch summary request.

use crate::request_builder::{Request, RequestBuilder};
use chrono::NaiveDate;

/// Asks for the totals of one day's settlement batch.
///
/// The date is sent as plain `YYYY-MM-DD` text, not as a typed date element.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementBatchSummaryRequest {
    settlement_date: NaiveDate,
    group_by_custom_field: Option<String>,
}

impl SettlementBatchSummaryRequest {
    pub fn new(settlement_date: NaiveDate) -> Self {
        SettlementBatchSummaryRequest {
            settlement_date,
            group_by_custom_field: None,
        }
    }

    pub fn settlement_date(mut self, settlement_date: NaiveDate) -> Self {
        self.settlement_date = settlement_date;
        self
    }

    /// Splits the totals by the value of a merchant-defined field.
    pub fn group_by_custom_field(mut self, field: impl Into<String>) -> Self {
        self.group_by_custom_field = Some(field.into());
        self
    }
}

impl Request for SettlementBatchSummaryRequest {
    const ROOT: &'static str = "settlement_batch_summary";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element(
                "settlement_date",
                self.settlement_date.format("%Y-%m-%d").to_string(),
            )
            .add_element_if(
                self.group_by_custom_field.is_some(),
                "group_by_custom_field",
                self.group_by_custom_field.as_deref(),
            )
    }
}
