//! Search-predicate DSL.
//!
//! A search request owns a [`SearchQuery`]. Each searchable field is exposed
//! as a method that hands the request to a typed node (text, range,
//! multi-value, ...); the node's predicate method records one clause and
//! hands the request back, so predicates chain:
//!
//! ```
//! use gateway_requests::search::{SearchRequest, TransactionSearchRequest};
//! use gateway_requests::{Amount, TransactionStatus};
//!
//! let search = TransactionSearchRequest::new()
//!     .customer_email().ends_with("@example.com")
//!     .amount().between(Amount::from_cents(1000), Amount::from_cents(5000))
//!     .status().included_in([TransactionStatus::Settled, TransactionStatus::Settling]);
//!
//! assert_eq!(
//!     search.to_xml(),
//!     "<search>\
//!      <customer_email><ends_with>@example.com</ends_with></customer_email>\
//!      <amount><min>10.00</min><max>50.00</max></amount>\
//!      <status type=\"array\"><item>settled</item><item>settling</item></status>\
//!      </search>"
//! );
//! ```
//!
//! Searches only have an XML form.

mod nodes;
mod requests;

pub use nodes::{
    DateRangeNode, EqualityNode, KeyValueNode, MultipleValueNode, MultipleValueOrTextNode,
    PartialMatchNode, RangeNode, TextNode,
};
pub use requests::{
    CreditCardVerificationSearchRequest, CustomerSearchRequest, IdsSearchRequest,
    SubscriptionSearchRequest, TransactionSearchRequest,
};

use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Comparison applied by a single-clause criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Is,
    IsNot,
    StartsWith,
    EndsWith,
    Contains,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Is => "is",
            Operator::IsNot => "is_not",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::Contains => "contains",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Min,
    Max,
}

impl RangeBound {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeBound::Min => "min",
            RangeBound::Max => "max",
        }
    }
}

/// Bound value of a range criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchValue {
    Text(String),
    DateTime(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq)]
enum Criterion {
    Operator(Operator, String),
    Value(String),
}

/// The clauses collected by a search request.
///
/// Single-clause and multi-value criteria are keyed by node name: setting a
/// node again replaces its clause. Range bounds accumulate per node, with a
/// repeated bound replacing the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    criteria: Vec<(String, Criterion)>,
    range_criteria: Vec<(String, Vec<(RangeBound, SearchValue)>)>,
    multi_value_criteria: Vec<(String, Vec<String>)>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
            && self.range_criteria.is_empty()
            && self.multi_value_criteria.is_empty()
    }

    /// Records `<name><operator>value</operator></name>`.
    pub fn add_criterion(&mut self, name: &str, operator: Operator, value: impl Into<String>) {
        self.set_criterion(name, Criterion::Operator(operator, value.into()));
    }

    /// Records `<name>value</name>`.
    pub fn add_value_criterion(&mut self, name: &str, value: impl Into<String>) {
        self.set_criterion(name, Criterion::Value(value.into()));
    }

    pub fn add_range_criterion(&mut self, name: &str, bound: RangeBound, value: SearchValue) {
        let index = match self.range_criteria.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.range_criteria.push((name.to_string(), Vec::new()));
                self.range_criteria.len() - 1
            }
        };
        let bounds = &mut self.range_criteria[index].1;
        match bounds.iter_mut().find(|(b, _)| *b == bound) {
            Some(existing) => existing.1 = value,
            None => bounds.push((bound, value)),
        }
    }

    pub fn add_multiple_value_criterion(&mut self, name: &str, items: Vec<String>) {
        match self.multi_value_criteria.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = items,
            None => self.multi_value_criteria.push((name.to_string(), items)),
        }
    }

    fn set_criterion(&mut self, name: &str, criterion: Criterion) {
        match self.criteria.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = criterion,
            None => self.criteria.push((name.to_string(), criterion)),
        }
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<search>");

        for (name, criterion) in &self.criteria {
            match criterion {
                Criterion::Operator(operator, value) => {
                    let _ = write!(
                        xml,
                        "<{0}><{1}>{2}</{1}></{0}>",
                        name,
                        operator.as_str(),
                        escape(value.as_str())
                    );
                }
                Criterion::Value(value) => {
                    let _ = write!(xml, "<{0}>{1}</{0}>", name, escape(value.as_str()));
                }
            }
        }

        for (name, bounds) in &self.range_criteria {
            let _ = write!(xml, "<{}>", name);
            for (bound, value) in bounds {
                match value {
                    SearchValue::Text(text) => {
                        let _ = write!(xml, "<{0}>{1}</{0}>", bound.as_str(), escape(text.as_str()));
                    }
                    SearchValue::DateTime(at) => {
                        let _ = write!(
                            xml,
                            "<{0} type=\"datetime\">{1}</{0}>",
                            bound.as_str(),
                            at.format("%Y-%m-%dT%H:%M:%SZ")
                        );
                    }
                }
            }
            let _ = write!(xml, "</{}>", name);
        }

        for (name, items) in &self.multi_value_criteria {
            let _ = write!(xml, "<{} type=\"array\">", name);
            for item in items {
                let _ = write!(xml, "<item>{}</item>", escape(item.as_str()));
            }
            let _ = write!(xml, "</{}>", name);
        }

        xml.push_str("</search>");
        xml
    }
}

/// A request that carries a [`SearchQuery`].
pub trait SearchRequest: Sized {
    fn query(&self) -> &SearchQuery;

    fn query_mut(&mut self) -> &mut SearchQuery;

    fn to_xml(&self) -> String {
        self.query().to_xml()
    }
}
