//! Typed search nodes.
//!
//! A node owns the search request it was taken from. Every predicate method
//! records its clause on the request and returns the request.

use crate::search::{Operator, RangeBound, SearchRequest, SearchValue};
use chrono::{DateTime, Utc};
use std::fmt::Display;
use std::marker::PhantomData;

fn with_criterion<P: SearchRequest>(
    mut parent: P,
    name: &str,
    operator: Operator,
    value: String,
) -> P {
    parent.query_mut().add_criterion(name, operator, value);
    parent
}

fn with_range<P: SearchRequest>(
    mut parent: P,
    name: &str,
    bound: RangeBound,
    value: SearchValue,
) -> P {
    parent.query_mut().add_range_criterion(name, bound, value);
    parent
}

fn with_items<P, T, I, V>(mut parent: P, name: &str, items: I) -> P
where
    P: SearchRequest,
    T: Display,
    I: IntoIterator<Item = V>,
    V: Into<T>,
{
    let items = items.into_iter().map(|v| v.into().to_string()).collect();
    parent.query_mut().add_multiple_value_criterion(name, items);
    parent
}

/// Exact match or exclusion.
pub struct EqualityNode<P> {
    name: &'static str,
    parent: P,
}

impl<P: SearchRequest> EqualityNode<P> {
    pub fn new(name: &'static str, parent: P) -> Self {
        EqualityNode { name, parent }
    }

    pub fn is(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::Is, value.into())
    }

    pub fn is_not(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::IsNot, value.into())
    }
}

/// Equality plus prefix and suffix matching.
pub struct PartialMatchNode<P> {
    name: &'static str,
    parent: P,
}

impl<P: SearchRequest> PartialMatchNode<P> {
    pub fn new(name: &'static str, parent: P) -> Self {
        PartialMatchNode { name, parent }
    }

    pub fn is(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::Is, value.into())
    }

    pub fn is_not(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::IsNot, value.into())
    }

    pub fn starts_with(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::StartsWith, value.into())
    }

    pub fn ends_with(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::EndsWith, value.into())
    }
}

/// Free-text field: every partial match operator plus `contains`.
pub struct TextNode<P> {
    name: &'static str,
    parent: P,
}

impl<P: SearchRequest> TextNode<P> {
    pub fn new(name: &'static str, parent: P) -> Self {
        TextNode { name, parent }
    }

    pub fn is(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::Is, value.into())
    }

    pub fn is_not(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::IsNot, value.into())
    }

    pub fn starts_with(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::StartsWith, value.into())
    }

    pub fn ends_with(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::EndsWith, value.into())
    }

    pub fn contains(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::Contains, value.into())
    }
}

/// A flag-like field matched by bare value, e.g. `<refund>true</refund>`.
pub struct KeyValueNode<P> {
    name: &'static str,
    parent: P,
}

impl<P: SearchRequest> KeyValueNode<P> {
    pub fn new(name: &'static str, parent: P) -> Self {
        KeyValueNode { name, parent }
    }

    pub fn is(self, value: impl Display) -> P {
        let mut parent = self.parent;
        parent.query_mut().add_value_criterion(self.name, value.to_string());
        parent
    }
}

/// Field matched against a set of allowed values.
pub struct MultipleValueNode<P, T> {
    name: &'static str,
    parent: P,
    _value: PhantomData<T>,
}

impl<P: SearchRequest, T: Display> MultipleValueNode<P, T> {
    pub fn new(name: &'static str, parent: P) -> Self {
        MultipleValueNode {
            name,
            parent,
            _value: PhantomData,
        }
    }

    pub fn included_in<I, V>(self, items: I) -> P
    where
        I: IntoIterator<Item = V>,
        V: Into<T>,
    {
        with_items::<P, T, I, V>(self.parent, self.name, items)
    }

    /// Shorthand for a one-element `included_in`.
    pub fn is(self, item: impl Into<T>) -> P {
        self.included_in([item.into()])
    }
}

/// Field searchable either as text or against a set of values.
pub struct MultipleValueOrTextNode<P, T> {
    name: &'static str,
    parent: P,
    _value: PhantomData<T>,
}

impl<P: SearchRequest, T: Display> MultipleValueOrTextNode<P, T> {
    pub fn new(name: &'static str, parent: P) -> Self {
        MultipleValueOrTextNode {
            name,
            parent,
            _value: PhantomData,
        }
    }

    pub fn included_in<I, V>(self, items: I) -> P
    where
        I: IntoIterator<Item = V>,
        V: Into<T>,
    {
        with_items::<P, T, I, V>(self.parent, self.name, items)
    }

    pub fn is(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::Is, value.into())
    }

    pub fn is_not(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::IsNot, value.into())
    }

    pub fn starts_with(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::StartsWith, value.into())
    }

    pub fn ends_with(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::EndsWith, value.into())
    }

    pub fn contains(self, value: impl Into<String>) -> P {
        with_criterion(self.parent, self.name, Operator::Contains, value.into())
    }
}

/// Numeric or monetary field with inclusive bounds.
pub struct RangeNode<P> {
    name: &'static str,
    parent: P,
}

impl<P: SearchRequest> RangeNode<P> {
    pub fn new(name: &'static str, parent: P) -> Self {
        RangeNode { name, parent }
    }

    pub fn greater_than_or_equal_to(self, min: impl Display) -> P {
        with_range(
            self.parent,
            self.name,
            RangeBound::Min,
            SearchValue::Text(min.to_string()),
        )
    }

    pub fn less_than_or_equal_to(self, max: impl Display) -> P {
        with_range(
            self.parent,
            self.name,
            RangeBound::Max,
            SearchValue::Text(max.to_string()),
        )
    }

    pub fn between(self, min: impl Display, max: impl Display) -> P {
        let name = self.name;
        let parent = with_range(
            self.parent,
            name,
            RangeBound::Min,
            SearchValue::Text(min.to_string()),
        );
        with_range(parent, name, RangeBound::Max, SearchValue::Text(max.to_string()))
    }

    pub fn is(self, value: impl Display) -> P {
        with_criterion(self.parent, self.name, Operator::Is, value.to_string())
    }
}

/// Timestamp field with inclusive bounds, sent in UTC.
pub struct DateRangeNode<P> {
    name: &'static str,
    parent: P,
}

impl<P: SearchRequest> DateRangeNode<P> {
    pub fn new(name: &'static str, parent: P) -> Self {
        DateRangeNode { name, parent }
    }

    pub fn greater_than_or_equal_to(self, min: DateTime<Utc>) -> P {
        with_range(self.parent, self.name, RangeBound::Min, SearchValue::DateTime(min))
    }

    pub fn less_than_or_equal_to(self, max: DateTime<Utc>) -> P {
        with_range(self.parent, self.name, RangeBound::Max, SearchValue::DateTime(max))
    }

    pub fn between(self, min: DateTime<Utc>, max: DateTime<Utc>) -> P {
        let name = self.name;
        let parent = with_range(self.parent, name, RangeBound::Min, SearchValue::DateTime(min));
        with_range(parent, name, RangeBound::Max, SearchValue::DateTime(max))
    }
}
