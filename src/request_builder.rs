//! Accumulates named values and renders them as an XML body or a query string.
//!
//! Every request object in this crate ends up as a [`RequestBuilder`]: an
//! ordered list of named [`Element`]s under a root name. Absent values are
//! dropped when they are added, so rendering never has to deal with them.
//!
//! Names are written in snake_case. The XML form dasherizes them
//! (`order_id` becomes `<order-id>`), the query string keeps underscores and
//! nests them in brackets under the root (`transaction[order_id]=...`).

use crate::money::Amount;
use chrono::{DateTime, NaiveDate, Utc};
use quick_xml::escape::escape;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt::{Display, Write};
use url::form_urlencoded;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single value slot in a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(String),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    Map(BTreeMap<String, String>),
    Array(Vec<Element>),
    Nested(RequestBuilder),
}

/// Conversion into an optional [`Element`]; `None` means the value is absent.
pub trait IntoElement {
    fn into_element(self) -> Option<Element>;
}

impl<T: IntoElement> IntoElement for Option<T> {
    fn into_element(self) -> Option<Element> {
        self.and_then(IntoElement::into_element)
    }
}

impl IntoElement for Element {
    fn into_element(self) -> Option<Element> {
        Some(self)
    }
}

impl IntoElement for String {
    fn into_element(self) -> Option<Element> {
        Some(Element::Text(self))
    }
}

impl IntoElement for &str {
    fn into_element(self) -> Option<Element> {
        Some(Element::Text(self.to_string()))
    }
}

impl IntoElement for &String {
    fn into_element(self) -> Option<Element> {
        Some(Element::Text(self.clone()))
    }
}

macro_rules! display_element {
    ($($ty:ty),*) => {
        $(
            impl IntoElement for $ty {
                fn into_element(self) -> Option<Element> {
                    Some(Element::Text(self.to_string()))
                }
            }
        )*
    };
}

display_element!(bool, i32, i64, u32, u64, usize, Amount, Decimal);

impl IntoElement for DateTime<Utc> {
    fn into_element(self) -> Option<Element> {
        Some(Element::DateTime(self))
    }
}

impl IntoElement for NaiveDate {
    fn into_element(self) -> Option<Element> {
        Some(Element::Date(self))
    }
}

impl IntoElement for BTreeMap<String, String> {
    fn into_element(self) -> Option<Element> {
        Some(Element::Map(self))
    }
}

impl IntoElement for &BTreeMap<String, String> {
    fn into_element(self) -> Option<Element> {
        Some(Element::Map(self.clone()))
    }
}

impl<T: IntoElement> IntoElement for Vec<T> {
    fn into_element(self) -> Option<Element> {
        Some(Element::Array(
            self.into_iter().filter_map(IntoElement::into_element).collect(),
        ))
    }
}

impl IntoElement for RequestBuilder {
    fn into_element(self) -> Option<Element> {
        Some(Element::Nested(self))
    }
}

/// A request that can be rendered as an XML body or a query string.
pub trait Request {
    /// Root element name used when the request is rendered on its own.
    const ROOT: &'static str;

    /// Collects the request's fields under `root`.
    fn build_request(&self, root: &str) -> RequestBuilder;

    fn to_xml(&self) -> String {
        self.build_request(Self::ROOT).to_xml()
    }

    fn to_query_string(&self) -> String {
        self.to_query_string_with_root(Self::ROOT)
    }

    fn to_query_string_with_root(&self, root: &str) -> String {
        self.build_request(root).to_query_string()
    }
}

/// Ordered collection of named elements under a root name.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBuilder {
    root: String,
    top_level_elements: Vec<(String, Element)>,
    elements: Vec<(String, Element)>,
}

impl RequestBuilder {
    pub fn new(root: impl Into<String>) -> Self {
        RequestBuilder {
            root: root.into(),
            top_level_elements: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns `true` if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.top_level_elements.is_empty() && self.elements.is_empty()
    }

    /// Appends `value` under `name` unless it is absent.
    pub fn add_element(mut self, name: &str, value: impl IntoElement) -> Self {
        if let Some(element) = value.into_element() {
            self.elements.push((name.to_string(), element));
        }
        self
    }

    /// Appends `value` only when `condition` holds.
    pub fn add_element_if(self, condition: bool, name: &str, value: impl IntoElement) -> Self {
        if condition {
            self.add_element(name, value)
        } else {
            self
        }
    }

    /// Appends the lower-cased display form of `value` if it is present.
    pub fn add_lower_case_element_if_present<T: Display>(self, name: &str, value: Option<T>) -> Self {
        self.add_element(name, value.map(|v| v.to_string().to_lowercase()))
    }

    /// Appends an element sent outside the root: a bare query-string pair,
    /// left out of the XML body.
    pub fn add_top_level_element(mut self, name: &str, value: impl IntoElement) -> Self {
        if let Some(element) = value.into_element() {
            self.top_level_elements.push((name.to_string(), element));
        }
        self
    }

    pub fn to_xml(&self) -> String {
        let root = dasherize(&self.root);
        let mut xml = String::new();
        let _ = write!(xml, "<{}>", root);
        for (name, element) in &self.elements {
            write_xml_element(&mut xml, name, element);
        }
        let _ = write!(xml, "</{}>", root);
        xml
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, element) in &self.top_level_elements {
            append_query_element(&mut serializer, &underscore(name), element);
        }
        self.append_query_pairs(&mut serializer, &underscore(&self.root));
        serializer.finish()
    }

    fn append_query_pairs(
        &self,
        serializer: &mut form_urlencoded::Serializer<'_, String>,
        prefix: &str,
    ) {
        for (name, element) in &self.elements {
            let key = format!("{}[{}]", prefix, underscore(name));
            append_query_element(serializer, &key, element);
        }
    }
}

fn write_xml_element(xml: &mut String, name: &str, element: &Element) {
    let tag = dasherize(name);
    match element {
        Element::Text(value) => {
            let _ = write!(xml, "<{0}>{1}</{0}>", tag, escape(value.as_str()));
        }
        Element::DateTime(value) => {
            let _ = write!(
                xml,
                "<{0} type=\"datetime\">{1}</{0}>",
                tag,
                value.format(DATETIME_FORMAT)
            );
        }
        Element::Date(value) => {
            let _ = write!(xml, "<{0} type=\"date\">{1}</{0}>", tag, value.format(DATE_FORMAT));
        }
        Element::Map(entries) => {
            let _ = write!(xml, "<{}>", tag);
            for (key, value) in entries {
                let key = escape(key.as_str());
                let _ = write!(xml, "<{0}>{1}</{0}>", key, escape(value.as_str()));
            }
            let _ = write!(xml, "</{}>", tag);
        }
        Element::Array(items) => {
            let _ = write!(xml, "<{} type=\"array\">", tag);
            for item in items {
                match item {
                    Element::Nested(builder) => xml.push_str(&builder.to_xml()),
                    other => write_xml_element(xml, "item", other),
                }
            }
            let _ = write!(xml, "</{}>", tag);
        }
        Element::Nested(builder) => {
            let _ = write!(xml, "<{}>", tag);
            for (name, element) in &builder.elements {
                write_xml_element(xml, name, element);
            }
            let _ = write!(xml, "</{}>", tag);
        }
    }
}

fn append_query_element(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    key: &str,
    element: &Element,
) {
    match element {
        Element::Text(value) => {
            serializer.append_pair(key, value);
        }
        Element::DateTime(value) => {
            serializer.append_pair(key, &value.format(DATETIME_FORMAT).to_string());
        }
        Element::Date(value) => {
            serializer.append_pair(key, &value.format(DATE_FORMAT).to_string());
        }
        Element::Map(entries) => {
            for (name, value) in entries {
                serializer.append_pair(&format!("{}[{}]", key, name), value);
            }
        }
        Element::Array(items) => {
            let item_key = format!("{}[]", key);
            for item in items {
                append_query_element(serializer, &item_key, item);
            }
        }
        Element::Nested(builder) => {
            for (name, element) in &builder.top_level_elements {
                append_query_element(serializer, &underscore(name), element);
            }
            builder.append_query_pairs(serializer, key);
        }
    }
}

/// `orderId`, `order_id` and `order-id` all become `order-id`.
pub fn dasherize(name: &str) -> String {
    split_words(name, '-')
}

/// `orderId`, `order_id` and `order-id` all become `order_id`.
pub fn underscore(name: &str) -> String {
    split_words(name, '_')
}

fn split_words(name: &str, separator: char) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;
    for c in name.chars() {
        if c == '_' || c == '-' {
            out.push(separator);
            previous_lower = false;
        } else if c.is_ascii_uppercase() {
            if previous_lower {
                out.push(separator);
            }
            out.push(c.to_ascii_lowercase());
            previous_lower = false;
        } else {
            out.push(c);
            previous_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
