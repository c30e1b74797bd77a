//! Concrete search requests, one per searchable entity.

use crate::enums::{
    CardType, CreatedUsing, CustomerLocation, SubscriptionStatus, TransactionSource,
    TransactionStatus, TransactionType,
};
use crate::search::{
    DateRangeNode, EqualityNode, KeyValueNode, MultipleValueNode, MultipleValueOrTextNode,
    PartialMatchNode, RangeNode, SearchQuery, SearchRequest, TextNode,
};

macro_rules! impl_search_request {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl SearchRequest for $name {
            fn query(&self) -> &SearchQuery {
                &self.query
            }

            fn query_mut(&mut self) -> &mut SearchQuery {
                &mut self.query
            }
        }
    };
}

/// Searches transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionSearchRequest {
    query: SearchQuery,
}

impl_search_request!(TransactionSearchRequest);

impl TransactionSearchRequest {
    pub fn id(self) -> TextNode<Self> {
        TextNode::new("id", self)
    }

    pub fn billing_company(self) -> TextNode<Self> {
        TextNode::new("billing_company", self)
    }

    pub fn billing_country_name(self) -> TextNode<Self> {
        TextNode::new("billing_country_name", self)
    }

    pub fn billing_extended_address(self) -> TextNode<Self> {
        TextNode::new("billing_extended_address", self)
    }

    pub fn billing_first_name(self) -> TextNode<Self> {
        TextNode::new("billing_first_name", self)
    }

    pub fn billing_last_name(self) -> TextNode<Self> {
        TextNode::new("billing_last_name", self)
    }

    pub fn billing_locality(self) -> TextNode<Self> {
        TextNode::new("billing_locality", self)
    }

    pub fn billing_postal_code(self) -> TextNode<Self> {
        TextNode::new("billing_postal_code", self)
    }

    pub fn billing_region(self) -> TextNode<Self> {
        TextNode::new("billing_region", self)
    }

    pub fn billing_street_address(self) -> TextNode<Self> {
        TextNode::new("billing_street_address", self)
    }

    pub fn credit_card_cardholder_name(self) -> TextNode<Self> {
        TextNode::new("credit_card_cardholder_name", self)
    }

    pub fn currency(self) -> TextNode<Self> {
        TextNode::new("currency", self)
    }

    pub fn customer_company(self) -> TextNode<Self> {
        TextNode::new("customer_company", self)
    }

    pub fn customer_email(self) -> TextNode<Self> {
        TextNode::new("customer_email", self)
    }

    pub fn customer_fax(self) -> TextNode<Self> {
        TextNode::new("customer_fax", self)
    }

    pub fn customer_first_name(self) -> TextNode<Self> {
        TextNode::new("customer_first_name", self)
    }

    pub fn customer_id(self) -> TextNode<Self> {
        TextNode::new("customer_id", self)
    }

    pub fn customer_last_name(self) -> TextNode<Self> {
        TextNode::new("customer_last_name", self)
    }

    pub fn customer_phone(self) -> TextNode<Self> {
        TextNode::new("customer_phone", self)
    }

    pub fn customer_website(self) -> TextNode<Self> {
        TextNode::new("customer_website", self)
    }

    pub fn order_id(self) -> TextNode<Self> {
        TextNode::new("order_id", self)
    }

    pub fn payment_method_token(self) -> TextNode<Self> {
        TextNode::new("payment_method_token", self)
    }

    pub fn processor_authorization_code(self) -> TextNode<Self> {
        TextNode::new("processor_authorization_code", self)
    }

    pub fn settlement_batch_id(self) -> TextNode<Self> {
        TextNode::new("settlement_batch_id", self)
    }

    pub fn shipping_company(self) -> TextNode<Self> {
        TextNode::new("shipping_company", self)
    }

    pub fn shipping_country_name(self) -> TextNode<Self> {
        TextNode::new("shipping_country_name", self)
    }

    pub fn shipping_extended_address(self) -> TextNode<Self> {
        TextNode::new("shipping_extended_address", self)
    }

    pub fn shipping_first_name(self) -> TextNode<Self> {
        TextNode::new("shipping_first_name", self)
    }

    pub fn shipping_last_name(self) -> TextNode<Self> {
        TextNode::new("shipping_last_name", self)
    }

    pub fn shipping_locality(self) -> TextNode<Self> {
        TextNode::new("shipping_locality", self)
    }

    pub fn shipping_postal_code(self) -> TextNode<Self> {
        TextNode::new("shipping_postal_code", self)
    }

    pub fn shipping_region(self) -> TextNode<Self> {
        TextNode::new("shipping_region", self)
    }

    pub fn shipping_street_address(self) -> TextNode<Self> {
        TextNode::new("shipping_street_address", self)
    }

    /// Expiration as `MM/YYYY`.
    pub fn credit_card_expiration_date(self) -> EqualityNode<Self> {
        EqualityNode::new("credit_card_expiration_date", self)
    }

    /// Matches on the leading six or trailing four digits.
    pub fn credit_card_number(self) -> PartialMatchNode<Self> {
        PartialMatchNode::new("credit_card_number", self)
    }

    pub fn ids(self) -> MultipleValueNode<Self, String> {
        MultipleValueNode::new("ids", self)
    }

    pub fn created_using(self) -> MultipleValueNode<Self, CreatedUsing> {
        MultipleValueNode::new("created_using", self)
    }

    pub fn credit_card_customer_location(self) -> MultipleValueNode<Self, CustomerLocation> {
        MultipleValueNode::new("credit_card_customer_location", self)
    }

    pub fn merchant_account_id(self) -> MultipleValueNode<Self, String> {
        MultipleValueNode::new("merchant_account_id", self)
    }

    pub fn credit_card_card_type(self) -> MultipleValueNode<Self, CardType> {
        MultipleValueNode::new("credit_card_card_type", self)
    }

    pub fn status(self) -> MultipleValueNode<Self, TransactionStatus> {
        MultipleValueNode::new("status", self)
    }

    pub fn source(self) -> MultipleValueNode<Self, TransactionSource> {
        MultipleValueNode::new("source", self)
    }

    pub fn transaction_type(self) -> MultipleValueNode<Self, TransactionType> {
        MultipleValueNode::new("type", self)
    }

    /// Whether the transaction is a refund of another one.
    pub fn refund(self) -> KeyValueNode<Self> {
        KeyValueNode::new("refund", self)
    }

    pub fn amount(self) -> RangeNode<Self> {
        RangeNode::new("amount", self)
    }

    pub fn authorization_expired_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("authorization_expired_at", self)
    }

    pub fn authorized_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("authorized_at", self)
    }

    pub fn created_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("created_at", self)
    }

    pub fn failed_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("failed_at", self)
    }

    pub fn gateway_rejected_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("gateway_rejected_at", self)
    }

    pub fn processor_declined_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("processor_declined_at", self)
    }

    pub fn settled_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("settled_at", self)
    }

    pub fn submitted_for_settlement_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("submitted_for_settlement_at", self)
    }

    pub fn voided_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("voided_at", self)
    }

    pub fn disbursement_date(self) -> DateRangeNode<Self> {
        DateRangeNode::new("disbursement_date", self)
    }
}

/// Searches subscriptions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionSearchRequest {
    query: SearchQuery,
}

impl_search_request!(SubscriptionSearchRequest);

impl SubscriptionSearchRequest {
    pub fn billing_cycles_remaining(self) -> RangeNode<Self> {
        RangeNode::new("billing_cycles_remaining", self)
    }

    pub fn days_past_due(self) -> RangeNode<Self> {
        RangeNode::new("days_past_due", self)
    }

    pub fn id(self) -> TextNode<Self> {
        TextNode::new("id", self)
    }

    pub fn ids(self) -> MultipleValueNode<Self, String> {
        MultipleValueNode::new("ids", self)
    }

    pub fn in_trial_period(self) -> MultipleValueNode<Self, bool> {
        MultipleValueNode::new("in_trial_period", self)
    }

    pub fn merchant_account_id(self) -> MultipleValueNode<Self, String> {
        MultipleValueNode::new("merchant_account_id", self)
    }

    pub fn next_billing_date(self) -> DateRangeNode<Self> {
        DateRangeNode::new("next_billing_date", self)
    }

    pub fn plan_id(self) -> MultipleValueOrTextNode<Self, String> {
        MultipleValueOrTextNode::new("plan_id", self)
    }

    pub fn price(self) -> RangeNode<Self> {
        RangeNode::new("price", self)
    }

    pub fn status(self) -> MultipleValueNode<Self, SubscriptionStatus> {
        MultipleValueNode::new("status", self)
    }

    // The gateway spells this one with a dash.
    pub fn transaction_id(self) -> TextNode<Self> {
        TextNode::new("transaction-id", self)
    }
}

/// Searches credit card verifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditCardVerificationSearchRequest {
    query: SearchQuery,
}

impl_search_request!(CreditCardVerificationSearchRequest);

impl CreditCardVerificationSearchRequest {
    pub fn id(self) -> TextNode<Self> {
        TextNode::new("id", self)
    }

    pub fn credit_card_cardholder_name(self) -> TextNode<Self> {
        TextNode::new("credit_card_cardholder_name", self)
    }

    pub fn credit_card_expiration_date(self) -> EqualityNode<Self> {
        EqualityNode::new("credit_card_expiration_date", self)
    }

    pub fn credit_card_number(self) -> PartialMatchNode<Self> {
        PartialMatchNode::new("credit_card_number", self)
    }

    pub fn ids(self) -> MultipleValueNode<Self, String> {
        MultipleValueNode::new("ids", self)
    }

    pub fn credit_card_card_type(self) -> MultipleValueNode<Self, CardType> {
        MultipleValueNode::new("credit_card_card_type", self)
    }

    pub fn created_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("created_at", self)
    }
}

/// Searches customers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerSearchRequest {
    query: SearchQuery,
}

impl_search_request!(CustomerSearchRequest);

impl CustomerSearchRequest {
    pub fn id(self) -> TextNode<Self> {
        TextNode::new("id", self)
    }

    pub fn company(self) -> TextNode<Self> {
        TextNode::new("company", self)
    }

    pub fn email(self) -> TextNode<Self> {
        TextNode::new("email", self)
    }

    pub fn first_name(self) -> TextNode<Self> {
        TextNode::new("first_name", self)
    }

    pub fn last_name(self) -> TextNode<Self> {
        TextNode::new("last_name", self)
    }

    pub fn phone(self) -> TextNode<Self> {
        TextNode::new("phone", self)
    }

    pub fn website(self) -> TextNode<Self> {
        TextNode::new("website", self)
    }

    pub fn fax(self) -> TextNode<Self> {
        TextNode::new("fax", self)
    }

    pub fn payment_method_token(self) -> TextNode<Self> {
        TextNode::new("payment_method_token", self)
    }

    pub fn cardholder_name(self) -> TextNode<Self> {
        TextNode::new("cardholder_name", self)
    }

    pub fn address_postal_code(self) -> TextNode<Self> {
        TextNode::new("address_postal_code", self)
    }

    pub fn address_locality(self) -> TextNode<Self> {
        TextNode::new("address_locality", self)
    }

    pub fn credit_card_expiration_date(self) -> EqualityNode<Self> {
        EqualityNode::new("credit_card_expiration_date", self)
    }

    pub fn credit_card_number(self) -> PartialMatchNode<Self> {
        PartialMatchNode::new("credit_card_number", self)
    }

    /// Matches customers holding a card with the given token.
    pub fn payment_method_token_with_duplicates(self) -> KeyValueNode<Self> {
        KeyValueNode::new("payment_method_token_with_duplicates", self)
    }

    pub fn ids(self) -> MultipleValueNode<Self, String> {
        MultipleValueNode::new("ids", self)
    }

    pub fn created_at(self) -> DateRangeNode<Self> {
        DateRangeNode::new("created_at", self)
    }
}

/// Fetches a page of already-matched records by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdsSearchRequest {
    query: SearchQuery,
}

impl_search_request!(IdsSearchRequest);

impl IdsSearchRequest {
    pub fn ids(self) -> MultipleValueNode<Self, String> {
        MultipleValueNode::new("ids", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Amount;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_text_operators() {
        let search = TransactionSearchRequest::new()
            .billing_first_name()
            .is_not("Bob")
            .customer_company()
            .contains("Widgets")
            .order_id()
            .starts_with("2024-");

        assert_eq!(
            search.to_xml(),
            "<search><billing_first_name><is_not>Bob</is_not></billing_first_name>\
             <customer_company><contains>Widgets</contains></customer_company>\
             <order_id><starts_with>2024-</starts_with></order_id></search>"
        );
    }

    #[test]
    fn test_partial_match_and_equality() {
        let search = CreditCardVerificationSearchRequest::new()
            .credit_card_number()
            .ends_with("1111")
            .credit_card_expiration_date()
            .is("05/2030");

        assert_eq!(
            search.to_xml(),
            "<search><credit_card_number><ends_with>1111</ends_with></credit_card_number>\
             <credit_card_expiration_date><is>05/2030</is></credit_card_expiration_date></search>"
        );
    }

    #[test]
    fn test_key_value_node() {
        let search = TransactionSearchRequest::new().refund().is(true);
        assert_eq!(search.to_xml(), "<search><refund>true</refund></search>");
    }

    #[test]
    fn test_multiple_value_with_enums() {
        let search = TransactionSearchRequest::new()
            .credit_card_card_type()
            .included_in([CardType::Visa, CardType::MasterCard])
            .transaction_type()
            .is(TransactionType::Credit);

        assert_eq!(
            search.to_xml(),
            "<search><credit_card_card_type type=\"array\">\
             <item>Visa</item><item>MasterCard</item></credit_card_card_type>\
             <type type=\"array\"><item>credit</item></type></search>"
        );
    }

    #[test]
    fn test_multiple_value_with_strings() {
        let search = IdsSearchRequest::new().ids().included_in(["a", "b", "c"]);
        assert_eq!(
            search.to_xml(),
            "<search><ids type=\"array\"><item>a</item><item>b</item><item>c</item></ids></search>"
        );
    }

    #[test]
    fn test_range_node_variants() {
        let search = SubscriptionSearchRequest::new()
            .price()
            .greater_than_or_equal_to(Amount::from_cents(500))
            .days_past_due()
            .less_than_or_equal_to(30)
            .billing_cycles_remaining()
            .is(2);

        assert_eq!(
            search.to_xml(),
            "<search><billing_cycles_remaining><is>2</is></billing_cycles_remaining>\
             <price><min>5.00</min></price><days_past_due><max>30</max></days_past_due></search>"
        );
    }

    #[test]
    fn test_date_range_between() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let search = TransactionSearchRequest::new().settled_at().between(from, to);

        assert_eq!(
            search.to_xml(),
            "<search><settled_at><min type=\"datetime\">2024-01-01T00:00:00Z</min>\
             <max type=\"datetime\">2024-01-31T23:59:59Z</max></settled_at></search>"
        );
    }

    #[test]
    fn test_multiple_value_or_text() {
        let by_text = SubscriptionSearchRequest::new().plan_id().starts_with("gold");
        assert_eq!(
            by_text.to_xml(),
            "<search><plan_id><starts_with>gold</starts_with></plan_id></search>"
        );

        let by_set = SubscriptionSearchRequest::new()
            .plan_id()
            .included_in(["gold", "silver"]);
        assert_eq!(
            by_set.to_xml(),
            "<search><plan_id type=\"array\"><item>gold</item><item>silver</item></plan_id></search>"
        );
    }

    #[test]
    fn test_subscription_status_and_trial_flags() {
        let search = SubscriptionSearchRequest::new()
            .status()
            .included_in([SubscriptionStatus::Active, SubscriptionStatus::PastDue])
            .in_trial_period()
            .is(false)
            .transaction_id()
            .is("txn_1");

        assert_eq!(
            search.to_xml(),
            "<search><transaction-id><is>txn_1</is></transaction-id>\
             <status type=\"array\"><item>Active</item><item>Past Due</item></status>\
             <in_trial_period type=\"array\"><item>false</item></in_trial_period></search>"
        );
    }

    #[test]
    fn test_customer_search() {
        let search = CustomerSearchRequest::new()
            .email()
            .is("ada@example.com")
            .payment_method_token_with_duplicates()
            .is("tok_1");

        assert_eq!(
            search.to_xml(),
            "<search><email><is>ada@example.com</is></email>\
             <payment_method_token_with_duplicates>tok_1</payment_method_token_with_duplicates>\
             </search>"
        );
    }
}
