//! Transaction sale/credit and clone requests.

use crate::enums::TransactionType;
use crate::money::Amount;
use crate::request_builder::{Request, RequestBuilder};
use crate::requests::address::AddressRequest;
use crate::requests::credit_card::CreditCardRequest;
use crate::requests::customer::CustomerRequest;
use crate::requests::descriptor::DescriptorRequest;
use std::collections::BTreeMap;

/// Settlement and vault behaviour of a transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionOptionsRequest {
    hold_in_escrow: Option<bool>,
    store_in_vault: Option<bool>,
    store_in_vault_on_success: Option<bool>,
    add_billing_address_to_payment_method: Option<bool>,
    store_shipping_address_in_vault: Option<bool>,
    submit_for_settlement: Option<bool>,
    venmo_sdk_session: Option<String>,
}

impl TransactionOptionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold_in_escrow(mut self, hold: bool) -> Self {
        self.hold_in_escrow = Some(hold);
        self
    }

    pub fn store_in_vault(mut self, store: bool) -> Self {
        self.store_in_vault = Some(store);
        self
    }

    /// Store the payment method only if the transaction succeeds.
    pub fn store_in_vault_on_success(mut self, store: bool) -> Self {
        self.store_in_vault_on_success = Some(store);
        self
    }

    pub fn add_billing_address_to_payment_method(mut self, add: bool) -> Self {
        self.add_billing_address_to_payment_method = Some(add);
        self
    }

    pub fn store_shipping_address_in_vault(mut self, store: bool) -> Self {
        self.store_shipping_address_in_vault = Some(store);
        self
    }

    pub fn submit_for_settlement(mut self, submit: bool) -> Self {
        self.submit_for_settlement = Some(submit);
        self
    }

    pub fn venmo_sdk_session(mut self, session: impl Into<String>) -> Self {
        self.venmo_sdk_session = Some(session.into());
        self
    }
}

impl Request for TransactionOptionsRequest {
    const ROOT: &'static str = "options";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("hold_in_escrow", self.hold_in_escrow)
            .add_element("store_in_vault", self.store_in_vault)
            .add_element("store_in_vault_on_success", self.store_in_vault_on_success)
            .add_element(
                "add_billing_address_to_payment_method",
                self.add_billing_address_to_payment_method,
            )
            .add_element("store_shipping_address_in_vault", self.store_shipping_address_in_vault)
            .add_element("submit_for_settlement", self.submit_for_settlement)
            .add_element("venmo_sdk_session", self.venmo_sdk_session.as_deref())
    }
}

/// A sale or credit.
///
/// # Examples
///
/// ```
/// use gateway_requests::{Amount, Request, TransactionRequest, TransactionType};
///
/// let request = TransactionRequest::new()
///     .transaction_type(TransactionType::Sale)
///     .amount(Amount::from_cents(1000))
///     .payment_method_token("tok_1")
///     .options(|o| o.submit_for_settlement(true));
///
/// assert_eq!(
///     request.to_xml(),
///     "<transaction><amount>10.00</amount><payment-method-token>tok_1</payment-method-token>\
///      <options><submit-for-settlement>true</submit-for-settlement></options>\
///      <type>sale</type></transaction>"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRequest {
    amount: Option<Amount>,
    device_data: Option<String>,
    channel: Option<String>,
    customer_id: Option<String>,
    merchant_account_id: Option<String>,
    order_id: Option<String>,
    payment_method_token: Option<String>,
    purchase_order_number: Option<String>,
    tax_amount: Option<Amount>,
    tax_exempt: Option<bool>,
    shipping_address_id: Option<String>,
    venmo_sdk_payment_method_code: Option<String>,
    service_fee_amount: Option<Amount>,
    recurring: Option<bool>,
    credit_card: Option<CreditCardRequest>,
    customer: Option<CustomerRequest>,
    descriptor: Option<DescriptorRequest>,
    billing: Option<AddressRequest>,
    shipping: Option<AddressRequest>,
    options: Option<TransactionOptionsRequest>,
    custom_fields: BTreeMap<String, String>,
    transaction_type: Option<TransactionType>,
}

impl TransactionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn device_data(mut self, device_data: impl Into<String>) -> Self {
        self.device_data = Some(device_data.into());
        self
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn merchant_account_id(mut self, merchant_account_id: impl Into<String>) -> Self {
        self.merchant_account_id = Some(merchant_account_id.into());
        self
    }

    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn payment_method_token(mut self, token: impl Into<String>) -> Self {
        self.payment_method_token = Some(token.into());
        self
    }

    pub fn purchase_order_number(mut self, number: impl Into<String>) -> Self {
        self.purchase_order_number = Some(number.into());
        self
    }

    pub fn tax_amount(mut self, tax_amount: Amount) -> Self {
        self.tax_amount = Some(tax_amount);
        self
    }

    pub fn tax_exempt(mut self, tax_exempt: bool) -> Self {
        self.tax_exempt = Some(tax_exempt);
        self
    }

    pub fn shipping_address_id(mut self, id: impl Into<String>) -> Self {
        self.shipping_address_id = Some(id.into());
        self
    }

    pub fn venmo_sdk_payment_method_code(mut self, code: impl Into<String>) -> Self {
        self.venmo_sdk_payment_method_code = Some(code.into());
        self
    }

    pub fn service_fee_amount(mut self, fee: Amount) -> Self {
        self.service_fee_amount = Some(fee);
        self
    }

    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = Some(recurring);
        self
    }

    pub fn credit_card(mut self, f: impl FnOnce(CreditCardRequest) -> CreditCardRequest) -> Self {
        self.credit_card = Some(f(self.credit_card.take().unwrap_or_default()));
        self
    }

    pub fn customer(mut self, f: impl FnOnce(CustomerRequest) -> CustomerRequest) -> Self {
        self.customer = Some(f(self.customer.take().unwrap_or_default()));
        self
    }

    pub fn descriptor(mut self, f: impl FnOnce(DescriptorRequest) -> DescriptorRequest) -> Self {
        self.descriptor = Some(f(self.descriptor.take().unwrap_or_default()));
        self
    }

    pub fn billing_address(mut self, f: impl FnOnce(AddressRequest) -> AddressRequest) -> Self {
        self.billing = Some(f(self.billing.take().unwrap_or_default()));
        self
    }

    pub fn shipping_address(mut self, f: impl FnOnce(AddressRequest) -> AddressRequest) -> Self {
        self.shipping = Some(f(self.shipping.take().unwrap_or_default()));
        self
    }

    pub fn options(
        mut self,
        f: impl FnOnce(TransactionOptionsRequest) -> TransactionOptionsRequest,
    ) -> Self {
        self.options = Some(f(self.options.take().unwrap_or_default()));
        self
    }

    pub fn custom_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.insert(key.into(), value.into());
        self
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }
}

impl Request for TransactionRequest {
    const ROOT: &'static str = "transaction";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("amount", self.amount)
            .add_element("device_data", self.device_data.as_deref())
            .add_element("channel", self.channel.as_deref())
            .add_element("customer_id", self.customer_id.as_deref())
            .add_element("merchant_account_id", self.merchant_account_id.as_deref())
            .add_element("order_id", self.order_id.as_deref())
            .add_element("payment_method_token", self.payment_method_token.as_deref())
            .add_element("purchase_order_number", self.purchase_order_number.as_deref())
            .add_element("tax_amount", self.tax_amount)
            .add_element("tax_exempt", self.tax_exempt)
            .add_element("shipping_address_id", self.shipping_address_id.as_deref())
            .add_element(
                "venmo_sdk_payment_method_code",
                self.venmo_sdk_payment_method_code.as_deref(),
            )
            .add_element("service_fee_amount", self.service_fee_amount)
            .add_element("recurring", self.recurring)
            .add_element(
                "credit_card",
                self.credit_card.as_ref().map(|c| c.build_request("credit_card")),
            )
            .add_element("customer", self.customer.as_ref().map(|c| c.build_request("customer")))
            .add_element(
                "descriptor",
                self.descriptor.as_ref().map(|d| d.build_request("descriptor")),
            )
            .add_element("billing", self.billing.as_ref().map(|a| a.build_request("billing")))
            .add_element("shipping", self.shipping.as_ref().map(|a| a.build_request("shipping")))
            .add_element("options", self.options.as_ref().map(|o| o.build_request("options")))
            .add_element_if(!self.custom_fields.is_empty(), "custom_fields", &self.custom_fields)
            .add_lower_case_element_if_present("type", self.transaction_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionOptionsCloneRequest {
    submit_for_settlement: Option<bool>,
}

impl TransactionOptionsCloneRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_for_settlement(mut self, submit: bool) -> Self {
        self.submit_for_settlement = Some(submit);
        self
    }
}

impl Request for TransactionOptionsCloneRequest {
    const ROOT: &'static str = "options";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root).add_element("submit_for_settlement", self.submit_for_settlement)
    }
}

/// Re-runs an existing transaction, optionally with a different amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionCloneRequest {
    amount: Option<Amount>,
    channel: Option<String>,
    options: Option<TransactionOptionsCloneRequest>,
}

impl TransactionCloneRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn options(
        mut self,
        f: impl FnOnce(TransactionOptionsCloneRequest) -> TransactionOptionsCloneRequest,
    ) -> Self {
        self.options = Some(f(self.options.take().unwrap_or_default()));
        self
    }
}

impl Request for TransactionCloneRequest {
    const ROOT: &'static str = "transaction_clone";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("amount", self.amount)
            .add_element("channel", self.channel.as_deref())
            .add_element("options", self.options.as_ref().map(|o| o.build_request("options")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_with_card_and_addresses() {
        let sale = TransactionRequest::new()
            .amount(Amount::from_cents(2500))
            .order_id("order-42")
            .credit_card(|c| c.number("4111111111111111").expiration_date("05/2030"))
            .billing_address(|a| a.postal_code("60622"))
            .shipping_address(|a| a.locality("Chicago"))
            .transaction_type(TransactionType::Sale);

        assert_eq!(
            sale.to_xml(),
            "<transaction><amount>25.00</amount><order-id>order-42</order-id>\
             <credit-card><expiration-date>05/2030</expiration-date>\
             <number>4111111111111111</number></credit-card>\
             <billing><postal-code>60622</postal-code></billing>\
             <shipping><locality>Chicago</locality></shipping>\
             <type>sale</type></transaction>"
        );
    }

    #[test]
    fn test_options_query_string() {
        let sale = TransactionRequest::new()
            .options(|o| o.store_in_vault(true).submit_for_settlement(false));

        assert_eq!(
            sale.to_query_string(),
            "transaction%5Boptions%5D%5Bstore_in_vault%5D=true&\
             transaction%5Boptions%5D%5Bsubmit_for_settlement%5D=false"
        );
    }

    #[test]
    fn test_custom_fields_and_descriptor() {
        let sale = TransactionRequest::new()
            .descriptor(|d| d.name("acme*widgets"))
            .custom_field("store_me", "1");

        assert_eq!(
            sale.to_xml(),
            "<transaction><descriptor><name>acme*widgets</name></descriptor>\
             <custom-fields><store_me>1</store_me></custom-fields></transaction>"
        );
    }

    #[test]
    fn test_clone_request() {
        let clone = TransactionCloneRequest::new()
            .amount(Amount::from_cents(1000))
            .options(|o| o.submit_for_settlement(true));

        assert_eq!(
            clone.to_xml(),
            "<transaction-clone><amount>10.00</amount>\
             <options><submit-for-settlement>true</submit-for-settlement></options>\
             </transaction-clone>"
        );
    }

    #[test]
    fn test_options_standalone_query_string() {
        let options = TransactionOptionsRequest::new().hold_in_escrow(true);
        assert_eq!(options.to_query_string(), "options%5Bhold_in_escrow%5D=true");
    }
}
