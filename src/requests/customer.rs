//! Customer create/update requests.

use crate::request_builder::{Request, RequestBuilder};
use crate::requests::credit_card::CreditCardRequest;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerRequest {
    customer_id: Option<String>,
    id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    company: Option<String>,
    email: Option<String>,
    fax: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    device_data: Option<String>,
    custom_fields: BTreeMap<String, String>,
    credit_card: Option<CreditCardRequest>,
}

impl CustomerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the existing customer being updated; sent outside the customer block.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Id to assign to a new customer.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn fax(mut self, fax: impl Into<String>) -> Self {
        self.fax = Some(fax.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn device_data(mut self, device_data: impl Into<String>) -> Self {
        self.device_data = Some(device_data.into());
        self
    }

    /// Sets one merchant-defined field. Keys are sent exactly as given.
    pub fn custom_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.insert(key.into(), value.into());
        self
    }

    pub fn credit_card(mut self, f: impl FnOnce(CreditCardRequest) -> CreditCardRequest) -> Self {
        self.credit_card = Some(f(self.credit_card.take().unwrap_or_default()));
        self
    }
}

impl Request for CustomerRequest {
    const ROOT: &'static str = "customer";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_top_level_element("customer_id", self.customer_id.as_deref())
            .add_element("id", self.id.as_deref())
            .add_element("first_name", self.first_name.as_deref())
            .add_element("last_name", self.last_name.as_deref())
            .add_element("company", self.company.as_deref())
            .add_element("email", self.email.as_deref())
            .add_element("fax", self.fax.as_deref())
            .add_element("phone", self.phone.as_deref())
            .add_element("website", self.website.as_deref())
            .add_element("device_data", self.device_data.as_deref())
            .add_element_if(!self.custom_fields.is_empty(), "custom_fields", &self.custom_fields)
            .add_element(
                "credit_card",
                self.credit_card.as_ref().map(|c| c.build_request("credit_card")),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_with_card_and_custom_fields() {
        let customer = CustomerRequest::new()
            .first_name("Ada")
            .custom_field("loyalty_tier", "gold")
            .credit_card(|c| c.number("4111111111111111").options(|o| o.make_default(true)));

        assert_eq!(
            customer.to_xml(),
            "<customer><first-name>Ada</first-name>\
             <custom-fields><loyalty_tier>gold</loyalty_tier></custom-fields>\
             <credit-card><number>4111111111111111</number>\
             <options><make-default>true</make-default></options></credit-card>\
             </customer>"
        );
    }

    #[test]
    fn test_no_custom_fields_means_no_block() {
        let customer = CustomerRequest::new().email("ada@example.com");
        assert_eq!(customer.to_xml(), "<customer><email>ada@example.com</email></customer>");
    }

    #[test]
    fn test_update_query_string() {
        let customer = CustomerRequest::new().customer_id("cust_1").phone("312 555 1212");
        assert_eq!(
            customer.to_query_string(),
            "customer_id=cust_1&customer%5Bphone%5D=312+555+1212"
        );
        assert_eq!(customer.to_xml(), "<customer><phone>312 555 1212</phone></customer>");
    }
}
