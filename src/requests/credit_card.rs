//! Credit card create/update requests.

use crate::request_builder::{Request, RequestBuilder};
use crate::requests::address::AddressRequest;

/// Vault behaviour applied when a card is stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditCardOptionsRequest {
    fail_on_duplicate_payment_method: Option<bool>,
    verify_card: Option<bool>,
    verification_merchant_account_id: Option<String>,
    make_default: Option<bool>,
    update_existing_token: Option<String>,
    venmo_sdk_session: Option<String>,
}

impl CreditCardOptionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on_duplicate_payment_method(mut self, fail: bool) -> Self {
        self.fail_on_duplicate_payment_method = Some(fail);
        self
    }

    pub fn verify_card(mut self, verify_card: bool) -> Self {
        self.verify_card = Some(verify_card);
        self
    }

    pub fn verification_merchant_account_id(mut self, id: impl Into<String>) -> Self {
        self.verification_merchant_account_id = Some(id.into());
        self
    }

    /// Only `true` is ever sent; a card cannot be explicitly made non-default.
    pub fn make_default(mut self, make_default: bool) -> Self {
        self.make_default = Some(make_default);
        self
    }

    pub fn update_existing_token(mut self, token: impl Into<String>) -> Self {
        self.update_existing_token = Some(token.into());
        self
    }

    pub fn venmo_sdk_session(mut self, session: impl Into<String>) -> Self {
        self.venmo_sdk_session = Some(session.into());
        self
    }
}

impl Request for CreditCardOptionsRequest {
    const ROOT: &'static str = "options";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("fail_on_duplicate_payment_method", self.fail_on_duplicate_payment_method)
            .add_element("verify_card", self.verify_card)
            .add_element(
                "verification_merchant_account_id",
                self.verification_merchant_account_id.as_deref(),
            )
            .add_element_if(self.make_default == Some(true), "make_default", self.make_default)
            .add_element("update_existing_token", self.update_existing_token.as_deref())
            .add_element("venmo_sdk_session", self.venmo_sdk_session.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditCardRequest {
    billing_address: Option<AddressRequest>,
    cardholder_name: Option<String>,
    customer_id: Option<String>,
    cvv: Option<String>,
    device_data: Option<String>,
    expiration_date: Option<String>,
    expiration_month: Option<String>,
    expiration_year: Option<String>,
    number: Option<String>,
    options: Option<CreditCardOptionsRequest>,
    payment_method_token: Option<String>,
    token: Option<String>,
    venmo_sdk_payment_method_code: Option<String>,
}

impl CreditCardRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn billing_address(mut self, f: impl FnOnce(AddressRequest) -> AddressRequest) -> Self {
        self.billing_address = Some(f(self.billing_address.take().unwrap_or_default()));
        self
    }

    pub fn cardholder_name(mut self, name: impl Into<String>) -> Self {
        self.cardholder_name = Some(name.into());
        self
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn cvv(mut self, cvv: impl Into<String>) -> Self {
        self.cvv = Some(cvv.into());
        self
    }

    pub fn device_data(mut self, device_data: impl Into<String>) -> Self {
        self.device_data = Some(device_data.into());
        self
    }

    /// Expiration as `MM/YYYY`.
    pub fn expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    pub fn expiration_month(mut self, month: impl Into<String>) -> Self {
        self.expiration_month = Some(month.into());
        self
    }

    pub fn expiration_year(mut self, year: impl Into<String>) -> Self {
        self.expiration_year = Some(year.into());
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn options(
        mut self,
        f: impl FnOnce(CreditCardOptionsRequest) -> CreditCardOptionsRequest,
    ) -> Self {
        self.options = Some(f(self.options.take().unwrap_or_default()));
        self
    }

    /// Token of the stored card being updated; sent outside the card block.
    pub fn payment_method_token(mut self, token: impl Into<String>) -> Self {
        self.payment_method_token = Some(token.into());
        self
    }

    /// Token to assign to a newly stored card.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn venmo_sdk_payment_method_code(mut self, code: impl Into<String>) -> Self {
        self.venmo_sdk_payment_method_code = Some(code.into());
        self
    }
}

impl Request for CreditCardRequest {
    const ROOT: &'static str = "credit_card";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_top_level_element("payment_method_token", self.payment_method_token.as_deref())
            .add_element(
                "billing_address",
                self.billing_address
                    .as_ref()
                    .map(|a| a.build_request("billing_address")),
            )
            .add_element("cardholder_name", self.cardholder_name.as_deref())
            .add_element("customer_id", self.customer_id.as_deref())
            .add_element("cvv", self.cvv.as_deref())
            .add_element("device_data", self.device_data.as_deref())
            .add_element("expiration_date", self.expiration_date.as_deref())
            .add_element("expiration_month", self.expiration_month.as_deref())
            .add_element("expiration_year", self.expiration_year.as_deref())
            .add_element("number", self.number.as_deref())
            .add_element("options", self.options.as_ref().map(|o| o.build_request("options")))
            .add_element("token", self.token.as_deref())
            .add_element(
                "venmo_sdk_payment_method_code",
                self.venmo_sdk_payment_method_code.as_deref(),
            )
    }
}
