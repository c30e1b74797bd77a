//! Postal address block, used for billing and shipping.

use crate::request_builder::{Request, RequestBuilder};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    company: Option<String>,
    street_address: Option<String>,
    extended_address: Option<String>,
    locality: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country_name: Option<String>,
    country_code_alpha2: Option<String>,
    country_code_alpha3: Option<String>,
    country_code_numeric: Option<String>,
}

impl AddressRequest {
    pub fn new() -> Self {
        Self::default()
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

    pub fn street_address(mut self, street_address: impl Into<String>) -> Self {
        self.street_address = Some(street_address.into());
        self
    }

    pub fn extended_address(mut self, extended_address: impl Into<String>) -> Self {
        self.extended_address = Some(extended_address.into());
        self
    }

    /// City or town.
    pub fn locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    /// State or province.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn country_name(mut self, country_name: impl Into<String>) -> Self {
        self.country_name = Some(country_name.into());
        self
    }

    pub fn country_code_alpha2(mut self, code: impl Into<String>) -> Self {
        self.country_code_alpha2 = Some(code.into());
        self
    }

    pub fn country_code_alpha3(mut self, code: impl Into<String>) -> Self {
        self.country_code_alpha3 = Some(code.into());
        self
    }

    pub fn country_code_numeric(mut self, code: impl Into<String>) -> Self {
        self.country_code_numeric = Some(code.into());
        self
    }
}

impl Request for AddressRequest {
    const ROOT: &'static str = "address";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("first_name", self.first_name.as_deref())
            .add_element("last_name", self.last_name.as_deref())
            .add_element("company", self.company.as_deref())
            .add_element("street_address", self.street_address.as_deref())
            .add_element("extended_address", self.extended_address.as_deref())
            .add_element("locality", self.locality.as_deref())
            .add_element("region", self.region.as_deref())
            .add_element("postal_code", self.postal_code.as_deref())
            .add_element("country_name", self.country_name.as_deref())
            .add_element("country_code_alpha2", self.country_code_alpha2.as_deref())
            .add_element("country_code_alpha3", self.country_code_alpha3.as_deref())
            .add_element("country_code_numeric", self.country_code_numeric.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_set_fields_are_rendered() {
        let address = AddressRequest::new().postal_code("60622").country_code_alpha2("US");
        assert_eq!(
            address.to_xml(),
            "<address><postal-code>60622</postal-code>\
             <country-code-alpha2>US</country-code-alpha2></address>"
        );
    }

    #[test]
    fn test_rendered_under_custom_root() {
        let address = AddressRequest::new().locality("Chicago");
        assert_eq!(
            address.build_request("billing").to_xml(),
            "<billing><locality>Chicago</locality></billing>"
        );
    }
}
