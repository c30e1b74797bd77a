//! Dynamic descriptor shown on the customer's card statement.

use crate::request_builder::{Request, RequestBuilder};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorRequest {
    name: Option<String>,
    phone: Option<String>,
    url: Option<String>,
}

impl DescriptorRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Request for DescriptorRequest {
    const ROOT: &'static str = "descriptor";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("name", self.name.as_deref())
            .add_element("phone", self.phone.as_deref())
            .add_element("url", self.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_xml() {
        let descriptor = DescriptorRequest::new().name("acme*widgets").phone("3125551212");
        assert_eq!(
            descriptor.to_xml(),
            "<descriptor><name>acme*widgets</name><phone>3125551212</phone></descriptor>"
        );
    }

    #[test]
    fn test_descriptor_query_string_with_root() {
        let descriptor = DescriptorRequest::new().name("acme");
        assert_eq!(
            descriptor.to_query_string_with_root("transaction[descriptor]"),
            "transaction%5Bdescriptor%5D%5Bname%5D=acme"
        );
    }
}
