//! Confirmation of a transparent redirect.
//!
//! After a browser posts payment data straight to the gateway, the gateway
//! redirects back to the merchant with a query string describing the outcome.
//! The merchant confirms the result by sending the `id` from that query
//! string back to the gateway.

use crate::error::{GatewayError, Result};
use log::debug;
use quick_xml::escape::escape;
use std::collections::HashMap;
use url::form_urlencoded;

/// Decides whether a redirect query string really came from the gateway.
///
/// The check itself (a keyed hash over the query string) belongs to the
/// authentication layer; any `Fn(&str) -> bool` can stand in for it.
pub trait QueryStringVerifier {
    fn is_valid(&self, query_string: &str) -> bool;
}

impl<F> QueryStringVerifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, query_string: &str) -> bool {
        self(query_string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransparentRedirectRequest {
    id: Option<String>,
}

impl TransparentRedirectRequest {
    /// Parses and checks a redirect query string.
    ///
    /// Fails if the string cannot be decoded, if it reports a non-success
    /// HTTP status, or if `verifier` rejects it.
    pub fn parse<V: QueryStringVerifier + ?Sized>(query_string: &str, verifier: &V) -> Result<Self> {
        let query_string = query_string.trim_start_matches('?');
        let mut params = HashMap::new();
        for pair in query_string.split('&').filter(|p| !p.is_empty()) {
            if !pair.contains('=') {
                return Err(GatewayError::MalformedQueryString(format!(
                    "parameter {:?} has no value",
                    pair
                )));
            }
            params.extend(form_urlencoded::parse(pair.as_bytes()).into_owned());
        }

        let status = params
            .get("http_status")
            .ok_or_else(|| GatewayError::MalformedQueryString("missing http_status".to_string()))?;
        let status: u16 = status.parse().map_err(|_| {
            GatewayError::MalformedQueryString(format!("invalid http_status {:?}", status))
        })?;

        let message = params.get("bt_message").cloned().unwrap_or_default();
        if let Some(error) = GatewayError::from_status(status, message) {
            debug!("Redirect reported HTTP status {}", status);
            return Err(error);
        }

        if !verifier.is_valid(query_string) {
            debug!("Redirect query string failed verification");
            return Err(GatewayError::ForgedQueryString);
        }

        Ok(TransparentRedirectRequest {
            id: params.remove("id"),
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Renders the confirmation body: a bare `<id>` element, no root.
    pub fn to_xml(&self) -> String {
        match &self.id {
            Some(id) => format!("<id>{}</id>", escape(id.as_str())),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trusting(_: &str) -> bool {
        true
    }

    #[test]
    fn test_successful_redirect() {
        let request =
            TransparentRedirectRequest::parse("http_status=200&id=abc123&kind=create_customer&hash=ff", &trusting)
                .unwrap();

        assert_eq!(request.id(), Some("abc123"));
        assert_eq!(request.to_xml(), "<id>abc123</id>");
    }

    #[test]
    fn test_leading_question_mark_is_ignored() {
        let request = TransparentRedirectRequest::parse("?http_status=201&id=x", &trusting).unwrap();
        assert_eq!(request.id(), Some("x"));
    }

    #[test]
    fn test_error_status_is_mapped_with_message() {
        let err = TransparentRedirectRequest::parse(
            "http_status=401&bt_message=Invalid+credentials&id=abc",
            &trusting,
        )
        .unwrap_err();

        assert!(matches!(err, GatewayError::Authentication(m) if m == "Invalid credentials"));
    }

    #[test]
    fn test_status_is_checked_before_signature() {
        let err = TransparentRedirectRequest::parse("http_status=500&id=abc", &|_: &str| false)
            .unwrap_err();
        assert!(matches!(err, GatewayError::ServerError(_)));
    }

    #[test]
    fn test_forged_query_string() {
        let verifier = |qs: &str| qs.ends_with("hash=good");
        let err =
            TransparentRedirectRequest::parse("http_status=200&id=abc&hash=bad", &verifier).unwrap_err();
        assert!(matches!(err, GatewayError::ForgedQueryString));

        assert!(TransparentRedirectRequest::parse("http_status=200&id=abc&hash=good", &verifier).is_ok());
    }

    #[test]
    fn test_malformed_query_strings() {
        assert!(matches!(
            TransparentRedirectRequest::parse("id=abc", &trusting),
            Err(GatewayError::MalformedQueryString(_))
        ));
        assert!(matches!(
            TransparentRedirectRequest::parse("http_status=ok&id=abc", &trusting),
            Err(GatewayError::MalformedQueryString(_))
        ));
        assert!(matches!(
            TransparentRedirectRequest::parse("http_status=200&id", &trusting),
            Err(GatewayError::MalformedQueryString(_))
        ));
    }
}
