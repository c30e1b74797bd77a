//! # Gateway Requests
//!
//! Fluent request builders and a search-predicate DSL for a payment
//! gateway's XML API. Requests are assembled from optional, nested and
//! conditionally included fields, then rendered either as an XML body or as
//! a URL-encoded query string. Searches are assembled from typed predicate
//! nodes and rendered as the gateway's `<search>` document.
//!
//! Sending the request, authenticating it and interpreting the response are
//! left to the caller's HTTP layer.
//!
//! ## Design Principles
//!
//! - **Absent means omitted**: unset fields never appear in the output
//! - **By-value builders**: setters take and return `self`; nested blocks are
//!   configured with closures
//! - **Exact money**: amounts always carry two decimal places via `rust_decimal`
//! - **Deterministic output**: elements render in a fixed order
//!
//! ## Example
//!
//! ```
//! use gateway_requests::{Amount, Request, SubscriptionRequest};
//!
//! let request = SubscriptionRequest::new()
//!     .plan_id("gold")
//!     .price(Amount::from_cents(1500))
//!     .options(|o| o.start_immediately(true));
//!
//! assert_eq!(
//!     request.to_xml(),
//!     "<subscription><options><start-immediately>true</start-immediately></options>\
//!      <plan-id>gold</plan-id><price>15.00</price></subscription>"
//! );
//! assert_eq!(
//!     request.to_query_string(),
//!     "subscription%5Boptions%5D%5Bstart_immediately%5D=true&\
//!      subscription%5Bplan_id%5D=gold&subscription%5Bprice%5D=15.00"
//! );
//! ```

pub mod batch;
pub mod enums;
pub mod error;
pub mod money;
pub mod request_builder;
pub mod requests;
pub mod search;

pub use batch::{OutputFormat, RequestBatch, TransactionRecord};
pub use enums::{
    CardType, CreatedUsing, CustomerLocation, DurationUnit, EscrowStatus, GatewayRejectionReason,
    SubscriptionStatus, TransactionSource, TransactionStatus, TransactionType, VerificationStatus,
    WebhookKind,
};
pub use error::{GatewayError, Result};
pub use money::Amount;
pub use request_builder::{Element, IntoElement, Request, RequestBuilder};
pub use requests::{
    AddModificationRequest, AddressRequest, CreditCardOptionsRequest, CreditCardRequest,
    CustomerRequest, DescriptorRequest, ModificationsRequest, QueryStringVerifier,
    SettlementBatchSummaryRequest, SubscriptionOptionsRequest, SubscriptionRequest,
    SubscriptionTransactionRequest, TransactionCloneRequest, TransactionOptionsCloneRequest,
    TransactionOptionsRequest, TransactionRequest, TransparentRedirectRequest,
    UpdateModificationRequest,
};
pub use search::SearchRequest;
