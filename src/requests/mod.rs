//! Fluent request objects, one per gateway entity.
//!
//! Every request is a by-value builder: setters take `self` and return it,
//! nested blocks are configured through closures. All of them implement
//! [`Request`](crate::request_builder::Request) and can be rendered as XML or
//! as a query string.

pub mod address;
pub mod credit_card;
pub mod customer;
pub mod descriptor;
pub mod settlement;
pub mod subscription;
pub mod transaction;
pub mod transparent_redirect;

pub use address::AddressRequest;
pub use credit_card::{CreditCardOptionsRequest, CreditCardRequest};
pub use customer::CustomerRequest;
pub use descriptor::DescriptorRequest;
pub use settlement::SettlementBatchSummaryRequest;
pub use subscription::{
    AddModificationRequest, ModificationsRequest, SubscriptionOptionsRequest, SubscriptionRequest,
    SubscriptionTransactionRequest, UpdateModificationRequest,
};
pub use transaction::{
    TransactionCloneRequest, TransactionOptionsCloneRequest, TransactionOptionsRequest,
    TransactionRequest,
};
pub use transparent_redirect::{QueryStringVerifier, TransparentRedirectRequest};
