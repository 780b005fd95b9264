//! A REST client for the payment aggregator's API.
//!
//! The aggregator fronts the individual mobile-money and card providers (FedaPay, Semoa, CinetPay, Bizao, PayGate)
//! behind one charge/refund API. This crate only speaks the aggregator's wire format; it knows nothing about the
//! engine's transaction lifecycle.
mod api;
mod config;
mod data_objects;
mod error;

pub use api::AggregatorApi;
pub use config::AggregatorConfig;
pub use data_objects::{ChargeRequest, ChargeResponse, ChargeStatus, RefundRequest, RefundResult};
pub use error::AggregatorApiError;
