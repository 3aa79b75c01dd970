//! Supply chain module.
//!
//! Shipping and payment terms attached to sale orders, and the report enricher
//! that prints them next to the base sale order fields.

pub mod order;
pub mod report;

pub use order::{PaymentCondition, PaymentMode, SaleOrderSupplyChain, SaleOrderType};
pub use report::{SupplyChainOrderSource, SupplychainReportEnricher};
