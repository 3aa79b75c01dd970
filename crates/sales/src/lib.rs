//! Sales domain module: sale orders and their printed representation.
//!
//! This crate is pure: it receives fully loaded orders and turns them into flat
//! records for report templates (no IO, no HTTP, no storage).

pub mod order;
pub mod report;

#[cfg(test)]
pub(crate) mod fixtures;

pub use order::{
    Currency, Duration, SaleConfig, SaleOrder, SaleOrderLine, SaleOrderLineTax, SaleOrderLineType,
    SaleOrderStatus, Salesperson, TaxLine,
};
pub use report::{ReportEnricher, SaleOrderReport};
