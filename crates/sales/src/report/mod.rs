//! Report data projection for sale orders.
//!
//! Each projection walks the order graph and emits flat [`Record`]s where a key
//! is present only when its source value is. Projections are pure: projecting
//! the same order twice yields identical records.
//!
//! Module-specific fields are layered on by [`ReportEnricher`]s, applied in
//! registration order after the base fields are built.

use std::sync::Arc;

use arbor_core::Record;

use crate::order::{SaleOrder, SaleOrderLineTax};

pub mod lines;
pub mod order;
pub mod tax;

/// Hook points for modules that add fields to sale order reports.
///
/// Every hook defaults to a no-op so implementors only override what they need.
pub trait ReportEnricher: Send + Sync {
    /// Order-level fields merged into every line record.
    fn enrich_line_order_fields(&self, _order: &SaleOrder, _record: &mut Record) {}

    /// Fields of one tax summary line.
    fn enrich_tax_line(&self, _order: &SaleOrder, _tax: &SaleOrderLineTax, _record: &mut Record) {}

    /// Records appended after the order header record.
    fn extra_order_records(&self, _order: &SaleOrder) -> Vec<Record> {
        Vec::new()
    }
}

/// Base projection plus an ordered chain of enrichers.
#[derive(Clone, Default)]
pub struct SaleOrderReport {
    enrichers: Vec<Arc<dyn ReportEnricher>>,
}

impl SaleOrderReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enricher(mut self, enricher: Arc<dyn ReportEnricher>) -> Self {
        self.enrichers.push(enricher);
        self
    }

    pub fn enricher_count(&self) -> usize {
        self.enrichers.len()
    }

    /// Header record of the order.
    pub fn order_record(&self, order: &SaleOrder) -> Record {
        order::order_record(order)
    }

    /// Header record followed by every enricher's extra records.
    pub fn order_data(&self, order: &SaleOrder) -> Vec<Record> {
        let mut records = vec![self.order_record(order)];
        for enricher in &self.enrichers {
            records.extend(enricher.extra_order_records(order));
        }
        tracing::debug!(order_id = %order.id, records = records.len(), "projected order data");
        records
    }

    /// One record per printed line (or per matching catalog entry).
    pub fn line_records(&self, order: &SaleOrder) -> Vec<Record> {
        let mut order_fields = lines::line_order_fields(order);
        for enricher in &self.enrichers {
            enricher.enrich_line_order_fields(order, &mut order_fields);
        }
        let records = lines::line_records(order, &order_fields);
        tracing::debug!(order_id = %order.id, records = records.len(), "projected order lines");
        records
    }

    /// One record per tax summary line.
    pub fn tax_line_records(&self, order: &SaleOrder) -> Vec<Record> {
        order
            .tax_lines
            .iter()
            .map(|tax| {
                let mut record = tax::tax_line_record(tax);
                for enricher in &self.enrichers {
                    enricher.enrich_tax_line(order, tax, &mut record);
                }
                record
            })
            .collect()
    }
}

impl core::fmt::Debug for SaleOrderReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SaleOrderReport")
            .field("enrichers", &self.enrichers.len())
            .finish()
    }
}
