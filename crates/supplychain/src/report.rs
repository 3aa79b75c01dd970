//! Supply chain fields on sale order reports.

use std::sync::Arc;

use arbor_core::{Record, SaleOrderId};
use arbor_sales::{ReportEnricher, SaleOrder, SaleOrderLineTax};

use crate::order::SaleOrderSupplyChain;

/// Read access to the supply chain part of sale orders.
pub trait SupplyChainOrderSource: Send + Sync {
    fn supply_chain(&self, order_id: SaleOrderId) -> Option<SaleOrderSupplyChain>;
}

/// Adds order type, ISPM flag, shipment date and payment terms to sale order
/// reports.
#[derive(Clone)]
pub struct SupplychainReportEnricher {
    source: Arc<dyn SupplyChainOrderSource>,
}

impl SupplychainReportEnricher {
    pub fn new(source: Arc<dyn SupplyChainOrderSource>) -> Self {
        Self { source }
    }

    fn put_order_type(&self, order: &SaleOrder, record: &mut Record) {
        if let Some(details) = self.source.supply_chain(order.id) {
            record.put("saleOrderTypeSelect", details.sale_order_type.select_value());
        }
    }
}

impl ReportEnricher for SupplychainReportEnricher {
    fn enrich_line_order_fields(&self, order: &SaleOrder, record: &mut Record) {
        self.put_order_type(order, record);
    }

    fn enrich_tax_line(&self, order: &SaleOrder, _tax: &SaleOrderLineTax, record: &mut Record) {
        self.put_order_type(order, record);
    }

    /// Always one record, empty when the order has no supply chain details.
    fn extra_order_records(&self, order: &SaleOrder) -> Vec<Record> {
        let mut r = Record::new();
        if let Some(details) = self.source.supply_chain(order.id) {
            r.put("sale_order_type_select", details.sale_order_type.select_value());
            r.put("is_ispm_required", details.is_ispm_required);
            r.put_opt("ShipmentDate", details.shipment_date);
            r.put_opt(
                "PaymentCondName",
                details.payment_condition.as_ref().map(|c| c.name.as_str()),
            );
            r.put_opt(
                "PaymentMode",
                details.payment_mode.as_ref().map(|m| m.name.as_str()),
            );
        }
        vec![r]
    }
}

impl core::fmt::Debug for SupplychainReportEnricher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SupplychainReportEnricher").finish_non_exhaustive()
    }
}
