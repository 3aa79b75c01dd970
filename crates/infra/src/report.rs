//! Sale order report data, looked up by order id.

use std::sync::Arc;

use tracing::error;

use arbor_core::{Record, SaleOrderId};
use arbor_sales::{SaleOrder, SaleOrderReport};

use crate::config::AppBaseConfig;
use crate::repository::{RepositoryError, SaleOrderRepository};

/// Report error.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("sale order not found: {0}")]
    OrderNotFound(SaleOrderId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Data sources for the sale order report templates.
#[derive(Clone)]
pub struct SaleOrderReportService {
    orders: Arc<dyn SaleOrderRepository>,
    report: SaleOrderReport,
    app_base: AppBaseConfig,
}

impl SaleOrderReportService {
    pub fn new(
        orders: Arc<dyn SaleOrderRepository>,
        report: SaleOrderReport,
        app_base: AppBaseConfig,
    ) -> Self {
        Self {
            orders,
            report,
            app_base,
        }
    }

    fn load(&self, id: SaleOrderId) -> Result<SaleOrder, ReportError> {
        self.orders.find(id)?.ok_or(ReportError::OrderNotFound(id))
    }

    /// Header record of the order.
    pub fn project_order(&self, id: SaleOrderId) -> Result<Record, ReportError> {
        Ok(self.report.order_record(&self.load(id)?))
    }

    /// Header record followed by the enrichers' extra records.
    pub fn order_data(&self, id: SaleOrderId) -> Result<Vec<Record>, ReportError> {
        Ok(self.report.order_data(&self.load(id)?))
    }

    /// Order data merged into one object, as a JSON array holding that object.
    ///
    /// Serialization failures are logged and yield `None`.
    pub fn order_data_json(&self, id: SaleOrderId) -> Result<Option<String>, ReportError> {
        let mut merged = Record::new();
        for record in self.order_data(id)? {
            merged.merge(&record);
        }

        match serde_json::to_string(&[merged]) {
            Ok(json) => Ok(Some(json)),
            Err(e) => {
                error!(order_id = %id, error = %e, "failed to serialize sale order data");
                Ok(None)
            }
        }
    }

    pub fn project_lines(&self, id: SaleOrderId) -> Result<Vec<Record>, ReportError> {
        Ok(self.report.line_records(&self.load(id)?))
    }

    pub fn project_tax_lines(&self, id: SaleOrderId) -> Result<Vec<Record>, ReportError> {
        Ok(self.report.tax_line_records(&self.load(id)?))
    }

    pub fn unit_price_decimal_digits(&self) -> u32 {
        self.app_base.nb_decimal_digit_for_unit_price
    }
}

impl std::fmt::Debug for SaleOrderReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleOrderReportService")
            .field("report", &self.report)
            .field("app_base", &self.app_base)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemorySaleOrderRepository, InMemorySupplyChainStore};
    use arbor_core::{CompanyId, FieldValue, PartnerId, SaleOrderLineId};
    use arbor_parties::{Company, Partner};
    use arbor_sales::{Currency, SaleOrderLine};
    use arbor_supplychain::{SaleOrderSupplyChain, SaleOrderType, SupplychainReportEnricher};
    use rust_decimal::Decimal;

    fn order() -> SaleOrder {
        let mut order = SaleOrder::new(
            SaleOrderId::new(7),
            "SO-0007",
            Company::new(CompanyId::new(1), "Arbor SA"),
            Partner::new(PartnerId::new(3), "Acme"),
            Currency {
                code: "EUR".to_string(),
                name: "Euro".to_string(),
            },
        );
        let mut line = SaleOrderLine::new(SaleOrderLineId::new(1), 1, "Widget");
        line.price = Decimal::from(100);
        line.price_discounted = Decimal::from(90);
        line.qty = Decimal::from(2);
        order.lines = vec![line];
        order
    }

    fn service() -> SaleOrderReportService {
        let orders = Arc::new(InMemorySaleOrderRepository::new());
        orders.insert(order()).unwrap();

        let supply_chain = Arc::new(InMemorySupplyChainStore::new());
        supply_chain
            .insert(
                SaleOrderId::new(7),
                SaleOrderSupplyChain {
                    sale_order_type: SaleOrderType::Standard,
                    is_ispm_required: true,
                    ..SaleOrderSupplyChain::default()
                },
            )
            .unwrap();

        let report =
            SaleOrderReport::new().with_enricher(Arc::new(SupplychainReportEnricher::new(supply_chain)));
        SaleOrderReportService::new(orders, report, AppBaseConfig::default())
    }

    #[test]
    fn projections_are_looked_up_by_id() {
        let service = service();
        let id = SaleOrderId::new(7);

        let order = service.project_order(id).unwrap();
        assert_eq!(order.get("saleOrderSeq").and_then(FieldValue::as_text), Some("SO-0007"));

        let lines = service.project_lines(id).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].get("unitPrice"), Some(&FieldValue::Decimal(Decimal::from(100))));
        assert_eq!(
            lines[0].get("totalDiscountAmount"),
            Some(&FieldValue::Decimal(Decimal::from(-20)))
        );
        assert_eq!(lines[0].get("saleOrderTypeSelect"), Some(&FieldValue::Int(1)));

        assert!(service.project_tax_lines(id).unwrap().is_empty());
        assert_eq!(service.order_data(id).unwrap().len(), 2);
        assert_eq!(service.unit_price_decimal_digits(), 2);
    }

    #[test]
    fn json_variant_merges_records_into_one_object() {
        let json = service().order_data_json(SaleOrderId::new(7)).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["saleOrderSeq"], "SO-0007");
        assert_eq!(array[0]["is_ispm_required"], true);
        assert_eq!(array[0]["sale_order_type_select"], 1);
    }

    #[test]
    fn repeated_projection_is_byte_identical() {
        let service = service();
        let id = SaleOrderId::new(7);
        assert_eq!(
            service.order_data_json(id).unwrap(),
            service.order_data_json(id).unwrap()
        );
    }

    #[test]
    fn unknown_order_is_an_error() {
        let err = service().project_lines(SaleOrderId::new(99)).unwrap_err();
        assert!(matches!(err, ReportError::OrderNotFound(id) if id == SaleOrderId::new(99)));
    }
}
