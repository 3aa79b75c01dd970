use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Commercial flow of a sale order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleOrderType {
    Standard,
    Subscription,
}

impl SaleOrderType {
    pub fn select_value(self) -> i32 {
        match self {
            SaleOrderType::Standard => 1,
            SaleOrderType::Subscription => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCondition {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMode {
    pub code: String,
    pub name: String,
}

/// Supply chain fields of a sale order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrderSupplyChain {
    pub sale_order_type: SaleOrderType,
    /// ISPM 15 treated packaging required for export.
    pub is_ispm_required: bool,
    pub shipment_date: Option<NaiveDate>,
    pub payment_condition: Option<PaymentCondition>,
    pub payment_mode: Option<PaymentMode>,
}

impl Default for SaleOrderSupplyChain {
    fn default() -> Self {
        Self {
            sale_order_type: SaleOrderType::Standard,
            is_ispm_required: false,
            shipment_date: None,
            payment_condition: None,
            payment_mode: None,
        }
    }
}
