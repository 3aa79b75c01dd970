use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arbor_core::{Entity, MetaFile, PartnerId, ProductId};

use crate::multiple_qty::{
    MultipleQtyCheck, ProductMultipleQty, check_multiple_qty, check_multiple_qty_with_force,
};

/// Product nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Storable,
    Service,
}

impl ProductType {
    /// Selection value used by report templates.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Storable => "storable",
            ProductType::Service => "service",
        }
    }
}

/// Unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    /// Label shown on printed documents, when it differs from `name`.
    pub label_to_printing: Option<String>,
}

/// Customer-specific code and name for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCatalog {
    pub customer_partner: PartnerId,
    pub product_customer_code: Option<String>,
    pub product_customer_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub product_type: ProductType,
    pub picture: Option<MetaFile>,
    #[serde(default)]
    pub customer_catalogs: Vec<CustomerCatalog>,
    #[serde(default)]
    pub sale_multiple_qties: Vec<ProductMultipleQty>,
}

impl Product {
    pub fn new(id: ProductId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            product_type: ProductType::Storable,
            picture: None,
            customer_catalogs: Vec::new(),
            sale_multiple_qties: Vec::new(),
        }
    }

    /// Catalog entries that apply to the given customer, in declaration order.
    pub fn catalogs_for(&self, customer: PartnerId) -> impl Iterator<Item = &CustomerCatalog> {
        self.customer_catalogs
            .iter()
            .filter(move |c| c.customer_partner == customer)
    }

    /// Whether `qty` fits one of the product's sale pack sizes.
    pub fn check_sale_qty(&self, qty: Decimal) -> bool {
        check_multiple_qty(qty, &self.sale_multiple_qties)
    }

    pub fn check_sale_qty_with_force(&self, qty: Decimal, allow_to_force: bool) -> MultipleQtyCheck {
        check_multiple_qty_with_force(qty, &self.sale_multiple_qties, allow_to_force)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
