//! Sale order aggregate as loaded for printing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arbor_core::{Entity, MetaFile, SaleOrderId, SaleOrderLineId, UserId};
use arbor_parties::{Address, BankDetails, Company, Partner, PrintingSettings, TradingName};
use arbor_products::{Product, Unit};

/// Sale order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleOrderStatus {
    Draft,
    Finalized,
    Confirmed,
    Completed,
    Canceled,
}

impl SaleOrderStatus {
    pub fn select_value(self) -> i32 {
        match self {
            SaleOrderStatus::Draft => 1,
            SaleOrderStatus::Finalized => 2,
            SaleOrderStatus::Confirmed => 3,
            SaleOrderStatus::Completed => 4,
            SaleOrderStatus::Canceled => 5,
        }
    }
}

/// Line kind: regular product line or section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleOrderLineType {
    Normal,
    Title,
}

impl SaleOrderLineType {
    pub fn select_value(self) -> i32 {
        match self {
            SaleOrderLineType::Normal => 0,
            SaleOrderLineType::Title => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

/// Subscription/validity duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub name: String,
}

/// Tax rate applied to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    pub name: String,
    pub value: Decimal,
}

/// Salesperson attached to an order: the user account and its partner card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salesperson {
    pub user_id: UserId,
    pub electronic_signature: Option<MetaFile>,
    pub partner: Option<Partner>,
}

/// Company-level printing switches for sale orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleConfig {
    pub display_saleman_on_printing: bool,
    pub sale_order_client_box: Option<String>,
    pub sale_order_legal_note: Option<String>,
    pub display_del_cond_on_printing: bool,
    pub display_product_code_on_printing: bool,
    pub display_tax_detail_on_printing: bool,
    pub display_estim_deliv_date_on_printing: bool,
    pub display_customer_code_on_printing: bool,
    pub display_product_picture_on_printing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrderLine {
    pub id: SaleOrderLineId,
    pub sequence: i32,
    pub line_type: SaleOrderLineType,
    pub product: Option<Product>,
    pub product_name: String,
    pub description: Option<String>,
    pub qty: Decimal,
    /// Unit price, tax excluded.
    pub price: Decimal,
    /// Unit price, tax included.
    pub in_tax_price: Decimal,
    /// Unit price after discount, in the order's pricing mode.
    pub price_discounted: Decimal,
    pub ex_tax_total: Decimal,
    pub in_tax_total: Decimal,
    pub show_total: bool,
    pub hide_unit_amounts: bool,
    pub unit: Option<Unit>,
    pub tax_line: Option<TaxLine>,
    pub estimated_delivery_date: Option<NaiveDate>,
}

impl SaleOrderLine {
    pub fn new(id: SaleOrderLineId, sequence: i32, product_name: impl Into<String>) -> Self {
        Self {
            id,
            sequence,
            line_type: SaleOrderLineType::Normal,
            product: None,
            product_name: product_name.into(),
            description: None,
            qty: Decimal::ZERO,
            price: Decimal::ZERO,
            in_tax_price: Decimal::ZERO,
            price_discounted: Decimal::ZERO,
            ex_tax_total: Decimal::ZERO,
            in_tax_total: Decimal::ZERO,
            show_total: false,
            hide_unit_amounts: false,
            unit: None,
            tax_line: None,
            estimated_delivery_date: None,
        }
    }

    /// Section header line carrying the hide-unit-amounts switch for its group.
    pub fn title(id: SaleOrderLineId, sequence: i32, label: impl Into<String>, hide_unit_amounts: bool) -> Self {
        Self {
            line_type: SaleOrderLineType::Title,
            hide_unit_amounts,
            ..Self::new(id, sequence, label)
        }
    }

    pub fn is_title(&self) -> bool {
        self.line_type == SaleOrderLineType::Title
    }
}

impl Entity for SaleOrderLine {
    type Id = SaleOrderLineId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Tax summary line of an order (one per tax rate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrderLineTax {
    pub tax_line: Option<TaxLine>,
    pub ex_tax_base: Decimal,
    pub tax_total: Decimal,
}

/// Aggregate root: SaleOrder with its lines, tax lines and printed references.
///
/// # Invariants
/// - Lines are printed in `sequence` order (see [`SaleOrder::ordered_lines`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrder {
    pub id: SaleOrderId,
    pub sale_order_seq: String,
    pub status: SaleOrderStatus,
    pub in_ati: bool,
    pub currency: Currency,
    pub company: Company,
    pub sale_config: Option<SaleConfig>,
    pub client_partner: Partner,
    pub contact_partner: Option<Partner>,
    pub salesperson: Option<Salesperson>,
    pub trading_name: Option<TradingName>,
    pub company_bank_details: Option<BankDetails>,
    pub printing_settings: Option<PrintingSettings>,
    pub duration: Option<Duration>,
    pub main_invoicing_address: Option<Address>,
    pub main_invoicing_address_str: Option<String>,
    pub delivery_address: Option<Address>,
    pub delivery_address_str: Option<String>,
    pub ex_tax_total: Decimal,
    pub tax_total: Decimal,
    pub in_tax_total: Decimal,
    pub external_reference: Option<String>,
    pub description: Option<String>,
    pub delivery_condition: Option<String>,
    pub hide_discount: bool,
    pub specific_notes: Option<String>,
    pub version_number: i32,
    pub periodicity_type_select: Option<i32>,
    pub number_of_periods: Option<i32>,
    pub subscription_text: Option<String>,
    pub proforma_comments: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub end_of_validity_date: Option<NaiveDate>,
    #[serde(default)]
    pub lines: Vec<SaleOrderLine>,
    #[serde(default)]
    pub tax_lines: Vec<SaleOrderLineTax>,
}

impl SaleOrder {
    pub fn new(
        id: SaleOrderId,
        sale_order_seq: impl Into<String>,
        company: Company,
        client_partner: Partner,
        currency: Currency,
    ) -> Self {
        Self {
            id,
            sale_order_seq: sale_order_seq.into(),
            status: SaleOrderStatus::Draft,
            in_ati: false,
            currency,
            company,
            sale_config: None,
            client_partner,
            contact_partner: None,
            salesperson: None,
            trading_name: None,
            company_bank_details: None,
            printing_settings: None,
            duration: None,
            main_invoicing_address: None,
            main_invoicing_address_str: None,
            delivery_address: None,
            delivery_address_str: None,
            ex_tax_total: Decimal::ZERO,
            tax_total: Decimal::ZERO,
            in_tax_total: Decimal::ZERO,
            external_reference: None,
            description: None,
            delivery_condition: None,
            hide_discount: false,
            specific_notes: None,
            version_number: 1,
            periodicity_type_select: None,
            number_of_periods: None,
            subscription_text: None,
            proforma_comments: None,
            creation_date: None,
            delivery_date: None,
            end_of_validity_date: None,
            lines: Vec::new(),
            tax_lines: Vec::new(),
        }
    }

    /// Lines sorted by sequence (stable for equal sequences).
    pub fn ordered_lines(&self) -> Vec<&SaleOrderLine> {
        let mut lines: Vec<&SaleOrderLine> = self.lines.iter().collect();
        lines.sort_by_key(|l| l.sequence);
        lines
    }

    /// First title line placed after `sequence`.
    pub fn next_title_line_after(&self, sequence: i32) -> Option<&SaleOrderLine> {
        self.lines
            .iter()
            .filter(|l| l.is_title() && l.sequence > sequence)
            .min_by_key(|l| l.sequence)
    }

    /// Printing settings of the order, falling back to the company's.
    pub fn effective_printing_settings(&self) -> Option<&PrintingSettings> {
        self.printing_settings
            .as_ref()
            .or(self.company.printing_settings.as_ref())
    }

    /// Logo printed on the document: trading name logo first, company logo otherwise.
    pub fn effective_logo(&self) -> Option<&MetaFile> {
        self.trading_name
            .as_ref()
            .and_then(|t| t.logo.as_ref())
            .or(self.company.logo.as_ref())
    }
}

impl Entity for SaleOrder {
    type Id = SaleOrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
