//! Test builders for sale orders.

use rust_decimal::Decimal;

use arbor_core::{CompanyId, PartnerId, ProductId, SaleOrderId, SaleOrderLineId};
use arbor_parties::{Company, LogoPosition, Partner, PrintingSettings};
use arbor_products::Product;

use crate::order::{Currency, SaleOrder, SaleOrderLine, SaleOrderLineTax, TaxLine};

pub fn order() -> SaleOrder {
    SaleOrder::new(
        SaleOrderId::new(1),
        "SO-0001",
        Company::new(CompanyId::new(1), "Arbor SA"),
        Partner::new(PartnerId::new(10), "Acme"),
        Currency {
            code: "EUR".to_string(),
            name: "Euro".to_string(),
        },
    )
}

pub fn order_with_lines() -> SaleOrder {
    let vat = TaxLine {
        name: "VAT 20%".to_string(),
        value: Decimal::new(20, 2),
    };

    let mut widget = SaleOrderLine::new(SaleOrderLineId::new(1), 10, "Widget");
    widget.product = Some(Product::new(ProductId::new(1), "W-1", "Widget"));
    widget.qty = Decimal::from(2);
    widget.price = Decimal::from(100);
    widget.in_tax_price = Decimal::from(120);
    widget.price_discounted = Decimal::from(90);
    widget.ex_tax_total = Decimal::from(180);
    widget.in_tax_total = Decimal::from(216);
    widget.tax_line = Some(vat.clone());

    let mut order = order();
    order.lines = vec![
        SaleOrderLine::title(SaleOrderLineId::new(2), 20, "Options", false),
        widget,
    ];
    order.tax_lines = vec![SaleOrderLineTax {
        tax_line: Some(vat),
        ex_tax_base: Decimal::from(180),
        tax_total: Decimal::from(36),
    }];
    order.ex_tax_total = Decimal::from(180);
    order.tax_total = Decimal::from(36);
    order.in_tax_total = Decimal::from(216);
    order
}

pub fn printing_settings(name: &str) -> PrintingSettings {
    PrintingSettings {
        name: name.to_string(),
        pdf_header: Some(format!("Header {name}")),
        pdf_footer: None,
        logo_position: LogoPosition::Left,
    }
}
