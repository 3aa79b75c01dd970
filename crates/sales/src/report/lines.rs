//! Order line records.

use rust_decimal::Decimal;

use arbor_core::Record;
use arbor_products::CustomerCatalog;

use crate::order::{SaleOrder, SaleOrderLine};

/// Order-level fields repeated on every line record.
pub fn line_order_fields(order: &SaleOrder) -> Record {
    let mut r = Record::new();
    r.put("inAti", order.in_ati);
    r.put("currencyCode", &order.currency.code);
    r
}

/// Unit price shown on the line, in the order's pricing mode.
pub fn unit_price(order: &SaleOrder, line: &SaleOrderLine) -> Decimal {
    if order.in_ati {
        line.in_tax_price
    } else {
        line.price
    }
}

/// Discount over the whole line quantity; negative when the line is discounted.
///
/// `None` when the amount does not fit in a [`Decimal`].
pub fn total_discount_amount(line: &SaleOrderLine, unit_price: Decimal) -> Option<Decimal> {
    line.price_discounted
        .checked_sub(unit_price)?
        .checked_mul(line.qty)
}

/// Hide-unit-amounts switch inherited from the title line that follows `line`.
///
/// Title lines do not inherit anything.
pub fn pack_hide_unit_amounts(order: &SaleOrder, line: &SaleOrderLine) -> Option<bool> {
    if line.is_title() {
        return None;
    }
    order
        .next_title_line_after(line.sequence)
        .map(|title| title.hide_unit_amounts)
}

/// Fields of a single line, without order-level fields.
pub fn line_fields(order: &SaleOrder, line: &SaleOrderLine) -> Record {
    let mut r = Record::new();

    r.put("id", line.id.get());
    r.put_opt("description", line.description.as_deref());
    r.put("quantity", line.qty);
    r.put("productName", &line.product_name);
    r.put("exTaxTotal", line.ex_tax_total);
    r.put("inTaxTotal", line.in_tax_total);
    r.put("sequence", line.sequence);
    r.put("priceDiscounted", line.price_discounted);
    r.put("showTotal", line.show_total);
    r.put("hideUnitAmounts", line.hide_unit_amounts);

    r.put_opt("estimatedDeliveryDate", line.estimated_delivery_date);
    if let Some(unit) = &line.unit {
        r.put_opt("unitCode", unit.label_to_printing.as_deref());
    }
    r.put_opt("taxLine", line.tax_line.as_ref().map(|t| t.value));

    let unit_price = unit_price(order, line);
    r.put("unitPrice", unit_price);
    match total_discount_amount(line, unit_price) {
        Some(amount) => r.put("totalDiscountAmount", amount),
        None => tracing::warn!(
            line_id = line.id.get(),
            "total discount amount overflows, left out of the record"
        ),
    }

    r.put("isTitleLine", line.is_title());
    r.put_opt("packHideUnitAmounts", pack_hide_unit_amounts(order, line));

    if let Some(product) = &line.product {
        r.put("productCode", &product.code);
        r.put("productTypeSelect", product.product_type.as_str());
        r.put_opt(
            "productPicture",
            product.picture.as_ref().map(|p| p.file_path.as_str()),
        );
    }

    r
}

fn catalog_fields(catalog: &CustomerCatalog) -> Record {
    let mut r = Record::new();
    r.put_opt("productCustomerCode", catalog.product_customer_code.as_deref());
    r.put_opt("productCustomerName", catalog.product_customer_name.as_deref());
    r
}

/// Records for every line in sequence order.
///
/// A line whose product has catalog entries for the order's client yields one
/// record per entry; any other line yields a single record. An order without
/// lines yields one record holding only `order_fields`.
pub fn line_records(order: &SaleOrder, order_fields: &Record) -> Vec<Record> {
    if order.lines.is_empty() {
        return vec![order_fields.clone()];
    }

    let mut records = Vec::with_capacity(order.lines.len());
    for line in order.ordered_lines() {
        let fields = line_fields(order, line);

        let catalogs: Vec<&CustomerCatalog> = line
            .product
            .as_ref()
            .map(|p| p.catalogs_for(order.client_partner.id).collect())
            .unwrap_or_default();

        if catalogs.is_empty() {
            let mut record = fields;
            record.merge(order_fields);
            records.push(record);
            continue;
        }

        for catalog in catalogs {
            let mut record = catalog_fields(catalog);
            record.merge(&fields);
            record.merge(order_fields);
            records.push(record);
        }
    }
    records
}
