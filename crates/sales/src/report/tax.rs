//! Tax summary records.

use arbor_core::Record;

use crate::order::SaleOrderLineTax;

pub fn tax_line_record(tax: &SaleOrderLineTax) -> Record {
    let mut r = Record::new();
    r.put("exTaxBase", tax.ex_tax_base);
    r.put("taxTotal", tax.tax_total);
    r.put_opt("value", tax.tax_line.as_ref().map(|t| t.value));
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::TaxLine;
    use arbor_core::FieldValue;
    use rust_decimal::Decimal;

    #[test]
    fn tax_record_carries_base_total_and_rate() {
        let tax = SaleOrderLineTax {
            tax_line: Some(TaxLine {
                name: "VAT 20%".to_string(),
                value: Decimal::new(20, 2),
            }),
            ex_tax_base: Decimal::new(18000, 2),
            tax_total: Decimal::new(3600, 2),
        };

        let r = tax_line_record(&tax);
        assert_eq!(r.get("exTaxBase"), Some(&FieldValue::Decimal(Decimal::new(18000, 2))));
        assert_eq!(r.get("taxTotal"), Some(&FieldValue::Decimal(Decimal::new(3600, 2))));
        assert_eq!(r.get("value"), Some(&FieldValue::Decimal(Decimal::new(20, 2))));
    }

    #[test]
    fn missing_tax_rate_omits_value() {
        let tax = SaleOrderLineTax {
            tax_line: None,
            ex_tax_base: Decimal::ZERO,
            tax_total: Decimal::ZERO,
        };

        let r = tax_line_record(&tax);
        assert_eq!(r.len(), 2);
        assert!(!r.contains_key("value"));
    }
}
