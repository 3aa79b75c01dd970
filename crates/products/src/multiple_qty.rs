//! Pack-size rule: ordered quantities must be a multiple of a configured size.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One allowed pack size for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMultipleQty {
    pub name: String,
    pub multiple_qty: Decimal,
}

impl ProductMultipleQty {
    pub fn new(name: impl Into<String>, multiple_qty: Decimal) -> Self {
        Self {
            name: name.into(),
            multiple_qty,
        }
    }
}

/// Outcome of checking a quantity against the configured pack sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipleQtyCheck {
    Valid,
    /// The quantity is off but the user may keep it.
    Warning(String),
    /// The quantity must be corrected.
    Blocking(String),
}

/// True when no pack size is configured or `qty` is a multiple of at least one.
///
/// Zero-sized entries never match.
pub fn check_multiple_qty(qty: Decimal, multiples: &[ProductMultipleQty]) -> bool {
    if multiples.is_empty() {
        return true;
    }
    multiples
        .iter()
        .filter(|m| !m.multiple_qty.is_zero())
        .any(|m| (qty % m.multiple_qty).is_zero())
}

/// Human-readable list of the allowed pack sizes.
pub fn to_string_multiple_qty(multiples: &[ProductMultipleQty]) -> String {
    multiples
        .iter()
        .map(|m| format!("{} ({})", m.multiple_qty.normalize(), m.name))
        .collect::<Vec<_>>()
        .join(" or ")
}

pub fn check_multiple_qty_with_force(
    qty: Decimal,
    multiples: &[ProductMultipleQty],
    allow_to_force: bool,
) -> MultipleQtyCheck {
    if check_multiple_qty(qty, multiples) {
        return MultipleQtyCheck::Valid;
    }
    let message = format!(
        "Quantity should be a multiple of {}",
        to_string_multiple_qty(multiples)
    );
    if allow_to_force {
        MultipleQtyCheck::Warning(message)
    } else {
        MultipleQtyCheck::Blocking(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn packs() -> Vec<ProductMultipleQty> {
        vec![
            ProductMultipleQty::new("Box", Decimal::new(6, 0)),
            ProductMultipleQty::new("Pallet", Decimal::new(250, 1)),
        ]
    }

    #[test]
    fn empty_configuration_accepts_anything() {
        assert!(check_multiple_qty(Decimal::new(7, 0), &[]));
    }

    #[test]
    fn any_matching_pack_is_enough() {
        assert!(check_multiple_qty(Decimal::new(12, 0), &packs()));
        assert!(check_multiple_qty(Decimal::new(50, 0), &packs()));
        assert!(!check_multiple_qty(Decimal::new(7, 0), &packs()));
    }

    #[test]
    fn zero_pack_size_never_matches() {
        let zero = vec![ProductMultipleQty::new("Broken", Decimal::ZERO)];
        assert!(!check_multiple_qty(Decimal::new(5, 0), &zero));
    }

    #[test]
    fn listing_uses_normalized_quantities() {
        assert_eq!(to_string_multiple_qty(&packs()), "6 (Box) or 25 (Pallet)");
    }

    #[test]
    fn forcing_downgrades_to_warning() {
        let qty = Decimal::new(7, 0);
        assert_eq!(
            check_multiple_qty_with_force(qty, &packs(), true),
            MultipleQtyCheck::Warning(
                "Quantity should be a multiple of 6 (Box) or 25 (Pallet)".to_string()
            )
        );
        assert!(matches!(
            check_multiple_qty_with_force(qty, &packs(), false),
            MultipleQtyCheck::Blocking(_)
        ));
        assert_eq!(
            check_multiple_qty_with_force(Decimal::new(18, 0), &packs(), false),
            MultipleQtyCheck::Valid
        );
    }

    proptest! {
        #[test]
        fn exact_multiples_always_pass(factor in 0i64..10_000, size in 1i64..500) {
            let multiples = vec![ProductMultipleQty::new("Pack", Decimal::from(size))];
            prop_assert!(check_multiple_qty(Decimal::from(factor * size), &multiples));
        }
    }
}
