//! Products domain module.
//!
//! Product master data as read by sales documents, plus the pack-size rule
//! applied when quantities are entered. Pure domain logic (no IO, no storage).

pub mod multiple_qty;
pub mod product;

pub use multiple_qty::{
    MultipleQtyCheck, ProductMultipleQty, check_multiple_qty, check_multiple_qty_with_force,
    to_string_multiple_qty,
};
pub use product::{CustomerCatalog, Product, ProductType, Unit};
