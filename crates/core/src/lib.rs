//! `arbor-core`: identifiers, domain errors and the flat record type shared by
//! every business module. No infrastructure concerns.

pub mod entity;
pub mod error;
pub mod file;
pub mod id;
pub mod record;

pub use entity::Entity;
pub use error::DomainError;
pub use file::MetaFile;
pub use id::{
    CompanyId, GroupId, PartnerId, ProductId, SaleOrderId, SaleOrderLineId, UserId,
};
pub use record::{FieldValue, Record};
