//! Storage seams for the services in this crate.
//!
//! Each repository is a trait so hosts can plug their own persistence; the
//! in-memory implementations back tests and the dev server.

use chrono::NaiveDate;

use arbor_auth::{PasswordChangeBatchConfig, User};
use arbor_core::{SaleOrderId, UserId};
use arbor_sales::SaleOrder;

pub mod in_memory;

pub use in_memory::{
    InMemoryPasswordChangeBatchRepository, InMemorySaleOrderRepository, InMemorySupplyChainStore,
    InMemoryUserRepository,
};

/// Repository error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

/// User accounts.
pub trait UserRepository: Send + Sync {
    fn find(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Users whose password was never set or last changed before `threshold`,
    /// ordered by id.
    fn find_stale(&self, threshold: NaiveDate) -> Result<Vec<User>, RepositoryError>;

    /// Persist every user or none of them.
    ///
    /// Fails with `NotFound` when one of the users is unknown; nothing is
    /// written in that case.
    fn save_all(&self, users: &[User]) -> Result<usize, RepositoryError>;
}

/// Password change batch configurations.
pub trait PasswordChangeBatchRepository: Send + Sync {
    fn find(&self, id: i64) -> Result<Option<PasswordChangeBatchConfig>, RepositoryError>;
}

/// Sale orders loaded with the whole graph needed for printing.
pub trait SaleOrderRepository: Send + Sync {
    fn find(&self, id: SaleOrderId) -> Result<Option<SaleOrder>, RepositoryError>;
}
