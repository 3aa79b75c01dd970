//! In-memory repositories for tests/dev.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use arbor_auth::{PasswordChangeBatchConfig, User};
use arbor_core::{Entity, SaleOrderId, UserId};
use arbor_sales::SaleOrder;
use arbor_supplychain::{SaleOrderSupplyChain, SupplyChainOrderSource};

use super::{
    PasswordChangeBatchRepository, RepositoryError, SaleOrderRepository, UserRepository,
};

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read()
        .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write()
        .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
}

/// User accounts keyed by id.
///
/// Transient passwords are dropped on save, like any non-persisted field.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Insert or replace a user.
    pub fn insert(&self, mut user: User) -> Result<(), RepositoryError> {
        user.transient_password = None;
        write(&self.users)?.insert(user.id(), user);
        Ok(())
    }

    pub fn all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(read(&self.users)?.values().cloned().collect())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(read(&self.users)?.get(&id).cloned())
    }

    fn find_stale(&self, threshold: NaiveDate) -> Result<Vec<User>, RepositoryError> {
        Ok(read(&self.users)?
            .values()
            .filter(|u| u.is_password_stale(threshold))
            .cloned()
            .collect())
    }

    fn save_all(&self, users: &[User]) -> Result<usize, RepositoryError> {
        let mut rows = write(&self.users)?;
        if let Some(missing) = users.iter().find(|u| !rows.contains_key(&u.id)) {
            return Err(RepositoryError::not_found("user", missing.id.get()));
        }
        for user in users {
            let mut stored = user.clone();
            stored.transient_password = None;
            rows.insert(stored.id(), stored);
        }
        Ok(users.len())
    }
}

/// Password change batch configurations keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryPasswordChangeBatchRepository {
    configs: RwLock<HashMap<i64, PasswordChangeBatchConfig>>,
}

impl InMemoryPasswordChangeBatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, config: PasswordChangeBatchConfig) -> Result<(), RepositoryError> {
        write(&self.configs)?.insert(config.id, config);
        Ok(())
    }
}

impl PasswordChangeBatchRepository for InMemoryPasswordChangeBatchRepository {
    fn find(&self, id: i64) -> Result<Option<PasswordChangeBatchConfig>, RepositoryError> {
        Ok(read(&self.configs)?.get(&id).cloned())
    }
}

/// Fully loaded sale orders keyed by id.
#[derive(Debug, Default)]
pub struct InMemorySaleOrderRepository {
    orders: RwLock<HashMap<SaleOrderId, SaleOrder>>,
}

impl InMemorySaleOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, order: SaleOrder) -> Result<(), RepositoryError> {
        write(&self.orders)?.insert(order.id(), order);
        Ok(())
    }
}

impl SaleOrderRepository for InMemorySaleOrderRepository {
    fn find(&self, id: SaleOrderId) -> Result<Option<SaleOrder>, RepositoryError> {
        Ok(read(&self.orders)?.get(&id).cloned())
    }
}

/// Supply chain details of sale orders keyed by order id.
#[derive(Debug, Default)]
pub struct InMemorySupplyChainStore {
    details: RwLock<HashMap<SaleOrderId, SaleOrderSupplyChain>>,
}

impl InMemorySupplyChainStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &self,
        order_id: SaleOrderId,
        details: SaleOrderSupplyChain,
    ) -> Result<(), RepositoryError> {
        write(&self.details)?.insert(order_id, details);
        Ok(())
    }
}

impl SupplyChainOrderSource for InMemorySupplyChainStore {
    fn supply_chain(&self, order_id: SaleOrderId) -> Option<SaleOrderSupplyChain> {
        match self.details.read() {
            Ok(details) => details.get(&order_id).cloned(),
            Err(_) => {
                tracing::warn!(%order_id, "supply chain store lock poisoned");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(date: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} 08:00:00"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn find_stale_filters_and_orders_by_id() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new(UserId::new(3), "c", "C")).unwrap();
        repo.insert(User::new(UserId::new(1), "a", "A").with_password("h", Some(at("2024-01-01"))))
            .unwrap();
        repo.insert(User::new(UserId::new(2), "b", "B").with_password("h", Some(at("2024-03-01"))))
            .unwrap();

        let threshold = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let ids: Vec<_> = repo
            .find_stale(threshold)
            .unwrap()
            .into_iter()
            .map(|u| u.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn save_all_is_all_or_nothing() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new(UserId::new(1), "a", "A")).unwrap();

        let mut known = User::new(UserId::new(1), "a", "A");
        known.force_password_change = true;
        let unknown = User::new(UserId::new(9), "z", "Z");

        let err = repo.save_all(&[known.clone(), unknown]).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { id: 9, .. }));
        assert!(!repo.find(UserId::new(1)).unwrap().unwrap().force_password_change);

        assert_eq!(repo.save_all(&[known]).unwrap(), 1);
        assert!(repo.find(UserId::new(1)).unwrap().unwrap().force_password_change);
    }

    #[test]
    fn transient_password_is_not_stored() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new(UserId::new(1), "a", "A")).unwrap();

        let mut user = User::new(UserId::new(1), "a", "A");
        user.rotate_password("plain".to_string(), "hash".to_string(), at("2024-03-01"));
        repo.save_all(&[user]).unwrap();

        let stored = repo.find(UserId::new(1)).unwrap().unwrap();
        assert_eq!(stored.password, "hash");
        assert!(stored.transient_password.is_none());
    }
}
