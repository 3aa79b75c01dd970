//! Login sessions, as far as password rotation is concerned.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDateTime;

use arbor_core::UserId;

use crate::repository::RepositoryError;

/// Sessions whose login date must be moved when their owner's password changes,
/// so the operator running a rotation is not logged out.
pub trait SessionStore: Send + Sync {
    fn refresh_login_date(&self, user: UserId, at: NaiveDateTime) -> Result<(), RepositoryError>;

    fn login_date(&self, user: UserId) -> Result<Option<NaiveDateTime>, RepositoryError>;
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    login_dates: RwLock<HashMap<UserId, NaiveDateTime>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn refresh_login_date(&self, user: UserId, at: NaiveDateTime) -> Result<(), RepositoryError> {
        self.login_dates
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?
            .insert(user, at);
        Ok(())
    }

    fn login_date(&self, user: UserId) -> Result<Option<NaiveDateTime>, RepositoryError> {
        Ok(self
            .login_dates
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?
            .get(&user)
            .copied())
    }
}
