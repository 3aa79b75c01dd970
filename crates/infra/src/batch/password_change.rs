//! Password change batch: rotate passwords of accounts not changed recently.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use arbor_auth::{PasswordChangeBatchConfig, RotationPolicy, User};
use arbor_core::UserId;

use crate::password::{PasswordGenerator, PasswordHasher};
use crate::repository::{PasswordChangeBatchRepository, UserRepository};
use crate::session::SessionStore;

use super::runner::{BatchError, BatchProcess, BatchRunner};
use super::types::Batch;

pub struct PasswordChangeBatchService {
    users: Arc<dyn UserRepository>,
    configs: Arc<dyn PasswordChangeBatchRepository>,
    sessions: Arc<dyn SessionStore>,
    hasher: Arc<dyn PasswordHasher>,
    generator: Arc<dyn PasswordGenerator>,
    runner: BatchRunner,
}

impl PasswordChangeBatchService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        configs: Arc<dyn PasswordChangeBatchRepository>,
        sessions: Arc<dyn SessionStore>,
        hasher: Arc<dyn PasswordHasher>,
        generator: Arc<dyn PasswordGenerator>,
        runner: BatchRunner,
    ) -> Self {
        Self {
            users,
            configs,
            sessions,
            hasher,
            generator,
            runner,
        }
    }

    /// Run the configuration `config_id` on behalf of `operator`.
    ///
    /// Fails only when the configuration is unknown or the batch record cannot
    /// be stored; processing errors end up on the returned batch.
    pub fn run(
        &self,
        config_id: i64,
        operator: Option<UserId>,
        now: NaiveDateTime,
    ) -> Result<Batch, BatchError> {
        let config = self
            .configs
            .find(config_id)?
            .ok_or(BatchError::ConfigNotFound(config_id))?;

        let process = PasswordChangeProcess {
            service: self,
            config: &config,
            operator,
            now,
        };
        self.runner.run(&config.code, &process)
    }

    /// Stale users in the configured scope, without duplicates, ordered by id.
    pub fn select_users(
        &self,
        config: &PasswordChangeBatchConfig,
        now: NaiveDateTime,
    ) -> Result<Vec<User>, BatchError> {
        let threshold = config.threshold(now.date());
        let stale = self.users.find_stale(threshold)?;

        let scope = config.scope();
        let selected: BTreeMap<UserId, User> = stale
            .into_iter()
            .filter(|u| u.is_password_stale(threshold) && scope.includes(u))
            .map(|u| (u.id, u))
            .collect();

        debug!(%threshold, selected = selected.len(), "selected users for password change");
        Ok(selected.into_values().collect())
    }

    /// Apply `policy` to `users` and commit them in one call.
    ///
    /// Nothing is written when generating or hashing any password fails.
    /// Returns the committed users, with their new plaintext passwords in
    /// `transient_password`.
    pub fn apply_policy(
        &self,
        users: Vec<User>,
        policy: RotationPolicy,
        now: NaiveDateTime,
        operator: Option<UserId>,
    ) -> Result<Vec<User>, BatchError> {
        if policy == RotationPolicy::Noop {
            return Ok(Vec::new());
        }

        let staged = users
            .into_iter()
            .map(|mut user| -> Result<User, BatchError> {
                if policy.regenerates_password() {
                    let plaintext = self.generator.generate()?;
                    let hash = self.hasher.hash(&plaintext)?;
                    user.rotate_password(plaintext, hash, now);
                }
                if policy.forces_change() {
                    user.require_password_change();
                }
                Ok(user)
            })
            .collect::<Result<Vec<User>, BatchError>>()?;

        let committed = self.users.save_all(&staged)?;
        info!(?policy, committed, "password change phase committed");

        if policy.regenerates_password() {
            if let Some(operator) = operator.filter(|op| staged.iter().any(|u| u.id == *op)) {
                self.sessions.refresh_login_date(operator, now)?;
                debug!(%operator, "refreshed operator login date");
            }
        }

        Ok(staged)
    }
}

impl std::fmt::Debug for PasswordChangeBatchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChangeBatchService")
            .field("runner", &self.runner)
            .finish_non_exhaustive()
    }
}

struct PasswordChangeProcess<'a> {
    service: &'a PasswordChangeBatchService,
    config: &'a PasswordChangeBatchConfig,
    operator: Option<UserId>,
    now: NaiveDateTime,
}

impl BatchProcess for PasswordChangeProcess<'_> {
    fn process(&self, batch: &mut Batch) -> Result<(), BatchError> {
        let users = self.service.select_users(self.config, self.now)?;
        let committed =
            self.service
                .apply_policy(users, self.config.policy(), self.now, self.operator)?;
        batch.increment_done_by(committed.len() as u64);
        Ok(())
    }

    fn stop(&self, batch: &mut Batch) {
        batch.add_comment(format!("{} Users processed", batch.done));
    }
}
