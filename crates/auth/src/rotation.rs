//! Password rotation rules: which users are due, and what happens to them.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use arbor_core::{GroupId, UserId};

use crate::user::User;

/// Mutation applied to every selected user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// New random password and forced change at next login.
    RegenerateAndForce,
    /// New random password, force flag left as is.
    Regenerate,
    /// Only force a change at next login.
    ForceChangeOnly,
    /// Nothing to do.
    Noop,
}

impl RotationPolicy {
    pub fn from_flags(generate_new_password: bool, force_next_login: bool) -> Self {
        match (generate_new_password, force_next_login) {
            (true, true) => Self::RegenerateAndForce,
            (true, false) => Self::Regenerate,
            (false, true) => Self::ForceChangeOnly,
            (false, false) => Self::Noop,
        }
    }

    pub fn regenerates_password(self) -> bool {
        matches!(self, Self::RegenerateAndForce | Self::Regenerate)
    }

    pub fn forces_change(self) -> bool {
        matches!(self, Self::RegenerateAndForce | Self::ForceChangeOnly)
    }
}

/// Which accounts a batch looks at before the staleness filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserScope {
    All,
    Listed { groups: Vec<GroupId>, users: Vec<UserId> },
}

impl UserScope {
    /// Membership test, staleness aside: in one of the groups or listed by id.
    pub fn includes(&self, user: &User) -> bool {
        match self {
            UserScope::All => true,
            UserScope::Listed { groups, users } => {
                user.group.is_some_and(|g| groups.contains(&g)) || users.contains(&user.id)
            }
        }
    }
}

/// Persisted configuration of a password change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChangeBatchConfig {
    pub id: i64,
    pub code: String,
    pub generate_new_random_passwords: bool,
    pub update_password_next_login: bool,
    pub all_users: bool,
    pub nb_of_day_since_last_update: u32,
    #[serde(default)]
    pub groups: Vec<GroupId>,
    #[serde(default)]
    pub users: Vec<UserId>,
}

impl PasswordChangeBatchConfig {
    pub fn policy(&self) -> RotationPolicy {
        RotationPolicy::from_flags(
            self.generate_new_random_passwords,
            self.update_password_next_login,
        )
    }

    pub fn scope(&self) -> UserScope {
        if self.all_users {
            UserScope::All
        } else {
            UserScope::Listed {
                groups: self.groups.clone(),
                users: self.users.clone(),
            }
        }
    }

    pub fn threshold(&self, today: NaiveDate) -> NaiveDate {
        staleness_threshold(today, self.nb_of_day_since_last_update)
    }
}

/// First day on which a password change still counts as recent.
pub fn staleness_threshold(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}
