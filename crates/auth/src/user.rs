//! User account as seen by password management.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use arbor_core::{Entity, GroupId, UserId};

/// User account.
///
/// # Invariants
/// - `password` always holds a hash, never plaintext.
/// - `transient_password` is only set right after a rotation, for delivery to
///   the user; it is not meant to be stored.
/// - `password_updated_on` is `None` until the first change, then the time of
///   the latest change.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub code: String,
    pub name: String,
    pub group: Option<GroupId>,
    pub password: String,
    #[serde(skip)]
    pub transient_password: Option<String>,
    pub password_updated_on: Option<NaiveDateTime>,
    pub force_password_change: bool,
}

impl User {
    pub fn new(id: UserId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            group: None,
            password: String::new(),
            transient_password: None,
            password_updated_on: None,
            force_password_change: false,
        }
    }

    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_password(mut self, hash: impl Into<String>, updated_on: Option<NaiveDateTime>) -> Self {
        self.password = hash.into();
        self.password_updated_on = updated_on;
        self
    }

    /// True when the password was never changed or last changed strictly
    /// before `threshold`.
    pub fn is_password_stale(&self, threshold: NaiveDate) -> bool {
        match self.password_updated_on {
            None => true,
            Some(at) => at.date() < threshold,
        }
    }

    /// Replace the password with a freshly generated one.
    pub fn rotate_password(&mut self, plaintext: String, hash: String, at: NaiveDateTime) {
        self.transient_password = Some(plaintext);
        self.password = hash;
        self.password_updated_on = Some(at);
    }

    /// Require the user to pick a new password at next login.
    pub fn require_password_change(&mut self) {
        self.force_password_change = true;
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Debug for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("code", &self.code)
            .field("group", &self.group)
            .field("password_updated_on", &self.password_updated_on)
            .field("force_password_change", &self.force_password_change)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn never_changed_password_is_stale() {
        let user = User::new(UserId::new(1), "alice", "Alice");
        assert!(user.is_password_stale(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()));
    }

    #[test]
    fn staleness_compares_dates_only() {
        let user = User::new(UserId::new(1), "bob", "Bob").with_password("h", Some(at(2024, 5, 10)));

        assert!(user.is_password_stale(NaiveDate::from_ymd_opt(2024, 5, 11).unwrap()));
        assert!(!user.is_password_stale(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()));
        assert!(!user.is_password_stale(NaiveDate::from_ymd_opt(2024, 5, 9).unwrap()));
    }

    #[test]
    fn rotate_password_stamps_time_and_keeps_force_flag() {
        let mut user = User::new(UserId::new(7), "carol", "Carol").with_password("old", None);
        user.rotate_password("s3cret".to_string(), "new-hash".to_string(), at(2024, 6, 1));

        assert_eq!(user.password, "new-hash");
        assert_eq!(user.transient_password.as_deref(), Some("s3cret"));
        assert_eq!(user.password_updated_on, Some(at(2024, 6, 1)));
        assert!(!user.force_password_change);
    }

    #[test]
    fn debug_output_hides_password_material() {
        let mut user = User::new(UserId::new(3), "dave", "Dave");
        user.rotate_password("plain".to_string(), "hash".to_string(), at(2024, 1, 1));

        let rendered = format!("{user:?}");
        assert!(!rendered.contains("plain"));
        assert!(!rendered.contains("hash"));
    }
}
