//! Store capability trait.

use uuid::Uuid;

use crate::error::StoreResult;
use crate::record::{NewUserRecord, UserProfile, UserRecord};

/// Capability interface over a user store.
///
/// Every value returned is an independent copy; mutating it never affects
/// stored state. Each call is its own unit of atomicity.
pub trait UserStore: Send + Sync {
    /// Insert a record and return its freshly assigned identifier.
    ///
    /// Fails with `AlreadyExists` if a live record holds the same username.
    fn insert_user(&self, user: NewUserRecord) -> StoreResult<Uuid>;

    /// Exact-match lookup by username, including the password hash.
    fn get_user_by_username(&self, username: &str) -> StoreResult<UserRecord>;

    /// Exact-match lookup by identifier.
    fn get_user_by_id(&self, id: Uuid) -> StoreResult<UserProfile>;

    /// Snapshot of all live records, in no particular order.
    fn get_users(&self) -> Vec<UserProfile>;

    /// Replace email, username, password and admin flag of an existing record.
    ///
    /// Fails with `NotFound` for an unknown identifier and with `AlreadyExists`
    /// if the new username belongs to a different live record.
    fn update_user(&self, user: UserRecord) -> StoreResult<()>;

    /// Remove a record. Unknown identifiers are ignored.
    fn delete_user(&self, id: Uuid);

    /// Number of live records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
