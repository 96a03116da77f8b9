//! Concurrent user store with identifier and username indexes.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::record::{NewUserRecord, UserProfile, UserRecord};
use crate::store::UserStore;

/// Both indexes over the same set of records.
///
/// `by_id` owns the records. `by_username` maps each live record's current
/// username to its identifier, one entry per record.
#[derive(Debug, Default)]
struct Indexes {
    by_id: HashMap<Uuid, UserRecord>,
    by_username: HashMap<String, Uuid>,
}

/// In-memory user store safe to share between request handlers.
///
/// Lookups and listings take the lock in shared mode and run in parallel.
/// Insert, update and delete hold it exclusively from the uniqueness check
/// through the final index write.
#[derive(Debug, Default)]
pub struct IndexedUserStore {
    indexes: RwLock<Indexes>,
}

impl IndexedUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // Indexes are only written after every check has passed, so a panic
    // while the lock is held cannot leave them inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, Indexes> {
        self.indexes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Indexes> {
        self.indexes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for IndexedUserStore {
    fn insert_user(&self, user: NewUserRecord) -> StoreResult<Uuid> {
        let mut indexes = self.write();

        if indexes.by_username.contains_key(&user.username) {
            return Err(StoreError::AlreadyExists);
        }

        let mut id = Uuid::new_v4();
        while indexes.by_id.contains_key(&id) {
            id = Uuid::new_v4();
        }

        indexes.by_username.insert(user.username.clone(), id);
        indexes.by_id.insert(id, user.with_id(id));

        Ok(id)
    }

    fn get_user_by_username(&self, username: &str) -> StoreResult<UserRecord> {
        let indexes = self.read();

        indexes
            .by_username
            .get(username)
            .and_then(|id| indexes.by_id.get(id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn get_user_by_id(&self, id: Uuid) -> StoreResult<UserProfile> {
        self.read()
            .by_id
            .get(&id)
            .map(UserProfile::from)
            .ok_or(StoreError::NotFound)
    }

    fn get_users(&self) -> Vec<UserProfile> {
        self.read().by_id.values().map(UserProfile::from).collect()
    }

    fn update_user(&self, user: UserRecord) -> StoreResult<()> {
        let mut guard = self.write();
        let Indexes { by_id, by_username } = &mut *guard;

        let current = by_id.get_mut(&user.id).ok_or(StoreError::NotFound)?;

        if current.username != user.username {
            // The record's own entry sits under its old username, so any hit
            // here belongs to someone else.
            if by_username.contains_key(&user.username) {
                return Err(StoreError::AlreadyExists);
            }
            by_username.remove(&current.username);
            by_username.insert(user.username.clone(), user.id);
        }

        *current = user;
        Ok(())
    }

    fn delete_user(&self, id: Uuid) {
        let mut indexes = self.write();

        if let Some(removed) = indexes.by_id.remove(&id) {
            indexes.by_username.remove(&removed.username);
        }
    }

    fn len(&self) -> usize {
        self.read().by_id.len()
    }
}
