//! Single-map store for tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::record::{NewUserRecord, UserProfile, UserRecord};
use crate::store::UserStore;

/// Minimal `UserStore` keyed by identifier only.
///
/// Username checks scan every record and all calls are serialized behind one
/// mutex. Good enough for service tests; use `IndexedUserStore` elsewhere.
#[derive(Debug, Default)]
pub struct FakeUserStore {
    users: Mutex<HashMap<Uuid, UserRecord>>,
}

impl FakeUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> MutexGuard<'_, HashMap<Uuid, UserRecord>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for FakeUserStore {
    fn insert_user(&self, user: NewUserRecord) -> StoreResult<Uuid> {
        let mut users = self.users();
        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::AlreadyExists);
        }

        let id = Uuid::new_v4();
        users.insert(id, user.with_id(id));
        Ok(id)
    }

    fn get_user_by_username(&self, username: &str) -> StoreResult<UserRecord> {
        self.users()
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn get_user_by_id(&self, id: Uuid) -> StoreResult<UserProfile> {
        self.users()
            .get(&id)
            .map(UserProfile::from)
            .ok_or(StoreError::NotFound)
    }

    fn get_users(&self) -> Vec<UserProfile> {
        self.users().values().map(UserProfile::from).collect()
    }

    fn update_user(&self, user: UserRecord) -> StoreResult<()> {
        let mut users = self.users();
        if !users.contains_key(&user.id) {
            return Err(StoreError::NotFound);
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(StoreError::AlreadyExists);
        }

        users.insert(user.id, user);
        Ok(())
    }

    fn delete_user(&self, id: Uuid) {
        self.users().remove(&id);
    }

    fn len(&self) -> usize {
        self.users().len()
    }
}
