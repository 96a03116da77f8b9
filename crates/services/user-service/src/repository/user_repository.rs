//! User repository backed by a `UserStore`.

use std::sync::Arc;

use uuid::Uuid;

use domain::{DomainError, DomainResult, User, USER_ENTITY};
use storage::{NewUserRecord, StoreError, UserProfile, UserRecord, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Store calls complete synchronously, so the trait is not async. Passwords
/// arriving here are already hashed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Create a new user and return its identifier
    fn create_user(
        &self,
        email: String,
        username: String,
        password_hash: String,
        admin: bool,
    ) -> DomainResult<Uuid>;

    /// Find user by ID
    fn get_user_by_id(&self, id: Uuid) -> DomainResult<User>;

    /// List all users
    fn get_users(&self) -> Vec<User>;

    /// Replace every field of an existing user
    fn update_user(&self, user: User, password_hash: String) -> DomainResult<()>;

    /// Delete user by ID; unknown IDs are ignored
    fn delete_user(&self, id: Uuid);
}

/// Concrete implementation of UserRepository over any `UserStore`
pub struct StoreUserRepository {
    store: Arc<dyn UserStore>,
}

impl StoreUserRepository {
    /// Create new repository instance
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

fn map_store_error(err: StoreError) -> DomainError {
    match err {
        StoreError::NotFound => DomainError::not_found(USER_ENTITY),
        StoreError::AlreadyExists => DomainError::conflict(USER_ENTITY),
    }
}

fn to_user(profile: UserProfile) -> User {
    User {
        id: profile.id,
        email: profile.email,
        username: profile.username,
        admin: profile.admin,
    }
}

impl UserRepository for StoreUserRepository {
    fn create_user(
        &self,
        email: String,
        username: String,
        password_hash: String,
        admin: bool,
    ) -> DomainResult<Uuid> {
        self.store
            .insert_user(NewUserRecord {
                email,
                username,
                password: password_hash,
                admin,
            })
            .map_err(map_store_error)
    }

    fn get_user_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.store
            .get_user_by_id(id)
            .map(to_user)
            .map_err(map_store_error)
    }

    fn get_users(&self) -> Vec<User> {
        self.store.get_users().into_iter().map(to_user).collect()
    }

    fn update_user(&self, user: User, password_hash: String) -> DomainResult<()> {
        self.store
            .update_user(UserRecord {
                id: user.id,
                email: user.email,
                username: user.username,
                password: password_hash,
                admin: user.admin,
            })
            .map_err(map_store_error)
    }

    fn delete_user(&self, id: Uuid) {
        self.store.delete_user(id);
    }
}
