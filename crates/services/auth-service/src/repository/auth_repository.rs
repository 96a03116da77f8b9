//! Credential lookups backed by a `UserStore`.

use std::sync::Arc;

use uuid::Uuid;

use domain::{DomainError, DomainResult, USER_ENTITY};
use storage::{StoreError, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// What authentication needs to know about a user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub admin: bool,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("admin", &self.admin)
            .finish()
    }
}

/// Credential repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait AuthRepository: Send + Sync {
    /// Find credentials by exact username
    fn get_user_by_username(&self, username: &str) -> DomainResult<Credentials>;
}

/// Concrete implementation of AuthRepository over any `UserStore`
pub struct StoreAuthRepository {
    store: Arc<dyn UserStore>,
}

impl StoreAuthRepository {
    /// Create new repository instance
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

impl AuthRepository for StoreAuthRepository {
    fn get_user_by_username(&self, username: &str) -> DomainResult<Credentials> {
        let record = self
            .store
            .get_user_by_username(username)
            .map_err(|err| match err {
                StoreError::NotFound => DomainError::not_found(USER_ENTITY),
                StoreError::AlreadyExists => {
                    DomainError::internal("lookup reported a uniqueness violation")
                }
            })?;

        Ok(Credentials {
            id: record.id,
            username: record.username,
            password_hash: record.password,
            admin: record.admin,
        })
    }
}
