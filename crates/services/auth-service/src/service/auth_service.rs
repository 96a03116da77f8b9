//! Authentication service - Handles credential checks and admin authorization.
//!
//! Hash verification is CPU-bound, so it runs on the blocking pool.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{DomainError, Password};

use crate::repository::AuthRepository;

/// Hash checked when the username is unknown, so that a miss costs about as
/// much as a wrong password.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("dummy-password-for-timing")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// Authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub admin: bool,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check username and password.
    ///
    /// Unknown users and wrong passwords both yield `InvalidCredentials`.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Principal>;

    /// Check credentials and require the administrator flag.
    ///
    /// Valid credentials without admin rights yield `Forbidden`.
    async fn authorize_admin(&self, username: &str, password: &str) -> AppResult<Principal>;
}

/// Concrete implementation of AuthService using a credential repository.
pub struct Authenticator {
    repo: Arc<dyn AuthRepository>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }
}

async fn verify_password(hash: String, plain_text: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || Password::from_hash(hash).verify(&plain_text))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))
}

#[async_trait]
impl AuthService for Authenticator {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Principal> {
        let credentials = match self.repo.get_user_by_username(username) {
            Ok(credentials) => Some(credentials),
            Err(DomainError::NotFound(_)) => None,
            Err(err) => return Err(err.into()),
        };

        let stored_hash = credentials
            .as_ref()
            .map(|c| c.password_hash.clone())
            .unwrap_or_else(|| DUMMY_HASH.clone());
        let password_valid = verify_password(stored_hash, password.to_string()).await?;

        match credentials {
            Some(credentials) if password_valid => Ok(Principal {
                id: credentials.id,
                username: credentials.username,
                admin: credentials.admin,
            }),
            _ => {
                tracing::debug!(username, "Authentication failed");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn authorize_admin(&self, username: &str, password: &str) -> AppResult<Principal> {
        let principal = self.authenticate(username, password).await?;

        if !principal.admin {
            tracing::debug!(username, "Admin access denied");
            return Err(AppError::Forbidden);
        }

        Ok(principal)
    }
}
