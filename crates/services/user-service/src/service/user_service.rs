//! User service - Handles user-related business logic.
//!
//! Hashes passwords on the blocking pool, then hands plain records to the
//! repository. The store lock is never held while hashing.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{NewUser, Password, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user from a plain-text password
    async fn create_user(&self, user: NewUser) -> AppResult<Uuid>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Replace email, username, password and admin flag of a user
    async fn update_user(&self, id: Uuid, user: NewUser) -> AppResult<()>;

    /// Delete user; deleting an unknown user is not an error
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Hash a plain-text password off the async worker threads.
async fn hash_password(plain_text: String) -> AppResult<String> {
    let password = tokio::task::spawn_blocking(move || Password::new(&plain_text))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;
    Ok(password.into_string())
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, user: NewUser) -> AppResult<Uuid> {
        let password_hash = hash_password(user.password).await?;

        let id = self
            .repo
            .create_user(user.email, user.username.clone(), password_hash, user.admin)?;

        tracing::info!(%id, username = %user.username, "User created");
        Ok(id)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        Ok(self.repo.get_user_by_id(id)?)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.get_users())
    }

    async fn update_user(&self, id: Uuid, user: NewUser) -> AppResult<()> {
        let password_hash = hash_password(user.password).await?;

        self.repo.update_user(
            User {
                id,
                email: user.email,
                username: user.username,
                admin: user.admin,
            },
            password_hash,
        )?;

        tracing::info!(%id, "User updated");
        Ok(())
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete_user(id);
        tracing::info!(%id, "User deleted");
        Ok(())
    }
}
