//! Repository layer for credential lookups.

mod auth_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use auth_repository::MockAuthRepository;
pub use auth_repository::{AuthRepository, Credentials, StoreAuthRepository};
