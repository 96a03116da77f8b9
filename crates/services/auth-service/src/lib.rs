//! Auth Service Library
//!
//! Checks HTTP Basic credentials against the user store and decides whether
//! the caller may use administrator operations.

pub mod repository;
pub mod service;

pub use repository::{AuthRepository, Credentials, StoreAuthRepository};
pub use service::{AuthService, Authenticator, Principal};
