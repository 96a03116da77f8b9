//! User Service Library
//!
//! User-management use cases over the in-memory user store: create, read,
//! list, replace and delete user records. Passwords are hashed here, before
//! anything reaches the store.

pub mod repository;
pub mod service;

pub use repository::{StoreUserRepository, UserRepository};
pub use service::{UserManager, UserService};
