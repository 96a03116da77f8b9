//! Middleware for HTTP Basic authentication.

mod auth;

pub use auth::{admin_middleware, basic_auth_middleware, CurrentUser};
