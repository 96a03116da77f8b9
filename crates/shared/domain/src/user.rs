//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity as seen by the user-management use cases.
///
/// Carries no password; the hash only leaves the store on the
/// authentication path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub admin: bool,
}

/// User creation / replacement data.
///
/// `password` is plain text until the user service hashes it.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    /// User email address
    pub email: String,
    /// Unique login name
    pub username: String,
    /// User password
    pub password: String,
    /// Administrator flag
    pub admin: bool,
}

// Keep the password out of logs
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("admin", &self.admin)
            .finish()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address
    pub email: String,
    /// Unique login name
    pub username: String,
    /// Administrator flag
    pub admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            admin: user.admin,
        }
    }
}
