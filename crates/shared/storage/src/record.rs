//! Stored user record and its read views.

use uuid::Uuid;

/// Canonical user record as held by the store.
///
/// `password` is an opaque hash; the store never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password: String,
    pub admin: bool,
}

/// Record submitted for insertion. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub email: String,
    pub username: String,
    pub password: String,
    pub admin: bool,
}

impl NewUserRecord {
    /// Attach an identifier, producing the record to store.
    pub fn with_id(self, id: Uuid) -> UserRecord {
        UserRecord {
            id,
            email: self.email,
            username: self.username,
            password: self.password,
            admin: self.admin,
        }
    }
}

/// Record shaped for lookups by identifier and listings: no password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub admin: bool,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            username: record.username.clone(),
            admin: record.admin,
        }
    }
}
