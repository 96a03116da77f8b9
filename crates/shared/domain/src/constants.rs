//! Domain-level constants.
//!
//! These constants define business rules and authentication requirements.

// =============================================================================
// Entities
// =============================================================================

/// Entity name used in not-found / already-exists messages
pub const USER_ENTITY: &str = "user";

// =============================================================================
// Authentication
// =============================================================================

/// Realm announced to clients that are missing valid credentials
pub const BASIC_AUTH_REALM: &str = "users";

/// Realm announced to authenticated clients lacking admin rights
pub const ADMIN_AUTH_REALM: &str = "admin";
