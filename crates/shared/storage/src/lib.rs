//! In-memory user storage.
//!
//! This crate owns the process-local user records and the two indexes over
//! them (by identifier and by username). It provides:
//! - `UserStore`: the capability trait consumed by the repositories
//! - `IndexedUserStore`: the concurrent implementation used at runtime
//! - `FakeUserStore`: a plain single-map implementation for tests
//!
//! Nothing is persisted; contents are lost when the process exits.

pub mod error;
pub mod fake;
pub mod indexed;
pub mod record;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use fake::FakeUserStore;
pub use indexed::IndexedUserStore;
pub use record::{NewUserRecord, UserProfile, UserRecord};
pub use store::UserStore;
