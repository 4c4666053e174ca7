//! User model.
//!
//! The subject inspected by the user pipes.

pub mod permission;
pub mod user;

pub use permission::UserPermission;
pub use user::{SharedUser, User, UserRole, UserStatus};
