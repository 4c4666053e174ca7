//! # Pipe User
//!
//! User-permission checks built on [`pipe_core`]. A [`User`] is shared with
//! the pipes that inspect it through a [`SharedUser`] handle, so the caller
//! keeps ownership and any later changes are seen at check time.
//!
//! ## Usage Example
//!
//! ```rust
//! use pipe_user::model::{User, UserPermission, UserRole, UserStatus};
//! use pipe_user::pipes::{
//!     UserCanEditConditionalPipe, UserIsActiveConditionalPipe, UserIsAdminConditionalPipe,
//! };
//!
//! let user = User::new("Izuku", "Midoriya")
//!     .with_status(UserStatus::Active)
//!     .with_role(UserRole::Admin)
//!     .with_permission(UserPermission::READ | UserPermission::WRITE)
//!     .share();
//!
//! let active_admin_can_edit = pipe_core::conditional_pipes!(
//!     UserIsAdminConditionalPipe::new(&user),
//!     UserIsActiveConditionalPipe::new(&user),
//!     UserCanEditConditionalPipe::new(&user),
//! );
//!
//! assert!(active_admin_can_edit);
//! ```

pub mod config;
pub mod model;
pub mod pipes;

pub use config::UserConfig;
pub use model::{SharedUser, User, UserPermission, UserRole, UserStatus};
pub use pipes::{UserCanEditConditionalPipe, UserIsActiveConditionalPipe, UserIsAdminConditionalPipe};
