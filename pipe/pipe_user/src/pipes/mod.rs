//! User pipes.
//!
//! Each pipe binds a [`SharedUser`](crate::model::SharedUser) once, at
//! construction, and takes a read lock on it for the duration of a check.

mod active;
mod admin;
mod can_edit;

pub use active::UserIsActiveConditionalPipe;
pub use admin::UserIsAdminConditionalPipe;
pub use can_edit::UserCanEditConditionalPipe;
