//! The demo command
//!
//! Checks whether an active admin with read and write permissions can edit.

use pipe_core::AllOf;
use pipe_user::{
    User, UserCanEditConditionalPipe, UserIsActiveConditionalPipe, UserIsAdminConditionalPipe,
    UserPermission, UserRole, UserStatus,
};

use super::Decision;

/// Implementation of the demo command
pub fn execute_demo() -> anyhow::Result<Decision> {
    let current_user = User::new("Izuku", "Midoriya")
        .with_status(UserStatus::Active)
        .with_role(UserRole::Admin)
        .with_permission(UserPermission::READ | UserPermission::WRITE)
        .share();

    let active_admin_can_edit = AllOf::new()
        .with(UserIsAdminConditionalPipe::new(&current_user))
        .with(UserIsActiveConditionalPipe::new(&current_user))
        .with(UserCanEditConditionalPipe::new(&current_user));

    Ok(Decision::evaluate(&current_user, &active_admin_can_edit))
}
