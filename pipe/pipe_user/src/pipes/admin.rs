use pipe_core::ConditionalPipe;

use crate::model::{SharedUser, UserRole};

/// Holds when the user's role is [`UserRole::Admin`].
#[derive(Debug, Clone)]
pub struct UserIsAdminConditionalPipe {
    user: SharedUser,
}

impl UserIsAdminConditionalPipe {
    /// Creates a pipe bound to the given user
    pub fn new(user: &SharedUser) -> Self {
        Self { user: user.clone() }
    }
}

impl ConditionalPipe for UserIsAdminConditionalPipe {
    fn check(&self) -> bool {
        self.user.read().role == UserRole::Admin
    }

    fn describe(&self) -> String {
        "user_is_admin".to_string()
    }
}
