use pipe_core::ConditionalPipe;

use crate::model::{SharedUser, UserStatus};

/// Holds when the user's status is [`UserStatus::Active`].
#[derive(Debug, Clone)]
pub struct UserIsActiveConditionalPipe {
    user: SharedUser,
}

impl UserIsActiveConditionalPipe {
    /// Creates a pipe bound to the given user
    pub fn new(user: &SharedUser) -> Self {
        Self { user: user.clone() }
    }
}

impl ConditionalPipe for UserIsActiveConditionalPipe {
    fn check(&self) -> bool {
        self.user.read().status == UserStatus::Active
    }

    fn describe(&self) -> String {
        "user_is_active".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn test_active_user() {
        let user = User::new("Izuku", "Midoriya").share();
        assert!(UserIsActiveConditionalPipe::new(&user).check());
    }

    #[test]
    fn test_inactive_and_suspended_users() {
        for status in [UserStatus::Inactive, UserStatus::Suspended] {
            let user = User::new("Izuku", "Midoriya").with_status(status).share();
            assert!(!UserIsActiveConditionalPipe::new(&user).check());
        }
    }
}
