use pipe_core::ConditionalPipe;

use crate::model::{SharedUser, UserPermission};

/// Holds when the user's permissions include [`UserPermission::WRITE`].
#[derive(Debug, Clone)]
pub struct UserCanEditConditionalPipe {
    user: SharedUser,
}

impl UserCanEditConditionalPipe {
    /// Creates a pipe bound to the given user
    pub fn new(user: &SharedUser) -> Self {
        Self { user: user.clone() }
    }
}

impl ConditionalPipe for UserCanEditConditionalPipe {
    fn check(&self) -> bool {
        self.user.read().permission.contains(UserPermission::WRITE)
    }

    fn describe(&self) -> String {
        "user_can_edit".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn test_write_permission() {
        let user = User::new("Izuku", "Midoriya")
            .with_permission(UserPermission::READ | UserPermission::WRITE)
            .share();
        assert!(UserCanEditConditionalPipe::new(&user).check());

        let user = User::new("Izuku", "Midoriya")
            .with_permission(UserPermission::WRITE)
            .share();
        assert!(UserCanEditConditionalPipe::new(&user).check());
    }

    #[test]
    fn test_without_write_permission() {
        for permission in [
            UserPermission::empty(),
            UserPermission::READ,
            UserPermission::READ | UserPermission::DELETE,
        ] {
            let user = User::new("Izuku", "Midoriya")
                .with_permission(permission)
                .share();
            assert!(!UserCanEditConditionalPipe::new(&user).check());
        }
    }
}
