//! User configuration.
//!
//! A TOML representation of a [`User`], used by drivers that read the
//! subject from a file instead of building it in code:
//!
//! ```toml
//! first_name = "Izuku"
//! last_name = "Midoriya"
//! status = "active"
//! role = "admin"
//! permissions = ["read", "write"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use pipe_core::{Error, Result};

use crate::model::{User, UserPermission, UserRole, UserStatus};

/// Serializable description of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Given name.
    pub first_name: String,

    /// Family name.
    #[serde(default)]
    pub last_name: String,

    /// Account status.
    #[serde(default = "default_status")]
    pub status: UserStatus,

    /// Role.
    #[serde(default = "default_role")]
    pub role: UserRole,

    /// Permission flag names, e.g. `["read", "write"]`.
    #[serde(default = "default_permissions")]
    pub permissions: Vec<String>,
}

fn default_status() -> UserStatus {
    UserStatus::Active
}

fn default_role() -> UserRole {
    UserRole::Member
}

fn default_permissions() -> Vec<String> {
    vec!["read".to_string()]
}

impl UserConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading user configuration");
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Render this configuration as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Build the user described by this configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The user.
    /// * `Err(Error::Config)` - If the first name is blank.
    /// * `Err(Error::Parse)` - If a permission name is unknown.
    pub fn into_user(self) -> Result<User> {
        if self.first_name.trim().is_empty() {
            return Err(Error::Config("first_name must not be empty".to_string()));
        }

        let permission = self
            .permissions
            .iter()
            .try_fold(UserPermission::empty(), |acc, name| {
                Ok::<_, Error>(acc | UserPermission::from_flag_name(name)?)
            })?;

        Ok(User::new(self.first_name, self.last_name)
            .with_status(self.status)
            .with_role(self.role)
            .with_permission(permission))
    }
}

impl From<&User> for UserConfig {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            status: user.status,
            role: user.role,
            permissions: user.permission.flag_names(),
        }
    }
}
