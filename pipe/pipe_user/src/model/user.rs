//! User subject.
//!
//! A plain data record. Pipes never own a user; they hold a [`SharedUser`]
//! handle that the caller also keeps, and read it when checked.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use pipe_core::Error;

use super::permission::UserPermission;

/// A user shared between its owner and the pipes that inspect it.
pub type SharedUser = Arc<RwLock<User>>;

/// Account status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// The account may be used.
    Active,

    /// The account has been deactivated by its owner.
    Inactive,

    /// The account has been blocked by an administrator.
    Suspended,
}

impl UserStatus {
    /// Get the name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }
}

impl FromStr for UserStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "suspended" => Ok(Self::Suspended),
            _ => Err(Error::parse("user status", s.trim())),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative rights.
    Admin,

    /// Regular member.
    Member,

    /// Unauthenticated or temporary visitor.
    Guest,
}

impl UserRole {
    /// Get the name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Guest => "guest",
        }
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "guest" => Ok(Self::Guest),
            _ => Err(Error::parse("user role", s.trim())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user whose attributes are checked by the user pipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Account status.
    pub status: UserStatus,

    /// Role.
    pub role: UserRole,

    /// Granted permissions.
    pub permission: UserPermission,
}

impl User {
    /// Create a new user.
    ///
    /// New users are active members with read permission.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            status: UserStatus::Active,
            role: UserRole::Member,
            permission: UserPermission::READ,
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Set the permissions.
    pub fn with_permission(mut self, permission: UserPermission) -> Self {
        self.permission = permission;
        self
    }

    /// Get the first and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Move this user behind a shared handle.
    pub fn share(self) -> SharedUser {
        Arc::new(RwLock::new(self))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.full_name(),
            self.status,
            self.role,
            self.permission
        )
    }
}
