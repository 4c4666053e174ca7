//! The check command
//!
//! Builds a user from a TOML file or from flags and checks it against the
//! requested pipes.

use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use pipe_core::{AllOf, ConditionalPipe};
use pipe_user::{
    SharedUser, User, UserCanEditConditionalPipe, UserConfig, UserIsActiveConditionalPipe,
    UserIsAdminConditionalPipe, UserPermission, UserRole, UserStatus,
};

use super::Decision;

/// A pipe that can be requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Requirement {
    /// The user's role is admin
    Admin,

    /// The user's status is active
    Active,

    /// The user's permissions include write
    CanEdit,
}

impl Requirement {
    /// Requirements used when none are given
    pub const DEFAULT: [Requirement; 3] = [Self::Admin, Self::Active, Self::CanEdit];

    /// Builds the pipe for this requirement, bound to the given user
    pub fn bind(self, user: &SharedUser) -> Box<dyn ConditionalPipe> {
        match self {
            Self::Admin => Box::new(UserIsAdminConditionalPipe::new(user)),
            Self::Active => Box::new(UserIsActiveConditionalPipe::new(user)),
            Self::CanEdit => Box::new(UserCanEditConditionalPipe::new(user)),
        }
    }
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// TOML file describing the user
    #[clap(long, conflicts_with_all = ["first_name", "last_name", "status", "role", "permissions"])]
    pub config: Option<PathBuf>,

    /// Given name of the user
    #[clap(long)]
    pub first_name: Option<String>,

    /// Family name of the user
    #[clap(long)]
    pub last_name: Option<String>,

    /// Account status: active, inactive or suspended [default: active]
    #[clap(long)]
    pub status: Option<UserStatus>,

    /// Role: admin, member or guest [default: member]
    #[clap(long)]
    pub role: Option<UserRole>,

    /// Permissions separated by '|' or ',', e.g. "read|write" [default: read]
    #[clap(long)]
    pub permissions: Option<UserPermission>,

    /// Pipes that must hold, comma separated [default: admin,active,can-edit]
    #[clap(long, value_enum, value_delimiter = ',')]
    pub require: Vec<Requirement>,
}

impl CheckArgs {
    /// Builds the user described by these arguments
    ///
    /// Flags go through [`UserConfig`] so both sources are validated alike.
    pub fn user(&self) -> anyhow::Result<User> {
        if let Some(path) = &self.config {
            let config = UserConfig::load(path)
                .with_context(|| format!("failed to load user config {}", path.display()))?;
            return config
                .into_user()
                .with_context(|| format!("invalid user config {}", path.display()));
        }

        let defaults = User::new("Anonymous", "");
        let config = UserConfig {
            first_name: self.first_name.clone().unwrap_or(defaults.first_name),
            last_name: self.last_name.clone().unwrap_or(defaults.last_name),
            status: self.status.unwrap_or(defaults.status),
            role: self.role.unwrap_or(defaults.role),
            permissions: self
                .permissions
                .unwrap_or(defaults.permission)
                .flag_names(),
        };
        config.into_user().context("invalid user flags")
    }

    /// Gets the requested pipes in order, falling back to the defaults
    pub fn requirements(&self) -> Vec<Requirement> {
        if self.require.is_empty() {
            Requirement::DEFAULT.to_vec()
        } else {
            self.require.clone()
        }
    }
}

/// Implementation of the check command
pub fn execute_check(args: &CheckArgs) -> anyhow::Result<Decision> {
    let user = args.user()?.share();
    info!(user = %user.read(), "Checking user");

    let pipes = AllOf::from_pipes(
        args.requirements()
            .into_iter()
            .map(|requirement| requirement.bind(&user))
            .collect(),
    );

    Ok(Decision::evaluate(&user, &pipes))
}
