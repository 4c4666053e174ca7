use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

use pipe_core::Error;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// User permissions as a bit field, combined with `|`
    pub struct UserPermission: u8 {
        const READ = 0b00000001;
        const WRITE = 0b00000010;
        const DELETE = 0b00000100;
    }
}

impl UserPermission {
    /// Parses a single flag name, ignoring case
    pub fn from_flag_name(name: &str) -> Result<Self, Error> {
        Self::from_name(&name.trim().to_ascii_uppercase())
            .ok_or_else(|| Error::parse("user permission", name.trim()))
    }

    /// Gets the lowercase names of the flags set in this permission
    pub fn flag_names(&self) -> Vec<String> {
        self.iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect()
    }
}

impl FromStr for UserPermission {
    type Err = Error;

    /// Parses a list of flag names separated by `|` or `,`.
    ///
    /// A blank string is the empty set. Empty segments such as `"read||write"`
    /// or `"read,"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::empty());
        }

        s.split(&['|', ','][..])
            .map(str::trim)
            .try_fold(Self::empty(), |acc, name| {
                if name.is_empty() {
                    return Err(Error::parse("user permission", s.trim()));
                }
                Ok(acc | Self::from_flag_name(name)?)
            })
    }
}

impl fmt::Display for UserPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = self.flag_names();

        let unknown = self.bits() & !Self::all().bits();
        if unknown != 0 {
            parts.push(format!("{:#x}", unknown));
        }

        if parts.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{}", parts.join(" | "))
    }
}
