use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Identifies the host operation an action requests. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ReadFile,
    WriteFile,
    ListDir,
    Exec,
}

impl ActionKind {
    pub const READ_FILE: &'static str = "read_file";
    pub const WRITE_FILE: &'static str = "write_file";
    pub const LIST_DIR: &'static str = "list_dir";
    pub const EXEC: &'static str = "exec";

    /// Every kind, in registry order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::ReadFile,
        ActionKind::WriteFile,
        ActionKind::ListDir,
        ActionKind::Exec,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ReadFile => Self::READ_FILE,
            ActionKind::WriteFile => Self::WRITE_FILE,
            ActionKind::ListDir => Self::LIST_DIR,
            ActionKind::Exec => Self::EXEC,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown action type: {0}")]
pub struct UnknownActionKind(pub String);

impl FromStr for ActionKind {
    type Err = UnknownActionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::READ_FILE => Ok(ActionKind::ReadFile),
            Self::WRITE_FILE => Ok(ActionKind::WriteFile),
            Self::LIST_DIR => Ok(ActionKind::ListDir),
            Self::EXEC => Ok(ActionKind::Exec),
            other => Err(UnknownActionKind(other.to_owned())),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ActionKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
