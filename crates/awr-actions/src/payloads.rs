//! Per-kind action payloads and their validation rules.
//!
//! Fields absent on the wire decode as empty strings, so a missing field and
//! an empty one fail validation the same way.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::kinds::ActionKind;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required for {kind} action")]
    MissingField {
        kind: ActionKind,
        field: &'static str,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ActionKind {
        match self {
            ValidationError::MissingField { kind, .. } => *kind,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field, .. } => field,
        }
    }
}

/// Pure field checks; never touches the host.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require(kind: ActionKind, field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField { kind, field });
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadFileParams {
    #[serde(default)]
    pub path: String,
}

impl Validate for ReadFileParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require(ActionKind::ReadFile, "path", &self.path)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteFileParams {
    #[serde(default)]
    pub path: String,
    /// May be empty; writing empty content truncates the file.
    #[serde(default)]
    pub content: String,
}

impl Validate for WriteFileParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require(ActionKind::WriteFile, "path", &self.path)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListDirParams {
    /// Empty means the process working directory.
    #[serde(default)]
    pub path: String,
}

impl Validate for ListDirParams {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecParams {
    /// Program and arguments separated by whitespace. No shell, no quoting.
    #[serde(default)]
    pub command: String,
}

impl Validate for ExecParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require(ActionKind::Exec, "command", &self.command)
    }
}

/// One payload variant per [`ActionKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionPayload {
    ReadFile(ReadFileParams),
    WriteFile(WriteFileParams),
    ListDir(ListDirParams),
    Exec(ExecParams),
}

impl ActionPayload {
    /// The kind this payload variant belongs to.
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionPayload::ReadFile(_) => ActionKind::ReadFile,
            ActionPayload::WriteFile(_) => ActionKind::WriteFile,
            ActionPayload::ListDir(_) => ActionKind::ListDir,
            ActionPayload::Exec(_) => ActionKind::Exec,
        }
    }

    /// Decode a JSON payload into the variant selected by `kind`.
    ///
    /// `null` is treated as an empty object so it reaches validation
    /// instead of failing to decode.
    pub fn decode(kind: ActionKind, value: Value) -> Result<Self, serde_json::Error> {
        let value = match value {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        Ok(match kind {
            ActionKind::ReadFile => ActionPayload::ReadFile(serde_json::from_value(value)?),
            ActionKind::WriteFile => ActionPayload::WriteFile(serde_json::from_value(value)?),
            ActionKind::ListDir => ActionPayload::ListDir(serde_json::from_value(value)?),
            ActionKind::Exec => ActionPayload::Exec(serde_json::from_value(value)?),
        })
    }
}

impl Validate for ActionPayload {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ActionPayload::ReadFile(params) => params.validate(),
            ActionPayload::WriteFile(params) => params.validate(),
            ActionPayload::ListDir(params) => params.validate(),
            ActionPayload::Exec(params) => params.validate(),
        }
    }
}

impl From<ReadFileParams> for ActionPayload {
    fn from(params: ReadFileParams) -> Self {
        ActionPayload::ReadFile(params)
    }
}

impl From<WriteFileParams> for ActionPayload {
    fn from(params: WriteFileParams) -> Self {
        ActionPayload::WriteFile(params)
    }
}

impl From<ListDirParams> for ActionPayload {
    fn from(params: ListDirParams) -> Self {
        ActionPayload::ListDir(params)
    }
}

impl From<ExecParams> for ActionPayload {
    fn from(params: ExecParams) -> Self {
        ActionPayload::Exec(params)
    }
}
