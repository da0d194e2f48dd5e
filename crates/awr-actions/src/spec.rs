//! Static, machine-readable description of every action kind.
//!
//! `required` marks exactly the fields whose emptiness fails validation; the
//! tests below probe the validators with payloads built from these tables.

use indexmap::IndexMap;
use serde::Serialize;

use crate::action::Action;
use crate::kinds::ActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub ty: FieldType,
    pub description: &'static str,
    pub required: bool,
}

impl FieldSpec {
    const fn string(description: &'static str, required: bool) -> Self {
        Self {
            ty: FieldType::String,
            description,
            required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub description: &'static str,
    pub payload: IndexMap<&'static str, FieldSpec>,
    pub example: Action,
}

impl ActionSpec {
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.payload
            .iter()
            .filter(|(_, field)| field.required)
            .map(|(name, _)| *name)
    }
}

/// Spec for a single kind.
pub fn action_spec(kind: ActionKind) -> ActionSpec {
    match kind {
        ActionKind::ReadFile => ActionSpec {
            kind,
            description: "Read the contents of a file",
            payload: IndexMap::from([(
                "path",
                FieldSpec::string("Path to the file to read", true),
            )]),
            example: Action::read_file("/path/to/file.txt"),
        },
        ActionKind::WriteFile => ActionSpec {
            kind,
            description: "Write content to a file, creating or truncating it",
            payload: IndexMap::from([
                ("path", FieldSpec::string("Path to the file to write", true)),
                (
                    "content",
                    FieldSpec::string("Content to write to the file (may be empty)", false),
                ),
            ]),
            example: Action::write_file("/path/to/file.txt", "Hello, World!"),
        },
        ActionKind::ListDir => ActionSpec {
            kind,
            description: "List contents of a directory",
            payload: IndexMap::from([(
                "path",
                FieldSpec::string(
                    "Path to the directory to list (optional, defaults to current directory)",
                    false,
                ),
            )]),
            example: Action::list_dir("/path/to/directory"),
        },
        ActionKind::Exec => ActionSpec {
            kind,
            description: "Execute a command; arguments are split on whitespace, no shell",
            payload: IndexMap::from([(
                "command",
                FieldSpec::string("Command to execute", true),
            )]),
            example: Action::exec("ls -la"),
        },
    }
}

/// Specs for every kind, keyed by kind tag in registry order.
pub fn generate_spec() -> IndexMap<ActionKind, ActionSpec> {
    ActionKind::ALL
        .into_iter()
        .map(|kind| (kind, action_spec(kind)))
        .collect()
}
