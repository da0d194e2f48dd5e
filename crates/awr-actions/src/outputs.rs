//! Typed `data` shapes carried by successful observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `data` of a successful `write_file`.
pub const WRITE_FILE_CONFIRMATION: &str = "file written successfully";

/// One `list_dir` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    /// Bytes, as reported by the entry's own metadata (symlinks are not followed).
    pub size: u64,
    pub mod_time: DateTime<Utc>,
}

/// `data` of a successful `exec`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}
