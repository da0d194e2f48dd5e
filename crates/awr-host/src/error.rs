use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Host-level failure while running an action. Flattened to its message
/// before it leaves the executor.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("error reading file '{path}': {source}")]
    ReadFile { path: String, source: io::Error },
    #[error("error writing file '{path}': {source}")]
    WriteFile { path: String, source: io::Error },
    #[error("error listing directory '{path}': {source}")]
    ListDir { path: String, source: io::Error },
    #[error("invalid command")]
    EmptyCommand,
    #[error("command execution failed: failed to spawn '{program}': {source}")]
    Spawn { program: String, source: io::Error },
    #[error("command execution failed: {status}\nStderr: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },
}
