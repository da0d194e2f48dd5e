use std::process::Stdio;

use awr_actions::ExecParams;
use awr_actions::outputs::ExecOutput;
use tokio::process::Command;

use crate::error::ExecError;

/// Split a command line into program and arguments on whitespace.
///
/// There is no shell and no quoting: an argument cannot contain spaces.
pub fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Run the command to completion and capture both output streams.
pub(crate) async fn run_command(params: &ExecParams) -> Result<ExecOutput, ExecError> {
    let Some((program, args)) = split_command(&params.command) else {
        return Err(ExecError::EmptyCommand);
    };

    let output = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if !output.status.success() {
        return Err(ExecError::ExitStatus {
            status: output.status,
            stderr,
        });
    }
    Ok(ExecOutput { stdout, stderr })
}
