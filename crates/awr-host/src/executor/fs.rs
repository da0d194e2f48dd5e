use std::io;

use awr_actions::outputs::{DirEntry, WRITE_FILE_CONFIRMATION};
use awr_actions::{ListDirParams, ReadFileParams, WriteFileParams};
use chrono::{DateTime, Utc};
use tokio::io::AsyncWriteExt;

use crate::error::ExecError;

/// Permission bits for files created by `write_file`.
#[cfg(unix)]
const WRITE_FILE_MODE: u32 = 0o644;

pub(crate) async fn read_file(params: &ReadFileParams) -> Result<String, ExecError> {
    let bytes = tokio::fs::read(&params.path)
        .await
        .map_err(|source| ExecError::ReadFile {
            path: params.path.clone(),
            source,
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub(crate) async fn write_file(params: &WriteFileParams) -> Result<&'static str, ExecError> {
    let write_error = |source: io::Error| ExecError::WriteFile {
        path: params.path.clone(),
        source,
    };

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(WRITE_FILE_MODE);

    let mut file = options.open(&params.path).await.map_err(write_error)?;
    file.write_all(params.content.as_bytes())
        .await
        .map_err(write_error)?;
    file.flush().await.map_err(write_error)?;
    Ok(WRITE_FILE_CONFIRMATION)
}

pub(crate) async fn list_dir(params: &ListDirParams) -> Result<Vec<DirEntry>, ExecError> {
    let path = if params.path.is_empty() {
        "."
    } else {
        params.path.as_str()
    };
    let list_error = |source: io::Error| ExecError::ListDir {
        path: path.to_string(),
        source,
    };

    let mut reader = tokio::fs::read_dir(path).await.map_err(list_error)?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(list_error)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let metadata = match entry.metadata().await {
            Ok(metadata) => metadata,
            Err(error) => {
                tracing::debug!(entry = %name, %error, "skipping entry with unreadable metadata");
                continue;
            }
        };
        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(error) => {
                tracing::debug!(entry = %name, %error, "skipping entry without modification time");
                continue;
            }
        };
        entries.push(DirEntry {
            name,
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            mod_time: DateTime::<Utc>::from(modified),
        });
    }

    entries.sort_by(|left, right| left.name.cmp(&right.name));
    Ok(entries)
}
