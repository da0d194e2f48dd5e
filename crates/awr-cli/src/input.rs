//! Action requests from the command line.

use std::io::Read;

use anyhow::{Context, Result};
use awr_actions::ActionRequest;

/// Where the request JSON comes from: `@-` is stdin, `@path` a file, and
/// anything else the JSON text itself.
#[derive(Debug, PartialEq, Eq)]
enum RequestSource<'a> {
    Stdin,
    File(&'a str),
    Literal(&'a str),
}

impl<'a> RequestSource<'a> {
    fn parse(arg: &'a str) -> Self {
        match arg.strip_prefix('@') {
            Some("-") => RequestSource::Stdin,
            Some(path) => RequestSource::File(path),
            None => RequestSource::Literal(arg),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            RequestSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("read request from stdin")?;
                Ok(text)
            }
            RequestSource::File(path) => {
                std::fs::read_to_string(path).with_context(|| format!("read request file {path}"))
            }
            RequestSource::Literal(text) => Ok(text.to_string()),
        }
    }
}

/// Load and decode the `{"type": ..., "payload": ...}` request named by `arg`.
pub fn read_request(arg: &str) -> Result<ActionRequest> {
    let text = RequestSource::parse(arg).read()?;
    serde_json::from_str(&text).context("request must be {\"type\": ..., \"payload\": {...}}")
}
