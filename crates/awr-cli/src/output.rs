use anyhow::Result;
use serde::Serialize;

/// Print a value as one JSON document on stdout.
pub fn print_json(value: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}
