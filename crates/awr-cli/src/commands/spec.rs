use std::process::ExitCode;

use anyhow::Result;
use awr_actions::generate_spec;
use clap::Args;

use crate::output::print_json;

#[derive(Args, Debug)]
pub struct SpecArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn cmd_spec(args: &SpecArgs) -> Result<ExitCode> {
    print_json(&generate_spec(), args.pretty)?;
    Ok(ExitCode::SUCCESS)
}
