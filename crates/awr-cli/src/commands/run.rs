use std::process::ExitCode;

use anyhow::Result;
use awr_host::Executor;
use clap::Args;

use crate::input::read_request;
use crate::output::print_json;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Action request JSON, `@file`, or `@-` for stdin
    pub request: String,

    /// Pretty-print the observation
    #[arg(long)]
    pub pretty: bool,
}

pub async fn cmd_run(args: &RunArgs) -> Result<ExitCode> {
    let request = read_request(&args.request)?;

    let observation = Executor::new().execute_request(request).await;
    print_json(&observation, args.pretty)?;

    Ok(if observation.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
