mod commands;
mod input;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::run::RunArgs;
use commands::serve::ServeArgs;
use commands::spec::SpecArgs;

#[derive(Parser, Debug)]
#[command(name = "awr", version, about = "Agent workspace runtime")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the action API over HTTP
    Serve(ServeArgs),

    /// Print the action spec
    Spec(SpecArgs),

    /// Execute one action locally and print its observation
    Run(RunArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => commands::serve::cmd_serve(&args).await,
        Command::Spec(args) => commands::spec::cmd_spec(&args),
        Command::Run(args) => commands::run::cmd_run(&args).await,
    }
}
