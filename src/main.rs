mod cli_bin;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::error;

use cli_bin::{args::Cli, commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match commands::run(&cli).context("front matter conversion aborted") {
        Ok(summary) => {
            commands::report(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
