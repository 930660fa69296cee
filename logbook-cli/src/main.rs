mod cli;
mod cli_modes;
mod common;
mod logging;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::LogbookCli;
use logbook_core::Logbook;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("logbook: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let logbook = Logbook::new()?;
    let mut logbook_cli = LogbookCli::new(cli, logbook);
    logbook_cli.run()
}
