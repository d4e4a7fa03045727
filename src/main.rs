//! dirpress CLI
//!
//! Usage: dirpress [OPTIONS] <DIRECTORY>
//!
//! Creates `<DIRECTORY>.tar`, compresses it to `<DIRECTORY>.tar.lz4`, then
//! asks before removing the directory and the intermediate archive.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use dirpress::infrastructure::process::install_handler;
use dirpress::infrastructure::LocalFs;
use dirpress::presentation::{factory, output, Cli};
use dirpress::CompressTarget;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    install_handler().context("failed to install Ctrl-C handler")?;

    let target = CompressTarget::resolve(&cli.directory, &LocalFs::new())?;
    let use_case = factory::create_compress_use_case(cli.json);
    let sink = factory::create_event_sink(cli);

    let report = use_case.execute(&target, sink.as_ref())?;
    report.into_result()?;
    Ok(())
}
