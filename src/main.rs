use std::{io, process::ExitCode};

use clap::Parser;
use cli::{Args, Command};
use log::{debug, error};

mod cli;
mod error;
mod run;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Demo);
    debug!("running {command:?}");

    let mut stdout = io::stdout().lock();
    match run::execute(command, args.values, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
