use std::{io, process::ExitCode};

use clap::Parser;
use toolchain::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    logging::init(config.log_level);

    let stdout = io::stdout();
    match app::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
