use std::process::ExitCode;

use clap::Parser;
use log::debug;

use punt::cli::{self, Cli};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Starting up");

    match cli::run(&cli) {
        Ok(samples) => {
            for line in samples {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("punt: {e}");
            ExitCode::FAILURE
        }
    }
}
