//! Factory-method demo binary.
//!
//! Shows a menu on stdout, reads selections from stdin, and runs the client
//! code with whichever creator was chosen.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use design_patterns::factory::run_menu;
use design_patterns::logging;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "factory-menu")]
#[command(about = "Choose a broker at runtime through a factory method")]
#[command(version)]
struct Args {
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_menu(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("menu aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
