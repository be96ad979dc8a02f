//! Singleton demo binary.
//!
//! Fetches the shared printer and invokes it, optionally from several
//! threads at once.

use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use log::{error, info};

use design_patterns::logging;
use design_patterns::singleton::{run_workers, Printer};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "singleton-demo")]
#[command(about = "Invoke the process-wide printer singleton")]
#[command(version)]
struct Args {
    /// Number of threads that each fetch and invoke the printer
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    threads: u16,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let printer = Printer::instance();
    let outcome = run_workers(printer, args.threads, &Mutex::new(io::stdout()));
    info!(
        "printer {:#x} constructed {} time(s)",
        printer.id(),
        Printer::constructions()
    );

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("singleton demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}
