use clap::Parser;
use linkpreview_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unusable.
    if cli.verbose || logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run() {
        eprintln!("linkpreview error: {:#}", err);
        std::process::exit(1);
    }
}
