use clap::Parser;
use velox_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Settings decide where logs go, so they load first.
    let cfg = match cli.load_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("velox error: {:#}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = logging::init_logging(&cfg) {
        logging::init_logging_stderr(&cfg);
        tracing::warn!("error log unavailable, logging to stderr: {:#}", err);
    }

    if let Err(err) = cli.run(&cfg) {
        eprintln!("velox error: {:#}", err);
        std::process::exit(1);
    }
}
