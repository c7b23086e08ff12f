mod cli;
mod logging;
mod pipeline;

use clap::Parser;
use cli::{Cli, Commands};
use pipeline::{list_targets, print_version, run_query};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::setup_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Query(args) => run_query(args, cli.use_colors()),
        Commands::Targets => {
            list_targets();
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    };

    if let Err(error) = result {
        if !error.is_reported() {
            eprintln!("Error: {}", error);
        }
        process::exit(1);
    }
}
