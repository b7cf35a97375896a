// mediaprobe-cli/src/main.rs
//
// Entry point for the mediaprobe command-line tool: parses arguments, sets up
// logging and dispatches to the command implementations. Any error is printed
// to stderr and turns into exit code 1.

use clap::Parser;
use mediaprobe_cli::logging::init_logging;
use mediaprobe_cli::{Cli, Commands, run_codecs, run_streams};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Streams(args) => run_streams(args),
        Commands::Codecs(args) => {
            run_codecs(args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
