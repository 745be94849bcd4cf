//! tales-config CLI entry point.

use clap::Parser;

use tales_config::cli::{handle_error, Cli, Commands};
use tales_config::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let logger = LoggerImpl::init(&cli.log_config()).unwrap_or_else(|err| handle_error(err, json));

    let result = match cli.command_or_default() {
        Commands::Check(args) => tales_config::cli::commands::check::execute(&args, json),
    };

    // Flush file logs before a possible process::exit.
    drop(logger);

    if let Err(err) = result {
        handle_error(err, json);
    }
}
