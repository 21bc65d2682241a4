// create-ts - TypeScript project scaffolder
// Main CLI entry point

use clap::Parser;
use std::process;
use create_ts::cli::{Cli, CliDispatcher};
use create_ts::utils::error::UserError;
use create_ts::utils::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: {err}");
    }

    let result = CliDispatcher::execute().await;

    if let Err(err) = result {
        let user_error = UserError::from_scaffold_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
