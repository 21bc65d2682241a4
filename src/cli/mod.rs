// CLI module for command-line interface

pub mod create;

use clap::Parser;
use crate::utils::error::Result;

use self::create::CreateCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "create-ts")]
#[command(about = "Scaffold a new TypeScript project")]
#[command(long_about = r#"create-ts asks for a project name and creates a ready-to-build
TypeScript starter in a new directory:

  package.json     private ES module package with a `tsc` build script
  tsconfig.json    bundler-mode compiler options with strict linting
  src/             empty source directory
  .gitignore       logs, node_modules, build output and editor files

Answer '.' to scaffold into the current (empty) directory instead.

Examples:
  create-ts              Prompt for a name, then scaffold ./<name>
  create-ts -v           Same, logging each step to stderr"#)]
#[command(version)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Run the scaffolder in the process working directory
    pub async fn execute() -> Result<()> {
        CreateCommand::from_env()?.run().await
    }
}
