/* src/cli/src/main.rs */

mod check;
mod config;
mod generate;
mod inputs;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stitch", version, about = "Generate a router module from a crawled page manifest")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate the router module and write it to the output path
  Generate(GenerateArgs),
  /// Validate the manifest and template without writing anything
  Check(InputArgs),
}

#[derive(Args)]
struct InputArgs {
  /// Path to stitch.toml (defaults to searching upward from the current directory)
  #[arg(long)]
  config: Option<PathBuf>,
  /// Page manifest JSON (overrides [manifest] file)
  #[arg(long)]
  manifest: Option<PathBuf>,
  /// Router template (overrides [template] file; built-in skeleton when absent)
  #[arg(long)]
  template: Option<PathBuf>,
  /// History mode for the built-in skeleton: web, hash, or memory
  #[arg(long)]
  history: Option<String>,
}

#[derive(Args)]
struct GenerateArgs {
  #[command(flatten)]
  inputs: InputArgs,
  /// Output path (overrides [output] file)
  #[arg(long)]
  out: Option<PathBuf>,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  let result = match cli.command {
    Commands::Generate(args) => generate::run(&args),
    Commands::Check(args) => check::run(&args),
  };
  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      ui::error(&format!("{err:#}"));
      ExitCode::FAILURE
    }
  }
}
