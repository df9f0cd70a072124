use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.linestrip.toml):
  Looked up in the current directory and its parents.
  Run `linestrip init` to create one.

  [linestrip]
  path = \"src/barrierefreiheit-v2.html\"  # Relative to this file
  start_line = 1487                       # First line removed (1-based)
  end_boundary = 1683                     # First line kept after the block

WARNING:
  Stripping is not idempotent. A second run with the same job removes the
  block that followed the first one.
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (config file, resolved target).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be removed without modifying the file.
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Command line interface configuration using `clap`.
///
/// The strip job itself (target, start line, end boundary) is never taken
/// from the command line; it comes from the configuration file or the
/// built-in defaults.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "linestrip - Remove a fixed block of lines from a text file in place",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Option<Commands>,

    /// Use this configuration file instead of searching for one.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Write a default .linestrip.toml into the current directory
    Init,
}
