//! Shared entry point used by every binary.

use crate::cli::{Cli, Commands};
use crate::commands::{run_init, run_strip, StripOptions};
use crate::config::Config;
use crate::utils::normalize_display_path;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::Write;

/// Runs linestrip with the given arguments.
///
/// # Errors
///
/// Returns an error if writing to stdout fails or the current directory
/// cannot be determined.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run linestrip with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Errors from the strip job itself are reported on stderr and turned into
/// exit code 1.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails or the current directory
/// cannot be determined.
pub fn run_with_args_to<W: Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["linestrip".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    if matches!(cli_var.command, Some(Commands::Init)) {
        run_init(writer)?;
        return Ok(0);
    }

    let current_dir = std::env::current_dir().context("Failed to get current directory")?;

    let verbose = cli_var.output.verbose && !cli_var.output.json;
    if verbose {
        eprintln!("[VERBOSE] linestrip v{}", env!("CARGO_PKG_VERSION"));
    }

    let loaded = match &cli_var.config {
        Some(path) => Config::load_file(path),
        None => Config::load_from_path(&current_dir),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            return Ok(1);
        }
    };

    if verbose {
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", normalize_display_path(path)),
            None => eprintln!("[VERBOSE] Config: none found, using built-in job"),
        }
    }

    let stripper = match config.stripper(&current_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            return Ok(1);
        }
    };

    if verbose {
        eprintln!(
            "[VERBOSE] Target: {}",
            normalize_display_path(stripper.path())
        );
        eprintln!(
            "[VERBOSE] Range: lines {} ({} lines)",
            stripper.range(),
            stripper.range().line_count()
        );
        eprintln!();
    }

    let options = StripOptions {
        dry_run: cli_var.output.dry_run,
        json: cli_var.output.json,
    };

    match run_strip(&stripper, options, &mut *writer) {
        Ok(()) => Ok(0),
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            Ok(1)
        }
    }
}
