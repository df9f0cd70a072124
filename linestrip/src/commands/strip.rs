//! Strip command.

use crate::output::{print_header, print_report};
use crate::strip::{LineRangeStripper, WriteMode};

use anyhow::Result;
use std::io::Write;

/// Options for the strip command
#[derive(Debug, Default, Clone, Copy)]
pub struct StripOptions {
    /// Dry-run mode (show what would change)
    pub dry_run: bool,
    /// Print the report as JSON instead of text
    pub json: bool,
}

/// Run a strip job and print its report.
///
/// # Errors
///
/// Returns an error if the target cannot be read or written, if the range
/// does not fit the file, or if writing the report fails.
pub fn run_strip<W: Write>(
    stripper: &LineRangeStripper,
    options: StripOptions,
    mut writer: W,
) -> Result<()> {
    let mode = if options.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Overwrite
    };

    let (_, report) = stripper.run(mode)?;

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        print_header(&mut writer)?;
        print_report(&mut writer, &report)?;
    }

    Ok(())
}
