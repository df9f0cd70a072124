use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::{
    CONFIG_FILENAME, DEFAULT_END_BOUNDARY, DEFAULT_START_LINE, DEFAULT_TARGET,
};

/// Default configuration, seeded with the built-in job.
fn default_config() -> String {
    format!(
        "[linestrip]
# Target file, relative to this config file
path = \"{DEFAULT_TARGET}\"
# First line removed (1-based, inclusive)
start_line = {DEFAULT_START_LINE}
# First line kept after the removed block (1-based)
end_boundary = {DEFAULT_END_BOUNDARY}

# Stripping is not idempotent: update or delete this job after it has run.
"
    )
}

/// Executes the init command.
///
/// This creates the configuration file in the current directory.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// This is primarily used for testing.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    writeln!(writer, "Initializing linestrip configuration...")?;

    let config_path = root.join(CONFIG_FILENAME);
    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
        return Ok(());
    }

    fs::write(&config_path, default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    writeln!(
        writer,
        "  • Created {CONFIG_FILENAME} with default configuration."
    )?;

    writeln!(writer, "Initialization complete!")?;
    Ok(())
}
