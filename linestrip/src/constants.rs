//! Shared constants: config file name and the built-in strip job.

/// Name of the per-project configuration file.
pub const CONFIG_FILENAME: &str = ".linestrip.toml";

/// Target file of the built-in job, relative to the project root.
pub const DEFAULT_TARGET: &str = "src/barrierefreiheit-v2.html";

/// First line (1-based, inclusive) removed by the built-in job.
pub const DEFAULT_START_LINE: usize = 1487;

/// First line (1-based) kept after the removed range of the built-in job.
pub const DEFAULT_END_BOUNDARY: usize = 1683;
