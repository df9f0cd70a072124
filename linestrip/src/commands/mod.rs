//! Commands module - CLI subcommand implementations.

mod init;
mod strip;

pub use init::{run_init, run_init_in};
pub use strip::{run_strip, StripOptions};
