//! Core library for the linestrip tool.
//!
//! This library removes a contiguous block of lines from a text file in
//! place, reporting the lines around the cut for manual verification.
//! The job (target file, start line, end boundary) comes from a
//! `.linestrip.toml` file or the built-in defaults.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing the line buffer, range and stripper.
pub mod strip;

/// Module for loading configuration.
pub mod config;

/// Module containing utility functions.
pub mod utils;

/// Module defining the entry point logic shared by the binaries.
pub mod entry_point;

/// Module containing shared constants.
pub mod constants;

/// Module for rich CLI output formatting with colored text.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;
