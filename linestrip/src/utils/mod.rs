//! Utilities module for linestrip.

mod paths;

pub use paths::{normalize_display_path, resolve_against};
