//! Line-range stripping.
//!
//! This module holds everything needed to cut a contiguous block of lines
//! out of a text file:
//! - `LineBuffer` loads a file as lines with their terminators intact
//! - `LineRange` is a validated 1-based `[start_line, end_boundary)` range
//! - `LineRangeStripper` runs the read, strip, report and write sequence
//!
//! The operation is not idempotent: running the same job twice removes a
//! second block that sits where the first one used to end.

mod buffer;
mod error;
mod range;
mod report;
mod stripper;

pub use buffer::LineBuffer;
pub use error::StripError;
pub use range::LineRange;
pub use report::{BoundaryLine, StripReport};
pub use stripper::{LineRangeStripper, WriteMode};
