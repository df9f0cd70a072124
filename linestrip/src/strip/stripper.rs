//! Read, strip and write back a contiguous block of lines.
//!
//! # Usage
//!
//! ```
//! use linestrip::strip::{LineBuffer, LineRange, LineRangeStripper};
//!
//! let stripper = LineRangeStripper::new("page.html", LineRange::new(2, 4).unwrap());
//! let mut buffer = LineBuffer::from_text("a\nb\nc\nd\ne\n");
//! let report = stripper.strip_buffer(&mut buffer).unwrap();
//! assert_eq!(buffer.to_text(), "a\nd\ne\n");
//! assert_eq!(report.lines_after, 3);
//! ```

use std::path::{Path, PathBuf};

use super::{LineBuffer, LineRange, StripError, StripReport};
use crate::utils::normalize_display_path;

/// Whether a run replaces the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace the file with the stripped content.
    #[default]
    Overwrite,
    /// Compute and report only.
    DryRun,
}

/// Removes one line range from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRangeStripper {
    path: PathBuf,
    range: LineRange,
}

impl LineRangeStripper {
    /// Create a stripper for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, range: LineRange) -> Self {
        Self {
            path: path.into(),
            range,
        }
    }

    /// Target file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Range to remove.
    #[must_use]
    pub const fn range(&self) -> LineRange {
        self.range
    }

    /// Strip an in-memory buffer and report what was removed.
    ///
    /// # Errors
    /// Returns `StripError::OutOfRange` if the range does not fit the buffer;
    /// the buffer is unchanged then.
    pub fn strip_buffer(&self, buffer: &mut LineBuffer) -> Result<StripReport, StripError> {
        let removed = buffer.remove_range(self.range)?;
        Ok(StripReport::capture(
            normalize_display_path(&self.path),
            self.range,
            buffer,
            &removed,
        ))
    }

    /// Load the target, strip it and, unless `mode` is a dry run, replace it.
    ///
    /// Every check happens before the write, so a failed run leaves the
    /// target as it was.
    ///
    /// # Errors
    /// Returns any `StripError` from reading, range checking or writing.
    pub fn run(&self, mode: WriteMode) -> Result<(LineBuffer, StripReport), StripError> {
        let mut buffer = LineBuffer::load(&self.path)?;
        let mut report = self.strip_buffer(&mut buffer)?;
        if mode == WriteMode::Overwrite {
            buffer.write_atomic(&self.path)?;
            report.written = true;
        }
        Ok((buffer, report))
    }
}
