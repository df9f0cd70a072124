use std::fmt;

use serde::Serialize;

use super::StripError;

/// A contiguous block of lines to remove.
///
/// `start_line` is 1-based and removed; `end_boundary` is the 1-based number
/// of the first line kept after the block. `LineRange::new(2, 4)` removes
/// lines 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    start_line: usize,
    end_boundary: usize,
}

impl LineRange {
    /// Create a validated range.
    ///
    /// # Errors
    /// Returns `StripError::InvalidRange` unless `1 <= start_line < end_boundary`.
    pub fn new(start_line: usize, end_boundary: usize) -> Result<Self, StripError> {
        if start_line == 0 || end_boundary <= start_line {
            return Err(StripError::InvalidRange {
                start_line,
                end_boundary,
            });
        }
        Ok(Self {
            start_line,
            end_boundary,
        })
    }

    /// First removed line (1-based).
    #[must_use]
    pub const fn start_line(&self) -> usize {
        self.start_line
    }

    /// First kept line after the block (1-based).
    #[must_use]
    pub const fn end_boundary(&self) -> usize {
        self.end_boundary
    }

    /// Last removed line (1-based).
    #[must_use]
    pub const fn last_line(&self) -> usize {
        self.end_boundary - 1
    }

    /// 0-based index of the first removed line.
    #[must_use]
    pub const fn start_index(&self) -> usize {
        self.start_line - 1
    }

    /// 0-based index of the first kept line after the block.
    #[must_use]
    pub const fn end_index(&self) -> usize {
        self.end_boundary - 1
    }

    /// Number of lines the range removes.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_boundary - self.start_line
    }

    /// Check the range against a file of `total_lines` lines.
    ///
    /// # Errors
    /// Returns `StripError::OutOfRange` if the last removed line does not exist.
    pub fn check_within(&self, total_lines: usize) -> Result<(), StripError> {
        if self.last_line() > total_lines {
            return Err(StripError::OutOfRange {
                start_line: self.start_line,
                end_boundary: self.end_boundary,
                total_lines,
            });
        }
        Ok(())
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_line, self.last_line())
    }
}
