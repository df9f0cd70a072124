use serde::Serialize;

use super::{LineBuffer, LineRange};

/// One line shown for manual verification around the removed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryLine {
    /// 1-based line number in the original file.
    pub number: usize,
    /// Line content with surrounding whitespace trimmed.
    pub content: String,
}

impl BoundaryLine {
    /// Line `position` of `buffer`, reported under its original `number`.
    fn from_buffer(buffer: &LineBuffer, position: usize, number: usize) -> Option<Self> {
        buffer.line(position).map(|line| Self {
            number,
            content: line.trim().to_owned(),
        })
    }
}

/// Diagnostics of a single strip run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripReport {
    /// Display form of the target path.
    pub file: String,
    /// Removed range.
    pub range: LineRange,
    /// Line count of the original file.
    pub lines_before: usize,
    /// Line count after removal.
    pub lines_after: usize,
    /// Last kept line before the block; absent when the block starts at line 1.
    pub line_before_range: Option<BoundaryLine>,
    /// First removed line.
    pub first_removed: BoundaryLine,
    /// Last removed line.
    pub last_removed: BoundaryLine,
    /// First kept line after the block; absent when the block runs to EOF.
    pub line_after_range: Option<BoundaryLine>,
    /// False on a dry run.
    pub written: bool,
}

impl StripReport {
    /// Build the report after `range` was removed from a buffer.
    ///
    /// `remaining` is the buffer after removal and `removed` the lines taken
    /// out of it, as returned by `LineBuffer::remove_range`.
    pub(crate) fn capture(
        file: String,
        range: LineRange,
        remaining: &LineBuffer,
        removed: &[String],
    ) -> Self {
        let removed_line = |number, line: Option<&String>| BoundaryLine {
            number,
            content: line.map(|l| l.trim().to_owned()).unwrap_or_default(),
        };

        Self {
            file,
            range,
            lines_before: remaining.len() + removed.len(),
            lines_after: remaining.len(),
            line_before_range: BoundaryLine::from_buffer(
                remaining,
                range.start_line() - 1,
                range.start_line() - 1,
            ),
            first_removed: removed_line(range.start_line(), removed.first()),
            last_removed: removed_line(range.last_line(), removed.last()),
            line_after_range: BoundaryLine::from_buffer(
                remaining,
                range.start_line(),
                range.end_boundary(),
            ),
            written: false,
        }
    }

    /// Number of lines removed.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.lines_before - self.lines_after
    }
}
