use std::path::PathBuf;

/// Errors raised while loading, stripping or writing a file.
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    /// The target could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The target is not valid UTF-8 text.
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        /// File that was being decoded.
        path: PathBuf,
        /// Underlying decode error.
        source: std::string::FromUtf8Error,
    },
    /// The replacement content could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that was being replaced.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The range is empty or starts before line 1.
    #[error(
        "invalid line range: start line {start_line} must be at least 1 and below end boundary {end_boundary}"
    )]
    InvalidRange {
        /// Requested first removed line.
        start_line: usize,
        /// Requested first kept line.
        end_boundary: usize,
    },
    /// The range reaches past the last line of the file.
    #[error(
        "line range {start_line}..{end_boundary} does not fit a file of {total_lines} lines"
    )]
    OutOfRange {
        /// Requested first removed line.
        start_line: usize,
        /// Requested first kept line.
        end_boundary: usize,
        /// Number of lines actually present.
        total_lines: usize,
    },
}
