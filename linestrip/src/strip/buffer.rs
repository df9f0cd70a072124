//! In-memory line buffer.
//!
//! Lines keep their terminators exactly as read (`\n`, `\r\n`, or none for a
//! final unterminated line), so concatenating them reproduces the file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{LineRange, StripError};

/// A text file held fully in memory as an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Split `text` into lines, keeping each terminator on its line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    /// Read a whole UTF-8 file.
    ///
    /// # Errors
    /// Returns `StripError::Read` if the file cannot be read and
    /// `StripError::Decode` if it is not UTF-8.
    pub fn load(path: &Path) -> Result<Self, StripError> {
        let bytes = fs::read(path).map_err(|source| StripError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| StripError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True for an empty file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line by 1-based number, terminator included.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }

    /// All lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Remove `range` and return the removed lines.
    ///
    /// # Errors
    /// Returns `StripError::OutOfRange` if the range reaches past the last line.
    /// The buffer is left unchanged in that case.
    pub fn remove_range(&mut self, range: LineRange) -> Result<Vec<String>, StripError> {
        range.check_within(self.lines.len())?;
        Ok(self
            .lines
            .drain(range.start_index()..range.end_index())
            .collect())
    }

    /// Concatenate all lines back into file content.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// Replace `path` with the buffer content.
    ///
    /// Content goes to a temporary file next to `path` first and is renamed
    /// over it once fully written, so `path` holds either the old or the new
    /// content. Permissions of an existing `path` carry over. A symlink is
    /// followed, so the file it points to is replaced and the link stays.
    ///
    /// # Errors
    /// Returns `StripError::Write` if any step fails; `path` is untouched then.
    pub fn write_atomic(&self, path: &Path) -> Result<(), StripError> {
        let write_err = |source: std::io::Error| StripError::Write {
            path: path.to_path_buf(),
            source,
        };

        let target = if path.exists() {
            fs::canonicalize(path).map_err(write_err)?
        } else {
            path.to_path_buf()
        };
        let path = target.as_path();

        let dir = parent_dir(path);
        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
        tmp.write_all(self.to_text().as_bytes())
            .map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;

        if let Ok(meta) = fs::metadata(path) {
            fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?;
        }

        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

impl From<Vec<String>> for LineBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_from_text_keeps_terminators() {
        let buffer = LineBuffer::from_text("a\r\nb\nc");
        assert_eq!(buffer.lines(), lines(&["a\r\n", "b\n", "c"]).as_slice());
        assert_eq!(buffer.to_text(), "a\r\nb\nc");
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let buffer = LineBuffer::from_text("");
        assert!(buffer.is_empty());
        assert_eq!(buffer.line(1), None);
    }

    #[test]
    fn test_line_is_one_based() {
        let buffer = LineBuffer::from_text("first\nsecond\n");
        assert_eq!(buffer.line(0), None);
        assert_eq!(buffer.line(1), Some("first\n"));
        assert_eq!(buffer.line(2), Some("second\n"));
        assert_eq!(buffer.line(3), None);
    }

    #[test]
    fn test_remove_range_example() {
        let mut buffer = LineBuffer::from_text("a\nb\nc\nd\ne\n");
        let removed = buffer
            .remove_range(LineRange::new(2, 4).unwrap())
            .unwrap();
        assert_eq!(removed, lines(&["b\n", "c\n"]));
        assert_eq!(buffer.lines(), lines(&["a\n", "d\n", "e\n"]).as_slice());
    }

    #[test]
    fn test_remove_range_out_of_bounds_leaves_buffer() {
        let mut buffer = LineBuffer::from_text("a\nb\n");
        let result = buffer.remove_range(LineRange::new(2, 5).unwrap());
        assert!(matches!(result, Err(StripError::OutOfRange { .. })));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = LineBuffer::load(&dir.path().join("missing.html"));
        assert!(matches!(result, Err(StripError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.html");
        fs::write(&path, [b'a', b'\n', 0xE9, b'\n']).unwrap();
        let result = LineBuffer::load(&path);
        assert!(matches!(result, Err(StripError::Decode { .. })));
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "old\n").unwrap();

        LineBuffer::from_text("new\r\ncontent").write_atomic(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\r\ncontent");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_follows_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.html");
        let link = dir.path().join("link.html");
        fs::write(&real, "a\nb\nc\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        LineBuffer::from_text("a\nc\n").write_atomic(&link).unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "a\nc\n");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }

    #[test]
    fn test_parent_dir_of_bare_name() {
        assert_eq!(parent_dir(Path::new("page.html")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("src/page.html")), PathBuf::from("src"));
    }
}
