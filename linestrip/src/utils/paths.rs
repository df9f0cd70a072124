//! Path utilities for linestrip.
//!
//! - Cross-platform path normalization for display
//! - Resolution of config-relative target paths

use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use linestrip::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\src\\page.html")), "src/page.html");
/// assert_eq!(normalize_display_path(Path::new("./src/page.html")), "src/page.html");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Resolves `path` against `base` unless it is already absolute.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use linestrip::utils::resolve_against;
///
/// assert_eq!(
///     resolve_against(Path::new("/project"), Path::new("src/page.html")),
///     PathBuf::from("/project/src/page.html")
/// );
/// ```
#[must_use]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_path() {
        assert_eq!(normalize_display_path(Path::new("src/page.html")), "src/page.html");
    }

    #[test]
    fn test_normalize_extended_prefix() {
        assert_eq!(
            normalize_display_path(Path::new(r"\\?\C:\site\page.html")),
            "C:/site/page.html"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute() {
        let abs = std::env::temp_dir().join("page.html");
        assert_eq!(resolve_against(Path::new("base"), &abs), abs);
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve_against(Path::new("base"), Path::new("page.html")),
            PathBuf::from("base").join("page.html")
        );
    }
}
