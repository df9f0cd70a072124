use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILENAME, DEFAULT_END_BOUNDARY, DEFAULT_START_LINE, DEFAULT_TARGET,
};
use crate::strip::{LineRange, LineRangeStripper, StripError};
use crate::utils::resolve_against;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The strip job section.
    pub linestrip: JobConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
/// The strip job. Unset keys fall back to the built-in job.
pub struct JobConfig {
    /// Target file, relative to the directory holding the config file.
    pub path: Option<PathBuf>,
    /// First removed line (1-based).
    pub start_line: Option<usize>,
    /// First kept line after the removed block (1-based).
    pub end_boundary: Option<usize>,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// The nearest `.linestrip.toml` wins; with none found the built-in job
    /// applies.
    ///
    /// # Errors
    /// Returns the load error of the nearest config file. Discovery does not
    /// continue past a file that exists but fails to load.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Self::load_file(&candidate);
            }

            if !current.pop() {
                break;
            }
        }

        Ok(Config::default())
    }

    /// Loads one specific configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory that relative target paths resolve against.
    ///
    /// This is the config file's directory, or `fallback` when no file
    /// was loaded.
    #[must_use]
    pub fn base_dir(&self, fallback: &Path) -> PathBuf {
        self.config_file_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf)
    }

    /// Builds the validated strip job.
    ///
    /// # Errors
    /// Returns `StripError::InvalidRange` for an empty or zero-based range.
    pub fn stripper(&self, fallback: &Path) -> Result<LineRangeStripper, StripError> {
        let job = &self.linestrip;
        let range = LineRange::new(
            job.start_line.unwrap_or(DEFAULT_START_LINE),
            job.end_boundary.unwrap_or(DEFAULT_END_BOUNDARY),
        )?;
        let target = job
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET));
        Ok(LineRangeStripper::new(
            resolve_against(&self.base_dir(fallback), &target),
            range,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        // Create an empty temp directory with no config files
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path()).unwrap();
        // Should return default config
        assert!(config.config_file_path.is_none());
        assert!(config.linestrip.start_line.is_none());
    }

    #[test]
    fn test_load_from_path_linestrip_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"[linestrip]
path = "index.html"
start_line = 10
end_boundary = 20
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path()).unwrap();
        assert_eq!(config.linestrip.path, Some(PathBuf::from("index.html")));
        assert_eq!(config.linestrip.start_line, Some(10));
        assert_eq!(config.linestrip.end_boundary, Some(20));
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        // Create nested directory structure
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src").join("pages");
        std::fs::create_dir_all(&nested).unwrap();

        // Put config in root
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[linestrip]\nstart_line = 3\n",
        )
        .unwrap();

        // Load from nested path - should find config in parent
        let config = Config::load_from_path(&nested).unwrap();
        assert_eq!(config.linestrip.start_line, Some(3));
        assert_eq!(
            config.config_file_path,
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_from_path_stops_at_malformed() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("pages");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[linestrip]\nstart_line = 1\nend_boundary = 3\n",
        )
        .unwrap();
        std::fs::write(nested.join(CONFIG_FILENAME), "[linestrip]\nstart = 2\n").unwrap();

        // A typo in the nearest file must not fall through to the parent job
        let err = Config::load_from_path(&nested).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to parse config file"));
        assert!(message.contains("pages"));
    }

    #[test]
    fn test_load_file_rejects_unknown_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[linestrip]\nstart = 3\n").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_stripper_defaults() {
        let config = Config::default();
        let stripper = config.stripper(Path::new("site")).unwrap();
        assert_eq!(stripper.path(), Path::new("site").join(DEFAULT_TARGET));
        assert_eq!(stripper.range().start_line(), DEFAULT_START_LINE);
        assert_eq!(stripper.range().end_boundary(), DEFAULT_END_BOUNDARY);
    }

    #[test]
    fn test_stripper_resolves_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[linestrip]\npath = \"page.html\"\nstart_line = 2\nend_boundary = 4\n",
        )
        .unwrap();

        let config = Config::load_file(&path).unwrap();
        let stripper = config.stripper(Path::new("elsewhere")).unwrap();
        assert_eq!(stripper.path(), dir.path().join("page.html"));
        assert_eq!(stripper.range().line_count(), 2);
    }

    #[test]
    fn test_stripper_invalid_range() {
        let config = Config {
            linestrip: JobConfig {
                start_line: Some(5),
                end_boundary: Some(5),
                ..JobConfig::default()
            },
            config_file_path: None,
        };
        assert!(matches!(
            config.stripper(Path::new(".")),
            Err(StripError::InvalidRange { .. })
        ));
    }
}
