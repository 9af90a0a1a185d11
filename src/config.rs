// File: src/config.rs
use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// What to do when a corpus line cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Abort on the first malformed line.
    #[default]
    FailFast,
    /// Read everything, log each malformed line, then fail with all of them.
    Collect,
}

/// Where the corpus lives and how it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Directory holding the corpus files.
    pub data_dir: PathBuf,

    /// File extension (without the dot) of corpus files.
    pub extension: String,

    /// Descend into subdirectories of `data_dir`.
    pub recursive: bool,

    pub error_policy: ErrorPolicy,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            extension: "txt".to_string(),
            recursive: false,
            error_policy: ErrorPolicy::FailFast,
        }
    }
}

impl LookupConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Loads a JSON config file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| LookupError::source_unavailable(path, e))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| LookupError::InvalidConfig(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data_dir": "corpus", "error_policy": "collect"}}"#).unwrap();

        let config = LookupConfig::from_json_file(file.path()).unwrap();
        assert_eq!(
            config,
            LookupConfig {
                data_dir: PathBuf::from("corpus"),
                extension: "txt".to_string(),
                recursive: false,
                error_policy: ErrorPolicy::Collect,
            }
        );
    }

    #[test]
    fn garbage_is_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            LookupConfig::from_json_file(file.path()),
            Err(LookupError::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            LookupConfig::from_json_file(&dir.path().join("nope.json")),
            Err(LookupError::SourceUnavailable { .. })
        ));
    }
}
