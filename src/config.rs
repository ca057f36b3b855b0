//! Configuration types
//!
//! Settings for the dataset location, CSV dialect, pagination defaults and
//! the HTTP server, loadable from YAML. Every section is optional.

use crate::decode::CsvDecoder;
use crate::error::{Error, Result};
use crate::loader::{CsvFileSource, DEFAULT_DATA_FILE};
use crate::types::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// CSV file holding the dataset
    pub data_file: PathBuf,

    /// CSV dialect
    pub csv: CsvConfig,

    /// Pagination defaults
    pub defaults: PaginationDefaults,

    /// HTTP server settings
    pub server: ServerSettings,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            csv: CsvConfig::default(),
            defaults: PaginationDefaults::default(),
            server: ServerSettings::default(),
        }
    }
}

impl PagerConfig {
    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.defaults.page_size < 1 {
            return Err(Error::invalid_config_value(
                "defaults.page_size",
                "must be at least 1",
            ));
        }
        if self.csv.delimiter == '"' || self.csv.delimiter == '\n' || self.csv.delimiter == '\r' {
            return Err(Error::invalid_config_value(
                "csv.delimiter",
                format!("{:?} cannot be used as a delimiter", self.csv.delimiter),
            ));
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(Error::invalid_config_value("data_file", "must not be empty"));
        }
        Ok(())
    }

    /// Record source described by this config
    pub fn source(&self) -> CsvFileSource {
        CsvFileSource::new(&self.data_file)
            .with_decoder(CsvDecoder::with_delimiter(self.csv.delimiter))
    }
}

// ============================================================================
// Sections
// ============================================================================

/// CSV dialect settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Field delimiter
    pub delimiter: char,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// Defaults applied when a request omits a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationDefaults {
    /// Records per page
    pub page_size: i64,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = PagerConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PagerConfig::default());
        assert_eq!(config.data_file, PathBuf::from("Popular_Baby_Names.csv"));
        assert_eq!(config.defaults.page_size, 10);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
data_file: data/names.csv
csv:
  delimiter: ";"
server:
  port: 9000
"#;
        let config = PagerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.data_file, PathBuf::from("data/names.csv"));
        assert_eq!(config.csv.delimiter, ';');
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.defaults.page_size, 10);
    }

    #[test]
    fn test_invalid_page_size() {
        let err = PagerConfig::from_yaml_str("defaults:\n  page_size: 0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "defaults.page_size"
        ));
    }

    #[test]
    fn test_invalid_delimiter() {
        let err = PagerConfig::from_yaml_str("csv:\n  delimiter: '\"'\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = PagerConfig::from_yaml_str("server: [").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "defaults:\n  page_size: 25").unwrap();

        let config = PagerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.defaults.page_size, 25);
    }

    #[test]
    fn test_from_missing_file() {
        let err = PagerConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_source_uses_config() {
        let config = PagerConfig {
            data_file: PathBuf::from("x.csv"),
            csv: CsvConfig { delimiter: '\t' },
            ..Default::default()
        };
        let source = config.source();
        assert_eq!(source.path(), Path::new("x.csv"));
    }
}
