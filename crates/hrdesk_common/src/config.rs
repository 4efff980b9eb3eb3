//! HR Desk Configuration
//!
//! Behaviour settings only; policy and leave tables are built in.
//! Config file: ~/.config/hrdesk/config.toml or /etc/hrdesk/config.toml

use crate::error::{HrDeskError, Result};
use crate::router::RouterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Interaction logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Print timestamped USER/AGENT records for each exchange
    #[serde(default)]
    pub interactions: bool,

    /// Append each exchange to the JSON-lines journal
    #[serde(default)]
    pub journal: bool,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON instead of plain text
    #[serde(default)]
    pub json: bool,
}

/// Main HR Desk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrDeskConfig {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl HrDeskConfig {
    /// Get default user config path: ~/.config/hrdesk/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(Path::new(&xdg).join("hrdesk").join("config.toml"));
        }
        let home = std::env::var("HOME").map_err(|_| HrDeskError::NoHome)?;
        Ok(Path::new(&home)
            .join(".config")
            .join("hrdesk")
            .join("config.toml"))
    }

    /// Get system config path: /etc/hrdesk/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/hrdesk/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (errors if missing)
    /// 2. $HRDESK_CONFIG (errors if missing)
    /// 3. User config (~/.config/hrdesk/config.toml)
    /// 4. System config (/etc/hrdesk/config.toml)
    /// 5. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Ok(path) = std::env::var("HRDESK_CONFIG") {
            return Self::load_from(Path::new(&path));
        }

        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| HrDeskError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|source| HrDeskError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::DEFAULT_DEMO_EMPLOYEE;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = HrDeskConfig::default();
        assert_eq!(config.router.demo_employee, DEFAULT_DEMO_EMPLOYEE);
        assert!(!config.log.interactions);
        assert!(!config.log.journal);
        assert!(!config.output.json);
    }

    #[test]
    fn test_parse_partial() {
        let config = HrDeskConfig::parse("[log]\ninteractions = true\n").unwrap();
        assert!(config.log.interactions);
        assert_eq!(config.router.demo_employee, DEFAULT_DEMO_EMPLOYEE);

        let config = HrDeskConfig::parse("[router]\n").unwrap();
        assert_eq!(config.router.demo_employee, DEFAULT_DEMO_EMPLOYEE);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[router]\ndemo_employee = \"EMP002\"\n\n[output]\njson = true"
        )
        .unwrap();

        let config = HrDeskConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.router.demo_employee, "EMP002");
        assert!(config.output.json);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[router\ndemo_employee = ").unwrap();

        let err = HrDeskConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, HrDeskError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HrDeskConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, HrDeskError::ConfigRead { .. }));
    }
}
