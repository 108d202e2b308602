//! appcenter configuration (appcenter.yaml)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_invalid, config_not_found, config_parse_failed, config_read_failed};
use crate::snapd::DEFAULT_SOCKET;

/// Where the configuration is read from when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "/etc/appcenter/appcenter.yaml";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DOMAIN: &str = "localhost";

/// Settings for talking to the package daemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppCenterConfig {
    /// Path of the snapd Unix socket
    pub socket: PathBuf,

    /// Upper bound for a single daemon round-trip
    pub timeout_secs: u64,

    /// Device domain; apps are served at `https://{app}.{domain}`
    pub domain: String,
}

impl Default for AppCenterConfig {
    fn default() -> Self {
        Self {
            socket: PathBuf::from(DEFAULT_SOCKET),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

impl AppCenterConfig {
    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is used if present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(config_not_found(path.display().to_string()));
                }
                Self::from_file(path)
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        let config = Self::from_yaml(&yaml)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(config_invalid("timeout_secs must be greater than zero"));
        }
        if self.socket.as_os_str().is_empty() {
            return Err(config_invalid("socket must not be empty"));
        }
        if self.domain.trim().is_empty() || self.domain.contains('/') {
            return Err(config_invalid(format!(
                "domain '{}' is not a host name",
                self.domain
            )));
        }
        Ok(())
    }

    /// Replace the socket path (from `--socket` or `APPCENTER_SOCKET`)
    #[must_use]
    pub fn with_socket(mut self, socket: Option<PathBuf>) -> Self {
        if let Some(socket) = socket {
            self.socket = socket;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
