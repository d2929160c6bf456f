use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

pub const CONFIG_DIR_VAR: &str = "TENANTCTL_CONFIG_DIR";
pub const BASE_URL_VAR: &str = "TENANTCTL_BASE_URL";
pub const TENANT_ID_VAR: &str = "TENANTCTL_TENANT_ID";
pub const HTTP_TIMEOUT_VAR: &str = "TENANTCTL_HTTP_TIMEOUT";

const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid base url configured: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),

    #[error("Invalid default tenant id configured: {0}")]
    InvalidTenantId(#[source] uuid::Error),

    #[error("Invalid http timeout configured: '{0}' (expected a positive number of seconds)")]
    InvalidTimeout(String),

    #[error("HOME environment variable not set")]
    ConfigDir,

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings the CLI needs to reach the tenant-management service.
///
/// Everything here is validated once by [`AppConfig::resolve`]; callers can
/// rely on the default tenant id being a real UUID.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: Url,
    pub tenant_id: Uuid,
    pub http_timeout_secs: u64,
}

/// Optional on-disk settings, every field may be overridden from the environment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub tenant_id: Option<String>,
    pub http_timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Read `config.json` from the given directory. A missing file yields defaults.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_VAR) {
        return Ok(PathBuf::from(custom_dir));
    }

    let home = env::var("HOME").map_err(|_| ConfigError::ConfigDir)?;
    Ok(PathBuf::from(home).join(".config").join("tenantctl"))
}

impl AppConfig {
    /// Load from `.env`, the config file and the process environment, in that order.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env if present so local runs pick up TENANTCTL_* settings
        let _ = dotenvy::dotenv();

        let file = ConfigFile::load_from(&get_config_dir()?)?;
        Self::resolve(file, |key| env::var(key).ok())
    }

    /// Merge file settings with environment overrides and validate the result.
    pub fn resolve<F>(file: ConfigFile, env_lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Set-but-empty variables count as unset so the file value still applies
        let env_value = |key: &str| env_lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = env_value(BASE_URL_VAR)
            .or(file.base_url)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("base_url"))?;
        let base_url = Url::parse(base_url.trim()).map_err(ConfigError::InvalidBaseUrl)?;

        let tenant_id = env_value(TENANT_ID_VAR)
            .or(file.tenant_id)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("tenant_id"))?;
        let tenant_id = Uuid::parse_str(tenant_id.trim()).map_err(ConfigError::InvalidTenantId)?;

        let http_timeout_secs = match env_value(HTTP_TIMEOUT_VAR) {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(v.clone()))?,
            None => file.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        };
        if http_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(http_timeout_secs.to_string()));
        }

        Ok(Self {
            base_url,
            tenant_id,
            http_timeout_secs,
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
