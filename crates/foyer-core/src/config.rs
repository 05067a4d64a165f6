//! Configuration management for Foyer.
//!
//! Loads configuration from ${FOYER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for the Foyer configuration directory.
    //!
    //! FOYER_HOME resolution order:
    //! 1. FOYER_HOME environment variable (if set)
    //! 2. ~/.config/foyer (default)

    use std::path::PathBuf;

    /// Returns the Foyer home directory.
    pub fn foyer_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOYER_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("foyer"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        foyer_home().join("config.toml")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated authenticator latency in milliseconds.
    pub auth_latency_ms: u64,

    /// Whether the login view may show the kent/kent hint after a failure.
    pub login_hint: bool,
}

impl Config {
    const DEFAULT_AUTH_LATENCY_MS: u64 = 350;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// The simulated authenticator latency as a [`Duration`].
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    /// Initializes a config file at the given path.
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content atomically (via a temp file rename).
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_latency_ms: Self::DEFAULT_AUTH_LATENCY_MS,
            login_hint: true,
        }
    }
}

/// Returns the commented default config template written by `config init`.
pub fn default_config_template() -> &'static str {
    r#"# Foyer configuration

# Simulated authenticator latency in milliseconds.
auth_latency_ms = 350

# Show the login hint after the first failed attempt.
login_hint = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.auth_latency_ms, 350);
        assert!(config.login_hint);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "auth_latency_ms = 0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.auth_latency_ms, 0);
        assert!(config.login_hint);
        assert_eq!(config.auth_latency(), Duration::ZERO);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "auth_latency_ms = \"soon\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed.auth_latency_ms, Config::default().auth_latency_ms);
        assert_eq!(parsed.login_hint, Config::default().login_hint);
    }
}
