//! Global configuration for linkmatch

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global linkmatch configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default project base path
    #[serde(default)]
    pub base: Option<String>,

    /// Use loose matching unless a mode is given on the command line
    #[serde(default)]
    pub loose: bool,
}

impl Config {
    /// Load config from default location (~/.config/linkmatch/config.toml)
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Get default config file path
    /// Checks ~/.config/linkmatch/config.toml first (XDG style),
    /// then falls back to OS-specific location
    pub fn default_path() -> PathBuf {
        // Prefer XDG-style ~/.config/linkmatch/config.toml
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("linkmatch").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }

        // Fall back to OS-specific config dir
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("linkmatch")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base = \"/home/u/proj/\"\nloose = true").unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.base.as_deref(), Some("/home/u/proj/"));
        assert!(config.loose);
    }

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.base.is_none());
        assert!(!config.loose);
    }
}
