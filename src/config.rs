use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Marker printed in front of every price
    pub currency_marker: String,
    /// Heading of the menu screen
    pub menu_title: String,
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_marker: "R".to_string(),
            menu_title: "Christoffel’s Current Menu 🍽️".to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".dish-menu"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults.
    ///
    /// A missing file is normal. An unreadable or malformed file is logged
    /// and ignored.
    pub fn load() -> Config {
        let Some(config_path) = Self::config_path() else {
            return Config::default();
        };
        if !config_path.exists() {
            return Config::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "using default config");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read {}: {}", path.display(), e))?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Price as displayed to the user, e.g. `R35.50`
    pub fn format_price(&self, price: &str) -> String {
        format!("{}{}", self.currency_marker, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.currency_marker, "R");
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.format_price("35.50"), "R35.50");
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"currency_marker": "$"}}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.currency_marker, "$");
        assert_eq!(config.menu_title, Config::default().menu_title);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
