use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User preferences stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Start a fresh task list when signing out
    #[serde(default)]
    pub reset_on_sign_out: bool,

    /// Show the time each task was added
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            reset_on_sign_out: false,
            show_timestamps: true,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    crate::ticker::DEFAULT_TICK_MS
}

fn default_true() -> bool {
    true
}

/// Returns the base taskmates directory: ~/.taskmates/
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".taskmates"))
}

/// Default location of config.json
pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.json"))
}

/// Default location of the log file
pub fn log_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("taskmates.log"))
}

/// Load config from `path` (or return defaults if it doesn't exist)
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_rate_ms, 250);
        assert!(!config.reset_on_sign_out);
        assert!(config.show_timestamps);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "reset_on_sign_out": true }"#).unwrap();

        let config = load(&path).unwrap();
        assert_eq!(
            config,
            Config {
                tick_rate_ms: 250,
                reset_on_sign_out: true,
                show_timestamps: true,
            }
        );
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let config = Config {
            tick_rate_ms: 100,
            reset_on_sign_out: true,
            show_timestamps: false,
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
