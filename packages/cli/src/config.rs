use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tessera_pages::AutosaveConfig;
use tessera_project::{Limits, VersionPolicy};

pub const DEFAULT_CONFIG_NAME: &str = "tessera.config.json";

/// Tessera configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Delay between autosave passes
    pub autosave_interval_ms: u64,

    /// Minimum gap between automatic versions
    pub version_interval_secs: u64,

    /// Minimum design-system share before the check warns, in percent
    pub design_system_threshold: u8,

    /// Largest canvas document accepted for storage
    pub max_canvas_bytes: usize,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = Self::path_in(cwd);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_CONFIG_NAME)
    }

    pub fn autosave(&self) -> AutosaveConfig {
        AutosaveConfig {
            interval: Duration::from_millis(self.autosave_interval_ms),
        }
    }

    pub fn version_policy(&self) -> VersionPolicy {
        VersionPolicy {
            interval: Duration::from_secs(self.version_interval_secs),
        }
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_canvas_bytes: self.max_canvas_bytes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autosave_interval_ms: 3000,
            version_interval_secs: 300,
            design_system_threshold: 80,
            max_canvas_bytes: 5 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "autosaveIntervalMs": 1500,
            "designSystemThreshold": 60
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.autosave_interval_ms, 1500);
        assert_eq!(config.design_system_threshold, 60);
        assert_eq!(config.version_interval_secs, 300);
        assert_eq!(config.autosave().interval, Duration::from_millis(1500));
    }

    #[test]
    fn test_default_config_matches_library_defaults() {
        let config = Config::default();
        assert_eq!(config.autosave(), AutosaveConfig::default());
        assert_eq!(config.version_policy(), VersionPolicy::default());
        assert_eq!(config.limits(), Limits::default());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), r#"{"maxCanvasBytes": 1024}"#).unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.limits().max_canvas_bytes, 1024);
        assert_eq!(config.autosave_interval_ms, 3000);
    }

    #[test]
    fn test_load_rejects_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), "{nope").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
