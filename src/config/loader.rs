//! File loading and merging for demo-config settings.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Config;

impl Config {
    /// Reads a settings file. A missing file yields the defaults.
    pub(super) fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(config)
    }

    /// Loads the global config from `~/.config/demo-config/config.toml`.
    pub(super) fn load_global() -> Result<Self> {
        Self::load_file(&Self::config_path()?)
    }

    /// Look for demo-config.toml in current dir, then walk up to git root.
    pub(super) fn load_project() -> Result<Option<Config>> {
        let mut dir = std::env::current_dir()?;
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                return Self::load_file(&candidate).map(Some);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Merge project config over global config.
    /// Project values win when present.
    pub(super) fn merge(global: Config, project: Config) -> Config {
        Config {
            prefs_root: project.prefs_root.or(global.prefs_root),
            demos_dir: project.demos_dir.or(global.demos_dir),
            log_level: project.log_level.or(global.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("demos_dir = \"/opt/demos\"\n").unwrap();
        assert_eq!(config.demos_dir.as_deref(), Some("/opt/demos"));
        assert!(config.prefs_root.is_none());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "demos_dir = [").unwrap();
        assert!(Config::load_file(&path).is_err());
    }

    #[test]
    fn test_merge_prefers_project() {
        let global = Config {
            prefs_root: Some("/global/prefs".into()),
            demos_dir: Some("/global/demos".into()),
            log_level: None,
        };
        let project = Config {
            prefs_root: None,
            demos_dir: Some("demos".into()),
            log_level: Some("debug".into()),
        };
        let merged = Config::merge(global, project);
        assert_eq!(merged.prefs_root.as_deref(), Some("/global/prefs"));
        assert_eq!(merged.demos_dir.as_deref(), Some("demos"));
        assert_eq!(merged.log_level.as_deref(), Some("debug"));
    }
}
