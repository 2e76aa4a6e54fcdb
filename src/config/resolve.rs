//! Environment variable substitution and effective settings.

use std::path::PathBuf;

use anyhow::Result;

use super::types::Config;
use crate::constants::{DEFAULT_DEMOS_DIR, DEFAULT_LOG_LEVEL, HOME_PREFS_DIR};

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        for field in [&mut self.prefs_root, &mut self.demos_dir, &mut self.log_level] {
            if let Some(value) = field {
                *value = Self::resolve_str(value);
            }
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        while let Some(start) = result.find("{env:") {
            if let Some(end) = result[start..].find('}') {
                let var_name = &result[start + 5..start + end];
                let value = std::env::var(var_name).unwrap_or_default();
                result = format!(
                    "{}{}{}",
                    &result[..start],
                    value,
                    &result[start + end + 1..]
                );
            } else {
                break;
            }
        }
        result
    }

    /// Directory holding saved per-product preferences.
    ///
    /// Falls back to `~/.loki/loki_demos`.
    pub fn prefs_root(&self) -> Result<PathBuf> {
        match &self.prefs_root {
            Some(root) => Ok(PathBuf::from(root)),
            None => {
                let home = dirs::home_dir()
                    .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
                Ok(home.join(HOME_PREFS_DIR))
            }
        }
    }

    /// Directory holding the shipped demos.
    pub fn demos_dir(&self) -> PathBuf {
        PathBuf::from(self.demos_dir.as_deref().unwrap_or(DEFAULT_DEMOS_DIR))
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_str_replaces_env_vars() {
        std::env::set_var("DEMO_CONFIG_TEST_ROOT", "/srv/games");
        assert_eq!(
            Config::resolve_str("{env:DEMO_CONFIG_TEST_ROOT}/prefs"),
            "/srv/games/prefs"
        );
        assert_eq!(Config::resolve_str("{env:DEMO_CONFIG_TEST_UNSET_VAR}x"), "x");
        assert_eq!(Config::resolve_str("{env:broken"), "{env:broken");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.demos_dir(), PathBuf::from("demos"));
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn test_explicit_prefs_root() {
        let mut config = Config {
            prefs_root: Some("{env:DEMO_CONFIG_TEST_ROOT2}/saved".into()),
            ..Config::default()
        };
        std::env::set_var("DEMO_CONFIG_TEST_ROOT2", "/var/lib");
        config.resolve_substitutions();
        assert_eq!(config.prefs_root().unwrap(), PathBuf::from("/var/lib/saved"));
    }
}
