//! Struct definitions and serde defaults for demo-config settings.

use serde::{Deserialize, Serialize};

/// Root settings, deserialized from `config.toml` / `demo-config.toml`.
///
/// Every field is optional so the tool runs with defaults when no config
/// file exists.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Directory holding per-product saved preferences
    /// (default `~/.loki/loki_demos`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefs_root: Option<String>,
    /// Directory holding the shipped demos (default `demos`, relative to
    /// the working directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demos_dir: Option<String>,
    /// `tracing` filter used when `RUST_LOG` is unset (default `warn`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}
