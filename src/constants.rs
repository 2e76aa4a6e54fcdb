//! Centralized constants for demo-config.
//!
//! File names, directory names and defaults live here so they can be
//! changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "demo-config";

/// Global settings filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project settings filename.
pub const PROJECT_CONFIG_FILENAME: &str = "demo-config.toml";

// --- Product layout ---

/// Saved preferences live under `$HOME/<HOME_PREFS_DIR>/<product>/`.
pub const HOME_PREFS_DIR: &str = ".loki/loki_demos";

/// Default root of the shipped demo tree.
pub const DEFAULT_DEMOS_DIR: &str = "demos";

/// Subdirectory of a demo holding its launch files.
pub const LAUNCH_SUBDIR: &str = "launch";

/// Preference file name, both shipped and saved.
pub const PREFS_FILENAME: &str = "prefs.txt";

/// Command template (shipped) and generated command (saved) file name.
pub const LAUNCH_FILENAME: &str = "launch.txt";

/// Per-demo readme.
pub const README_FILENAME: &str = "README";

/// Permissions for directories created on save.
pub const PREFS_DIR_MODE: u32 = 0o700;

// --- Logging ---

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// --- Interactive editor ---

/// Readline history filename.
pub const HISTORY_FILENAME: &str = "edit_history.txt";
