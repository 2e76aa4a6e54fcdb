//! Settings and path resolution for demo-config.
//!
//! Settings are TOML at the platform's XDG config path
//! (e.g. `~/.config/demo-config/config.toml` on Linux), overlaid by a
//! `demo-config.toml` found between the working directory and the git root.

mod loader;
mod paths;
mod resolve;
mod types;

pub use paths::ProductPaths;
pub use types::Config;

use anyhow::Result;

impl Config {
    /// Load config with precedence: project > global > defaults.
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project()?;

        let mut config = global;
        if let Some(proj) = project {
            config = Self::merge(config, proj);
        }

        config.resolve_substitutions();
        Ok(config)
    }
}
