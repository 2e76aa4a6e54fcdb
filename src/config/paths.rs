//! Path resolution for settings and per-product preference files.

use anyhow::Result;
use std::path::{Component, Path, PathBuf};

use super::types::Config;
use crate::constants::{
    APP_NAME, CONFIG_FILENAME, LAUNCH_FILENAME, LAUNCH_SUBDIR, PREFS_FILENAME, README_FILENAME,
};
use crate::prefs::LoadError;

impl Config {
    /// Returns the platform-specific configuration directory for demo-config.
    ///
    /// Returns `~/.config/demo-config/` on Linux (`XDG_CONFIG_HOME/demo-config`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join(APP_NAME);
        Ok(dir)
    }

    /// Returns the platform-specific cache directory for demo-config.
    ///
    /// Used for the interactive editor's readline history.
    pub fn cache_dir() -> Result<PathBuf> {
        let dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))?
            .join(APP_NAME);
        Ok(dir)
    }

    /// Returns the full path to the global settings file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Resolves every file location for `product`.
    pub fn product_paths(&self, product: &str) -> Result<ProductPaths> {
        Ok(ProductPaths::new(product, &self.prefs_root()?, &self.demos_dir())?)
    }
}

/// Every file the engine touches for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPaths {
    /// `<prefs_root>/<product>`: where saves go.
    pub home_dir: PathBuf,
    /// `<demos_dir>/<product>`: the shipped demo tree.
    pub demo_dir: PathBuf,
}

impl ProductPaths {
    /// Builds the paths for `product`, which must be a single plain path
    /// component.
    pub fn new(product: &str, prefs_root: &Path, demos_dir: &Path) -> Result<Self, LoadError> {
        let mut components = Path::new(product).components();
        let single_normal = matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none()
            && !product.contains(['/', '\\']);
        if !single_normal {
            return Err(LoadError::InvalidProduct(product.to_string()));
        }
        Ok(Self {
            home_dir: prefs_root.join(product),
            demo_dir: demos_dir.join(product),
        })
    }

    /// Preference file written by saves.
    pub fn saved_prefs(&self) -> PathBuf {
        self.home_dir.join(PREFS_FILENAME)
    }

    /// Preference file shipped with the demo.
    pub fn shipped_prefs(&self) -> PathBuf {
        self.demo_dir.join(LAUNCH_SUBDIR).join(PREFS_FILENAME)
    }

    /// Search order for loading: saved first, then shipped.
    pub fn prefs_candidates(&self) -> [PathBuf; 2] {
        [self.saved_prefs(), self.shipped_prefs()]
    }

    /// Read-only command template.
    pub fn template(&self) -> PathBuf {
        self.demo_dir.join(LAUNCH_SUBDIR).join(LAUNCH_FILENAME)
    }

    /// Generated command line, read by the launcher.
    pub fn command_output(&self) -> PathBuf {
        self.home_dir.join(LAUNCH_FILENAME)
    }

    pub fn readme(&self) -> PathBuf {
        self.demo_dir.join(README_FILENAME)
    }
}
