//! One load/edit/save cycle for a single product.
//!
//! A [`Session`] locates the product's preference file (saved copy first,
//! shipped copy second), owns the parsed [`PrefSet`] while a front end
//! edits it, and writes both the preference file and the generated launch
//! command back under the product's home directory.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ProductPaths;
use crate::prefs::{
    template_line, LoadError, MalformedLine, ParseError, PathSource, PrefSet, SaveError,
    SerializeError,
};

/// The two files a save would write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub prefs_text: String,
    /// Generated command line, `None` when the product ships no template.
    pub command: Option<String>,
}

/// Where a save wrote its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub prefs_path: PathBuf,
    pub command_path: Option<PathBuf>,
}

/// An open preference set for one product.
#[derive(Debug)]
pub struct Session {
    product: String,
    paths: ProductPaths,
    prefs: PrefSet,
    source: PathBuf,
    diagnostics: Vec<MalformedLine>,
}

impl Session {
    /// Loads the first readable candidate from [`ProductPaths::prefs_candidates`].
    ///
    /// Malformed lines are kept in [`Session::diagnostics`]; a missing file
    /// or a missing title line is fatal.
    pub fn open(product: impl Into<String>, paths: ProductPaths) -> Result<Self, LoadError> {
        let product = product.into();
        let searched = paths.prefs_candidates();
        let mut last_error = None;

        for path in &searched {
            match fs::read(path) {
                Ok(bytes) => {
                    info!(product = %product, path = %path.display(), "loading preferences");
                    let text = String::from_utf8_lossy(&bytes);
                    if let Cow::Owned(_) = text {
                        warn!(
                            path = %path.display(),
                            "preference file is not UTF-8, invalid bytes replaced"
                        );
                    }
                    let report = PrefSet::parse(&text).map_err(|e| match e {
                        ParseError::MissingTitle => LoadError::MissingTitle { path: path.clone() },
                    })?;
                    return Ok(Self {
                        product,
                        paths,
                        prefs: report.prefs,
                        source: path.clone(),
                        diagnostics: report.diagnostics,
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "no preference file");
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "preference file unreadable");
                    last_error = Some((path.clone(), e));
                }
            }
        }

        Err(match last_error {
            Some((path, source)) => LoadError::Unreadable { path, source },
            None => LoadError::NotFound {
                searched: searched.to_vec(),
            },
        })
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn paths(&self) -> &ProductPaths {
        &self.paths
    }

    pub fn prefs(&self) -> &PrefSet {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut PrefSet {
        &mut self.prefs
    }

    /// File the preferences were loaded from (or last saved to).
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn diagnostics(&self) -> &[MalformedLine] {
        &self.diagnostics
    }

    /// Reads the command template. Never fails: a missing or empty
    /// template means no command is generated.
    pub fn template(&self) -> Option<String> {
        let path = self.paths.template();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let line = template_line(&contents).map(str::to_string);
                if line.is_none() {
                    info!(path = %path.display(), "launch template is empty");
                }
                line
            }
            Err(e) => {
                info!(path = %path.display(), error = %e, "no launch template");
                None
            }
        }
    }

    /// Synthesized launch command for the current values.
    pub fn command(&self) -> Option<String> {
        self.template().map(|t| self.prefs.synthesize(&t))
    }

    /// Produces what [`Session::save`] would write, without touching disk.
    pub fn render(&self) -> Result<Rendered, SerializeError> {
        Ok(Rendered {
            prefs_text: self.prefs.to_prefs_text()?,
            command: self.command(),
        })
    }

    /// Writes the preference file and, when a template exists, the launch
    /// command.
    ///
    /// Pending path edits from `editors` are applied first. Nothing is
    /// written if any value cannot be serialized.
    pub fn save(&mut self, editors: Option<&dyn PathSource>) -> Result<SaveOutcome, SaveError> {
        if let Some(editors) = editors {
            self.prefs.refresh_paths(editors)?;
        }
        let rendered = self.render()?;

        let dir = &self.paths.home_dir;
        create_private_dir(dir).map_err(|source| SaveError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let prefs_path = self.paths.saved_prefs();
        write_file(&prefs_path, &rendered.prefs_text)?;
        info!(path = %prefs_path.display(), "saved preferences");
        self.source = prefs_path.clone();

        let command_path = match rendered.command {
            Some(command) => {
                let path = self.paths.command_output();
                write_file(&path, &format!("{}\n", command))?;
                info!(path = %path.display(), "wrote launch command");
                Some(path)
            }
            None => None,
        };

        Ok(SaveOutcome {
            prefs_path,
            command_path,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), SaveError> {
    fs::write(path, contents).map_err(|source| SaveError::Unwritable {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates `path` and any missing parents, owner-only on Unix.
fn create_private_dir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::constants::PREFS_DIR_MODE);
    }
    builder.create(path)
}
