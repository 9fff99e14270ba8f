use crate::error::{Error, Result};
use crate::loader::interface::SourceLoader;
use std::path::{Path, PathBuf};

/// Loader for bundles on the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    root: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader rooted at the bundle directory.
    pub fn new(root: P) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.as_ref().join(path)
    }
}

impl<P: AsRef<Path>> SourceLoader for LocalLoader<P> {
    fn read(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        log::debug!("Reading {}", full_path.display());
        std::fs::read_to_string(&full_path).map_err(|source| Error::ReadError {
            path: full_path.display().to_string(),
            source,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }
}
