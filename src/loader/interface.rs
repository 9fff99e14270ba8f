use crate::error::Result;
use std::path::Path;

/// Trait for reading bundle files from different sources.
pub trait SourceLoader {
    /// Reads a bundle file.
    ///
    /// # Arguments
    /// * `path` - Path relative to the bundle root
    ///
    /// # Returns
    /// * `Result<String>` - The file contents
    fn read(&self, path: &Path) -> Result<String>;

    /// Whether `path` exists in this source.
    fn exists(&self, path: &Path) -> bool;
}
