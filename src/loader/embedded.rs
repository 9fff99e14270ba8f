use crate::error::{Error, Result};
use crate::loader::interface::SourceLoader;
use std::path::Path;

/// Loader over files compiled into the binary.
pub struct EmbeddedLoader {
    files: &'static [(&'static str, &'static str)],
}

impl EmbeddedLoader {
    pub fn new(files: &'static [(&'static str, &'static str)]) -> Self {
        Self { files }
    }

    fn find(&self, path: &Path) -> Option<&'static str> {
        let wanted = path.to_string_lossy().replace('\\', "/");
        self.files
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, content)| *content)
    }
}

impl SourceLoader for EmbeddedLoader {
    fn read(&self, path: &Path) -> Result<String> {
        self.find(path).map(str::to_string).ok_or_else(|| Error::ReadError {
            path: path.display().to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such embedded file",
            ),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.find(path).is_some()
    }
}
