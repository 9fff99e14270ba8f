use crate::bundle::Bundle;
use crate::constants::BUILTIN_PREFIX;
use crate::error::Result;
use std::path::PathBuf;

pub mod embedded;
pub mod interface;
pub mod local;

pub use embedded::EmbeddedLoader;
pub use interface::SourceLoader;
pub use local::LocalLoader;

#[derive(Debug, PartialEq)]
pub enum BundleSource {
    /// Bundle directory on the local filesystem
    FileSystem(PathBuf),
    /// Bundle compiled into the binary
    Builtin(String),
}

impl BundleSource {
    /// Interprets `builtin:<name>` as a built-in bundle and anything else as a path.
    pub fn from_string(s: &str) -> Self {
        match s.strip_prefix(BUILTIN_PREFIX) {
            Some(name) => BundleSource::Builtin(name.to_string()),
            None => BundleSource::FileSystem(PathBuf::from(s)),
        }
    }
}

impl std::fmt::Display for BundleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            BundleSource::Builtin(name) => write!(f, "built-in bundle: '{name}'"),
        }
    }
}

/// Loads the bundle named by a CLI argument.
///
/// # Arguments
/// * `s` - Bundle directory or `builtin:<name>`
///
/// # Returns
/// * `Result<Bundle>` - The parsed template and fragments
pub fn get_bundle(s: &str) -> Result<Bundle> {
    let source = BundleSource::from_string(s);
    log::debug!("Loading bundle from {source}");
    match source {
        BundleSource::FileSystem(path) => Bundle::load(path),
        BundleSource::Builtin(name) => crate::builtin::load(&name),
    }
}
