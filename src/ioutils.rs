use std::path::{Path, PathBuf};

use crate::binding::Binding;
use crate::constants::{FILE_INDICATOR, STDIN_INDICATOR};
use crate::error::{Error, Result};

/// Ensures the output file is safe to write to.
pub fn get_output_file<P: AsRef<Path>>(output: P, force: bool) -> Result<PathBuf> {
    let output = output.as_ref();
    if output.exists() && !force {
        return Err(Error::OutputExistsError {
            output: output.display().to_string(),
        });
    }
    Ok(output.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

/// Parses binding text, YAML when `path` says so and JSON otherwise.
pub fn parse_bindings(content: &str, path: Option<&Path>) -> Result<Binding> {
    let is_yaml = path
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"));
    if is_yaml {
        Binding::from_yaml_str(content)
    } else {
        Binding::from_json_str(content)
    }
}

/// Reads bindings from a CLI argument.
///
/// # Arguments
/// * `arg` - Inline JSON, `-` for stdin, or `@path` for a JSON/YAML file
pub fn read_bindings(arg: &str) -> Result<Binding> {
    if arg == STDIN_INDICATOR {
        return parse_bindings(&read_from(std::io::stdin())?, None);
    }
    if let Some(path) = arg.strip_prefix(FILE_INDICATOR) {
        let path = Path::new(path);
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        return parse_bindings(&content, Some(path));
    }
    parse_bindings(arg, None)
}
