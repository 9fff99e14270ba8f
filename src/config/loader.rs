//! Configuration loading and management

use crate::config::types::{get_default_template_path, FragmentConfig};
use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use crate::template::is_placeholder_name;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure of a template bundle
#[derive(Debug, Deserialize)]
pub struct ConfigV1 {
    #[serde(default = "get_default_template_path")]
    pub template: PathBuf,
    #[serde(default)]
    pub fragments: IndexMap<String, FragmentConfig>,
}

impl ConfigV1 {
    pub fn validate(&self) -> Result<(), Error> {
        if self.template.as_os_str().is_empty() {
            return Err(Error::ConfigValidation("template must not be empty".into()));
        }
        for (name, fragment) in &self.fragments {
            if !is_placeholder_name(name) {
                return Err(Error::ConfigValidation(format!(
                    "fragment name '{name}' must only contain letters, digits and underscores"
                )));
            }
            if fragment.source().is_none() {
                return Err(Error::ConfigValidation(format!(
                    "fragment '{name}' must set exactly one of 'template' or 'path'"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    /// Parses manifest text, choosing the format from the file name.
    pub fn from_str_named(file_name: &str, content: &str) -> Result<Self> {
        let config: Config = if file_name.ends_with(".json") {
            serde_json::from_str(content)?
        } else {
            serde_yaml::from_str(content)?
        };
        Ok(config)
    }

    pub fn load_config<P: AsRef<Path>>(bundle_root: P) -> Result<Self> {
        let bundle_root = bundle_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = bundle_root.join(config_file_name);

            if config_file_path.exists() {
                log::debug!("Loading configuration from {}", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path).map_err(
                    |source| Error::ReadError {
                        path: config_file_path.display().to_string(),
                        source,
                    },
                )?;
                return Self::from_str_named(config_file_name, &content);
            }
        }

        Err(Error::ConfigNotFound {
            bundle_dir: bundle_root.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }
}
