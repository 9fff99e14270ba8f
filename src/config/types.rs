//! Basic types for bundle configuration

use crate::constants::{DEFAULT_FRAGMENT_SEPARATOR, DEFAULT_TEMPLATE_FILE};
use serde::Deserialize;
use std::path::PathBuf;

/// Where a fragment's text comes from
#[derive(Debug, Deserialize)]
pub struct FragmentConfig {
    /// Inline fragment text
    #[serde(default)]
    pub template: Option<String>,
    /// Fragment file, relative to the bundle directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Text placed between two consecutive instances
    #[serde(default = "get_default_separator")]
    pub separator: String,
}

/// Resolved origin of a fragment's text.
#[derive(Debug, PartialEq)]
pub enum FragmentSource<'a> {
    Inline(&'a str),
    File(&'a PathBuf),
}

impl FragmentConfig {
    /// Returns the configured source, or `None` unless exactly one is set.
    pub fn source(&self) -> Option<FragmentSource<'_>> {
        match (&self.template, &self.path) {
            (Some(template), None) => Some(FragmentSource::Inline(template)),
            (None, Some(path)) => Some(FragmentSource::File(path)),
            _ => None,
        }
    }
}

pub fn get_default_separator() -> String {
    DEFAULT_FRAGMENT_SEPARATOR.to_string()
}

pub fn get_default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_FILE)
}
