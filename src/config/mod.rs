//! Configuration management for template bundles
//!
//! This module contains the configuration system components:
//! - `types`: Fragment definitions and defaults
//! - `loader`: Manifest file loading and parsing

pub mod loader;
pub mod types;


// Re-export commonly used types for convenience
pub use loader::{Config, ConfigV1};
pub use types::{FragmentConfig, FragmentSource};
