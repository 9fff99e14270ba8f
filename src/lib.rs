//! Stencil renders `${name}` placeholder templates into source files.
//!
//! A template is parsed once into literal and placeholder segments. Rendering
//! resolves each placeholder against a stack of scopes: scalars are substituted
//! verbatim, and placeholders with a registered fragment expand that fragment
//! once per bound record. The rendered text is then checked for leftover
//! markers before it is handed back to the caller.

/// Values bound to placeholders.
pub mod binding;

/// Built-in template bundles.
pub mod builtin;

/// Root template plus fragment registry.
pub mod bundle;

/// Handles argument parsing.
pub mod cli;

/// Bundle manifest handling.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Sources bundle files can be read from.
pub mod loader;

/// Placeholder resolution, block expansion and output assembly.
pub mod renderer;

/// Template parsing.
pub mod template;

/// Post-render diagnostics.
pub mod validation;

pub use binding::{Binding, Record, Value};
pub use bundle::Bundle;
pub use error::{Error, Result};
pub use renderer::{render, Fragment, FragmentRegistry, RenderedDocument, Renderer};
pub use template::Template;
pub use validation::{validate, Diagnostic};
