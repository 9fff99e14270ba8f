use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read '{path}'. Original error: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// No scope in the render context defines the placeholder.
    #[error("Unbound placeholder '${{{name}}}' (scopes: {scopes}).")]
    UnboundPlaceholder { name: String, scopes: String },

    /// A scalar site received a structured value, or a block site received a scalar.
    #[error(
        "Binding shape mismatch for '${{{name}}}': expected {expected}, found {found} (scopes: {scopes})."
    )]
    BindingShapeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
        scopes: String,
    },

    /// A fragment expands its own block, directly or through another fragment.
    #[error("Fragment '{name}' expands itself recursively (scopes: {scopes}).")]
    RecursiveFragment { name: String, scopes: String },

    #[error("Invalid binding for '{name}': {reason}.")]
    InvalidBinding { name: String, reason: String },

    /// Raised only when diagnostics are promoted to errors.
    #[error("Rendered document failed validation with {count} diagnostic(s):\n{details}")]
    ValidationFailed { count: usize, details: String },

    #[error("No configuration file found in '{bundle_dir}'. Tried: {config_files}.")]
    ConfigNotFound {
        bundle_dir: String,
        config_files: String,
    },

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    #[error("Unknown built-in bundle '{0}'.")]
    UnknownBuiltin(String),

    #[error("Cannot proceed: output file '{output}' already exists. Use --force to overwrite it.")]
    OutputExistsError { output: String },
}

/// Convenience type alias for Results with stencil's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
