//! Constants used throughout stencil

/// Bundle manifest file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["stencil.json", "stencil.yaml", "stencil.yml"];

/// Root template file used when the manifest does not name one
pub const DEFAULT_TEMPLATE_FILE: &str = "template.stencil";

/// Text placed between two consecutive fragment instances by default
pub const DEFAULT_FRAGMENT_SEPARATOR: &str = "\n";

/// Label of the outermost scope in scope chains
pub const ROOT_SCOPE: &str = "root";

/// Label of the root template when listing placeholders
pub const ROOT_TEMPLATE_LABEL: &str = "<root>";

/// Separator used when printing scope chains
pub const SCOPE_CHAIN_SEPARATOR: &str = " > ";

/// Prefix selecting a bundle compiled into the binary
pub const BUILTIN_PREFIX: &str = "builtin:";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Prefix marking a CLI argument as a path to read from
pub const FILE_INDICATOR: &str = "@";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
