pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, Cli, Commands, InspectArgs, RenderArgs,
};
pub use runner::{describe_placeholders, render_to_string, run};
