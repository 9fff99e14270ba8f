use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Placeholder template engine for DDD entity scaffolding.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a bundle with the given bindings.
    Render(RenderArgs),
    /// List the placeholders referenced by a bundle.
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Bundle directory or `builtin:<name>`.
    #[arg(value_name = "BUNDLE")]
    pub bundle: String,

    /// Bindings as a JSON string, `-` to read from stdin, or `@path` for a JSON/YAML file.
    #[arg(short, long)]
    pub bindings: Option<String>,

    /// Write the rendered document here instead of stdout.
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file.
    #[arg(short, long)]
    pub force: bool,

    /// Fail when validation reports any diagnostic.
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Bundle directory or `builtin:<name>`.
    #[arg(value_name = "BUNDLE")]
    pub bundle: String,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
