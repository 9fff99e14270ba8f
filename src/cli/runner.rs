use crate::{
    binding::Binding,
    bundle::Bundle,
    cli::{Commands, InspectArgs, RenderArgs},
    error::Result,
    ioutils::{get_output_file, read_bindings, write_file},
    loader::get_bundle,
};

/// Main CLI runner that dispatches a parsed command
pub struct Runner {
    command: Commands,
}

impl Runner {
    pub fn new(command: Commands) -> Self {
        Self { command }
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Render(args) => Self::render(&args),
            Commands::Inspect(args) => Self::inspect(&args),
        }
    }

    /// Renders the bundle and writes the result to the output file or stdout
    fn render(args: &RenderArgs) -> Result<()> {
        let text = render_to_string(args)?;

        match &args.output {
            Some(output) => {
                let target = get_output_file(output, args.force)?;
                write_file(&text, &target)?;
                log::info!("Writing to '{}'", target.display());
                println!("Rendered {} to {}.", args.bundle, target.display());
            }
            None => print!("{text}"),
        }
        Ok(())
    }

    fn inspect(args: &InspectArgs) -> Result<()> {
        let bundle = get_bundle(&args.bundle)?;
        print!("{}", describe_placeholders(&bundle));
        Ok(())
    }
}

/// Loads the bundle and bindings named by `args` and renders them.
///
/// Diagnostics fail the call under `--strict` and are logged as warnings otherwise.
pub fn render_to_string(args: &RenderArgs) -> Result<String> {
    let bundle = get_bundle(&args.bundle)?;
    let binding = match &args.bindings {
        Some(arg) => read_bindings(arg)?,
        None => Binding::new(),
    };
    log::debug!("Loaded {} binding(s)", binding.len());

    let document = bundle.render(&binding)?;
    if args.strict {
        return document.into_strict();
    }
    for diagnostic in document.diagnostics() {
        log::warn!("{diagnostic}");
    }
    Ok(document.into_text())
}

/// One section per template: its label, then one `${name}` per line.
pub fn describe_placeholders(bundle: &Bundle) -> String {
    let mut out = String::new();
    for (label, names) in bundle.placeholders() {
        out.push_str(label);
        out.push_str(":\n");
        for name in names {
            out.push_str(&format!("  ${{{name}}}\n"));
        }
    }
    out
}

/// Main entry point for CLI execution
pub fn run(command: Commands) -> Result<()> {
    Runner::new(command).run()
}
