//! Template rendering
//!
//! - `context`: The scope stack consulted while rendering
//! - `resolver`: Placeholder lookup policies
//! - `fragments`: Fragment registry for repeated blocks
//! - `expander`: Per-record expansion of fragments

pub mod context;
mod expander;
pub mod fragments;
pub mod resolver;

pub use context::{RenderContext, Resolved, Scope};
pub use fragments::{Fragment, FragmentRegistry};
pub use resolver::{Resolver, ScopeResolver};

use crate::{
    binding::Binding,
    error::{Error, Result},
    template::{Segment, Template},
    validation::{Diagnostic, Validator},
};
use log::debug;

/// Output of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    text: String,
    diagnostics: Vec<Diagnostic>,
}

impl RenderedDocument {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether validation found nothing to report.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn into_parts(self) -> (String, Vec<Diagnostic>) {
        (self.text, self.diagnostics)
    }

    /// Returns the text only if there are no diagnostics.
    pub fn into_strict(self) -> Result<String> {
        if self.is_clean() {
            return Ok(self.text);
        }
        let details = self
            .diagnostics
            .iter()
            .map(|diagnostic| format!("  - {diagnostic}"))
            .collect::<Vec<_>>()
            .join("\n");
        Err(Error::ValidationFailed {
            count: self.diagnostics.len(),
            details,
        })
    }
}

/// Combines a template with a binding.
///
/// Placeholders whose name has a registered fragment are block sites and must be
/// bound to a record or a repeated block; every other placeholder is a scalar site.
pub struct Renderer<'r> {
    fragments: &'r FragmentRegistry,
    resolver: &'r dyn Resolver,
    validator: Validator,
}

impl<'r> Renderer<'r> {
    /// Creates a renderer using innermost-first scope resolution.
    pub fn new(fragments: &'r FragmentRegistry) -> Self {
        Self {
            fragments,
            resolver: &ScopeResolver,
            validator: Validator,
        }
    }

    /// Replaces the lookup policy.
    pub fn with_resolver(mut self, resolver: &'r dyn Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Renders `template` against `binding`.
    ///
    /// # Returns
    /// * `Ok(RenderedDocument)` - Output text with any validation diagnostics
    /// * `Err(Error)` - An unbound name or a shape mismatch; no text is produced
    pub fn render(&self, template: &Template, binding: &Binding) -> Result<RenderedDocument> {
        let mut context = RenderContext::new(binding);
        let mut text = String::with_capacity(template.source().len());
        let mut diagnostics = Vec::new();

        self.render_into(template, &mut context, &mut text, &mut diagnostics)?;
        diagnostics.extend(self.validator.validate(&text));

        debug!(
            "Rendered {} byte(s) with {} diagnostic(s)",
            text.len(),
            diagnostics.len()
        );
        Ok(RenderedDocument { text, diagnostics })
    }

    pub(crate) fn render_into<'a>(
        &self,
        template: &Template,
        context: &mut RenderContext<'a>,
        output: &mut String,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    self.substitute(name, context, output, diagnostics)?
                }
            }
        }
        Ok(())
    }

    fn substitute<'a>(
        &self,
        name: &str,
        context: &mut RenderContext<'a>,
        output: &mut String,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let Some(resolved) = self.resolver.resolve(name, context)? else {
            debug!("Resolver skipped '${{{name}}}', keeping the marker");
            output.push_str(&format!("${{{name}}}"));
            return Ok(());
        };

        match (resolved, self.fragments.get(name)) {
            (Resolved::Scalar(text), None) => output.push_str(text),
            (Resolved::Block(records), Some(fragment)) => {
                self.expand(name, records, fragment, context, output, diagnostics)?
            }
            (Resolved::Record(record), Some(fragment)) => self.expand(
                name,
                std::slice::from_ref(record),
                fragment,
                context,
                output,
                diagnostics,
            )?,
            (resolved, fragment) => {
                return Err(Error::BindingShapeMismatch {
                    name: name.to_string(),
                    expected: if fragment.is_some() {
                        "repeated block or record"
                    } else {
                        "scalar"
                    },
                    found: resolved.shape(),
                    scopes: context.scope_chain(),
                })
            }
        }
        Ok(())
    }
}

/// Renders `template` with the default resolver.
pub fn render(
    template: &Template,
    binding: &Binding,
    fragments: &FragmentRegistry,
) -> Result<RenderedDocument> {
    Renderer::new(fragments).render(template, binding)
}
