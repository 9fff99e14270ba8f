use super::context::{RenderContext, Resolved};
use crate::error::{Error, Result};

/// Trait for placeholder lookup policies.
pub trait Resolver {
    /// Resolves `name` against the current scope stack.
    ///
    /// # Arguments
    /// * `name` - Placeholder name without the `${}` marker
    /// * `context` - Scopes visible at the placeholder
    ///
    /// # Returns
    /// * `Ok(Some(_))` - The value to substitute or expand
    /// * `Ok(None)` - The placeholder is left in the output untouched
    /// * `Err(_)` - The render fails
    fn resolve<'a>(
        &self,
        name: &str,
        context: &RenderContext<'a>,
    ) -> Result<Option<Resolved<'a>>>;
}

/// Innermost-scope-first lookup that fails on unbound names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeResolver;

impl Resolver for ScopeResolver {
    fn resolve<'a>(
        &self,
        name: &str,
        context: &RenderContext<'a>,
    ) -> Result<Option<Resolved<'a>>> {
        match context.lookup(name) {
            Some(resolved) => Ok(Some(resolved)),
            None => Err(Error::UnboundPlaceholder {
                name: name.to_string(),
                scopes: context.scope_chain(),
            }),
        }
    }
}
