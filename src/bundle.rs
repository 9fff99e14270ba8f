//! A root template together with the fragments its blocks expand through.

use crate::{
    binding::Binding,
    config::{Config, ConfigV1, FragmentSource},
    constants::{CONFIG_FILENAMES, ROOT_TEMPLATE_LABEL},
    error::{Error, Result},
    loader::{LocalLoader, SourceLoader},
    renderer::{Fragment, FragmentRegistry, RenderedDocument, Renderer, Resolver},
    template::Template,
};
use std::path::Path;

/// Parsed template and fragment registry, reusable across renders.
#[derive(Debug, Clone)]
pub struct Bundle {
    template: Template,
    fragments: FragmentRegistry,
}

impl Bundle {
    pub fn new(template: Template, fragments: FragmentRegistry) -> Self {
        Self {
            template,
            fragments,
        }
    }

    /// Loads a bundle directory containing a manifest.
    pub fn load<P: AsRef<Path>>(bundle_root: P) -> Result<Self> {
        let bundle_root = bundle_root.as_ref();
        let Config::V1(config) = Config::load_config(bundle_root)?;
        Self::from_config(&config, &LocalLoader::new(bundle_root))
    }

    /// Loads a bundle whose manifest is read through `loader` as well.
    pub fn from_loader(loader: &dyn SourceLoader) -> Result<Self> {
        let manifest = CONFIG_FILENAMES
            .iter()
            .find(|name| loader.exists(Path::new(name)))
            .ok_or_else(|| Error::ConfigNotFound {
                bundle_dir: "<embedded>".to_string(),
                config_files: CONFIG_FILENAMES.join(", "),
            })?;
        let content = loader.read(Path::new(manifest))?;
        let Config::V1(config) = Config::from_str_named(manifest, &content)?;
        Self::from_config(&config, loader)
    }

    /// Builds a bundle from a parsed manifest.
    ///
    /// One trailing newline is stripped from fragment files so that a fragment's
    /// separator alone decides what sits between instances.
    pub fn from_config(config: &ConfigV1, loader: &dyn SourceLoader) -> Result<Self> {
        config.validate()?;

        let template = Template::parse(loader.read(&config.template)?);

        let mut fragments = FragmentRegistry::new();
        for (name, fragment_config) in &config.fragments {
            let source = match fragment_config.source() {
                Some(FragmentSource::Inline(text)) => text.to_string(),
                Some(FragmentSource::File(path)) => {
                    strip_trailing_newline(loader.read(path)?)
                }
                None => {
                    return Err(Error::ConfigValidation(format!(
                        "fragment '{name}' has no source"
                    )))
                }
            };
            log::debug!("Registering fragment '{name}'");
            let separator = fragment_config.separator.as_str();
            let fragment = Fragment::parse(source).with_separator(separator);
            fragments.register(name.as_str(), fragment);
        }

        Ok(Self {
            template,
            fragments,
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn fragments(&self) -> &FragmentRegistry {
        &self.fragments
    }

    pub fn render(&self, binding: &Binding) -> Result<RenderedDocument> {
        Renderer::new(&self.fragments)
            .render(&self.template, binding)
    }

    pub fn render_with(
        &self,
        binding: &Binding,
        resolver: &dyn Resolver,
    ) -> Result<RenderedDocument> {
        Renderer::new(&self.fragments)
            .with_resolver(resolver)
            .render(&self.template, binding)
    }

    /// Placeholder names per template: the root first, then each fragment.
    pub fn placeholders(&self) -> Vec<(&str, Vec<&str>)> {
        let fragments = self
            .fragments
            .iter()
            .map(|(name, fragment)| (name, fragment.template()));
        std::iter::once((ROOT_TEMPLATE_LABEL, &self.template))
            .chain(fragments)
            .map(|(label, template)| {
                let names = template.placeholders().into_iter().collect();
                (label, names)
            })
            .collect()
    }
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
