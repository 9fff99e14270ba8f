use crate::constants::DEFAULT_FRAGMENT_SEPARATOR;
use crate::template::Template;
use indexmap::IndexMap;

/// Sub-template expanded once per record of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    template: Template,
    separator: String,
}

impl Fragment {
    /// Creates a fragment joined with the default newline separator.
    pub fn new(template: Template) -> Self {
        Self {
            template,
            separator: DEFAULT_FRAGMENT_SEPARATOR.to_string(),
        }
    }

    pub fn parse(source: impl Into<String>) -> Self {
        Self::new(Template::parse(source))
    }

    /// Text placed between two consecutive instances.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

/// Maps block placeholder names to the fragment that expands them.
#[derive(Debug, Clone, Default)]
pub struct FragmentRegistry {
    fragments: IndexMap<String, Fragment>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    pub fn with(mut self, name: impl Into<String>, fragment: Fragment) -> Self {
        self.register(name, fragment);
        self
    }

    /// Registers `fragment` under `name`, returning the fragment it replaced.
    pub fn register(&mut self, name: impl Into<String>, fragment: Fragment) -> Option<Fragment> {
        self.fragments.insert(name.into(), fragment)
    }

    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fragment)> {
        self.fragments
            .iter()
            .map(|(name, fragment)| (name.as_str(), fragment))
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
