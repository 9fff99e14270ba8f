//! Parsed template documents
//!
//! This module contains the template representation used by the renderer:
//! - `tokenizer`: Lazy splitting of template text into literals and placeholders
//! - `Template`: An owned, reusable sequence of segments

pub mod tokenizer;

use indexmap::IndexSet;
use std::fmt::{self, Display};
pub use tokenizer::{is_placeholder_name, tokenize, Token, Tokenizer};

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Placeholder(name) => write!(f, "${{{name}}}"),
        }
    }
}

impl From<Token<'_>> for Segment {
    fn from(token: Token<'_>) -> Self {
        match token {
            Token::Literal(text) => Segment::Literal(text.to_string()),
            Token::Placeholder(name) => Segment::Placeholder(name.to_string()),
        }
    }
}

/// A template parsed once and rendered any number of times.
///
/// Writing the segments back in order reproduces the source text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source`. Parsing never fails; malformed markers stay literal.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = tokenize(&source).map(Segment::from).collect();
        Self { source, segments }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn placeholders(&self) -> IndexSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Placeholder(_)))
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments
            .iter()
            .try_for_each(|segment| Display::fmt(segment, f))
    }
}
