use regex::Regex;
use std::sync::LazyLock;

/// `${name}` where name is letters, digits or underscores.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
});

/// A borrowed piece of template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied to the output verbatim.
    Literal(&'a str),
    /// Name between `${` and `}`.
    Placeholder(&'a str),
}

/// Lazy splitter over template text.
///
/// Anything that is not a well-formed `${name}` stays literal: a lone `$`, an
/// unterminated `${`, an empty `${}` and names with characters outside
/// `[A-Za-z0-9_]`. Consecutive literal text is always yielded as one token.
pub struct Tokenizer<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.source.len() {
            return None;
        }

        let Some(captures) = PLACEHOLDER.captures_at(self.source, self.cursor) else {
            let rest = &self.source[self.cursor..];
            self.cursor = self.source.len();
            return Some(Token::Literal(rest));
        };

        let whole = captures.get(0)?;
        if whole.start() > self.cursor {
            let literal = &self.source[self.cursor..whole.start()];
            self.cursor = whole.start();
            return Some(Token::Literal(literal));
        }

        self.cursor = whole.end();
        captures
            .get(1)
            .map(|name| Token::Placeholder(name.as_str()))
    }
}

/// Splits `source` into literal and placeholder tokens in source order.
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer::new(source)
}

/// Whether `name` could appear between `${` and `}`.
pub fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &str) -> Vec<Token<'_>> {
        tokenize(source).collect()
    }

    #[test]
    fn splits_literals_and_placeholders() {
        assert_eq!(
            collect("Hello ${name}!"),
            vec![
                Token::Literal("Hello "),
                Token::Placeholder("name"),
                Token::Literal("!")
            ]
        );
    }

    #[test]
    fn adjacent_placeholders_have_no_empty_literal_between() {
        assert_eq!(
            collect("${a}${b}"),
            vec![Token::Placeholder("a"), Token::Placeholder("b")]
        );
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn unterminated_marker_is_literal() {
        assert_eq!(
            collect("cost: ${price"),
            vec![Token::Literal("cost: ${price")]
        );
    }

    #[test]
    fn malformed_markers_are_literal() {
        assert_eq!(
            collect("$5 ${} ${a-b}"),
            vec![Token::Literal("$5 ${} ${a-b}")]
        );
        assert_eq!(
            collect("$${x}"),
            vec![Token::Literal("$"), Token::Placeholder("x")]
        );
    }

    #[test]
    fn preserves_indentation_and_newlines() {
        let source = "class A:\n    ${field}: int\n";
        assert_eq!(
            collect(source),
            vec![
                Token::Literal("class A:\n    "),
                Token::Placeholder("field"),
                Token::Literal(": int\n"),
            ]
        );
    }

    #[test]
    fn tokens_concatenate_back_to_source() {
        let source = "a ${b} $c ${ d} ${e_1}\n";
        let rebuilt: String = tokenize(source)
            .map(|token| match token {
                Token::Literal(text) => text.to_string(),
                Token::Placeholder(name) => format!("${{{name}}}"),
            })
            .collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn placeholder_name_character_class() {
        assert!(is_placeholder_name("property_name"));
        assert!(is_placeholder_name("x1"));
        assert!(!is_placeholder_name(""));
        assert!(!is_placeholder_name("a-b"));
        assert!(!is_placeholder_name("a b"));
    }
}
