use crate::{binding::Record, template::Template};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Any `${...}` left on a single line, well-formed or not. A marker never spans
/// another `$`, so an unterminated `${` cannot swallow the marker after it.
static RESIDUAL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^$}\n]*)\}").expect("marker pattern is valid")
});

/// Non-fatal findings attached to a rendered document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Unresolved marker '${{{marker}}}' left in output at line {line}.")]
    UnresolvedMarkerInOutput { marker: String, line: usize },

    #[error(
        "Record {block}[{iteration}] has no field '{field}' referenced by its fragment (scopes: {scopes})."
    )]
    MissingRecordField {
        block: String,
        field: String,
        iteration: usize,
        scopes: String,
    },
}

impl Diagnostic {
    /// Whether both diagnostics report the same record gap, whatever the scopes.
    pub(crate) fn same_record_gap(&self, other: &Diagnostic) -> bool {
        match (self, other) {
            (
                Diagnostic::MissingRecordField {
                    block,
                    field,
                    iteration,
                    ..
                },
                Diagnostic::MissingRecordField {
                    block: other_block,
                    field: other_field,
                    iteration: other_iteration,
                    ..
                },
            ) => block == other_block && field == other_field && iteration == other_iteration,
            _ => false,
        }
    }
}

/// Post-render checks over output text and block records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Reports every residual `${...}` marker in `rendered`, in output order.
    pub fn validate(&self, rendered: &str) -> Vec<Diagnostic> {
        let mut line = 1;
        let mut scanned = 0;
        RESIDUAL_MARKER
            .captures_iter(rendered)
            .filter_map(|captures| {
                let whole = captures.get(0)?;
                line += rendered[scanned..whole.start()].matches('\n').count();
                scanned = whole.start();
                Some(Diagnostic::UnresolvedMarkerInOutput {
                    marker: captures.get(1)?.as_str().to_string(),
                    line,
                })
            })
            .collect()
    }

    /// Reports fragment fields that some records of a block define and others lack.
    ///
    /// A name that no record defines is inherited from an enclosing scope and is
    /// not reported.
    pub fn check_records(
        &self,
        block: &str,
        fragment: &Template,
        records: &[Record],
        scopes: &str,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for field in fragment.placeholders() {
            if !records.iter().any(|record| record.contains(field)) {
                continue;
            }
            for (iteration, record) in records.iter().enumerate() {
                if !record.contains(field) {
                    diagnostics.push(Diagnostic::MissingRecordField {
                        block: block.to_string(),
                        field: field.to_string(),
                        iteration,
                        scopes: scopes.to_string(),
                    });
                }
            }
        }
        diagnostics
    }
}

/// Shorthand for [`Validator::validate`].
pub fn validate(rendered: &str) -> Vec<Diagnostic> {
    Validator.validate(rendered)
}
