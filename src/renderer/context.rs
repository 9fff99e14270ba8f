use crate::binding::{Binding, Record, Value};
use crate::constants::{ROOT_SCOPE, SCOPE_CHAIN_SEPARATOR};

/// A value found in some scope, borrowed from the binding it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Scalar(&'a str),
    Record(&'a Record),
    Block(&'a [Record]),
}

impl<'a> Resolved<'a> {
    pub fn shape(&self) -> &'static str {
        match self {
            Resolved::Scalar(_) => "scalar",
            Resolved::Record(_) => "record",
            Resolved::Block(_) => "repeated block",
        }
    }
}

impl<'a> From<&'a Value> for Resolved<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Scalar(text) => Resolved::Scalar(text),
            Value::Record(record) => Resolved::Record(record),
            Value::RepeatedBlock(records) => Resolved::Block(records),
        }
    }
}

/// One level of the scope stack.
#[derive(Debug, Clone)]
pub enum Scope<'a> {
    Root(&'a Binding),
    /// Fields of the record currently being expanded.
    Iteration {
        block: String,
        index: usize,
        record: &'a Record,
    },
}

impl Scope<'_> {
    fn label(&self) -> String {
        match self {
            Scope::Root(_) => ROOT_SCOPE.to_string(),
            Scope::Iteration { block, index, .. } => format!("{block}[{index}]"),
        }
    }
}

/// Stack of scopes searched innermost first.
///
/// The root binding always sits at the bottom. The context lives for a single
/// render call.
#[derive(Debug)]
pub struct RenderContext<'a> {
    scopes: Vec<Scope<'a>>,
    expanding: Vec<String>,
}

impl<'a> RenderContext<'a> {
    pub fn new(root: &'a Binding) -> Self {
        Self {
            scopes: vec![Scope::Root(root)],
            expanding: Vec::new(),
        }
    }

    pub fn push(&mut self, scope: Scope<'a>) {
        self.scopes.push(scope);
    }

    /// Pops the innermost iteration scope. The root scope is never removed.
    pub fn pop(&mut self) -> Option<Scope<'a>> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Finds `name` in the innermost scope that defines it.
    pub fn lookup(&self, name: &str) -> Option<Resolved<'a>> {
        self.scopes.iter().rev().find_map(|scope| match scope {
            Scope::Root(binding) => binding.get(name).map(Resolved::from),
            Scope::Iteration { record, .. } => record.get(name).map(Resolved::Scalar),
        })
    }

    /// Scope labels from the root inward, e.g. `root > methods[2]`.
    pub fn scope_chain(&self) -> String {
        self.scopes
            .iter()
            .map(Scope::label)
            .collect::<Vec<_>>()
            .join(SCOPE_CHAIN_SEPARATOR)
    }

    pub(crate) fn is_expanding(&self, block: &str) -> bool {
        self.expanding.iter().any(|name| name == block)
    }

    pub(crate) fn enter_block(&mut self, block: &str) {
        self.expanding.push(block.to_string());
    }

    pub(crate) fn leave_block(&mut self) {
        self.expanding.pop();
    }
}
