use super::{
    context::{RenderContext, Scope},
    fragments::Fragment,
    Renderer,
};
use crate::{binding::Record, error::Error, error::Result, validation::Diagnostic};
use log::debug;

impl Renderer<'_> {
    /// Expands `fragment` once per record, in order, joined by the fragment's separator.
    ///
    /// Each iteration pushes a scope holding the record's fields; names the record
    /// lacks fall through to enclosing scopes. An empty slice expands to nothing.
    pub(crate) fn expand<'a>(
        &self,
        block: &str,
        records: &'a [Record],
        fragment: &Fragment,
        context: &mut RenderContext<'a>,
        output: &mut String,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        if context.is_expanding(block) {
            return Err(Error::RecursiveFragment {
                name: block.to_string(),
                scopes: context.scope_chain(),
            });
        }
        if records.is_empty() {
            debug!("Block '{block}' is empty, nothing to expand");
            return Ok(());
        }

        let scopes = context.scope_chain();
        let gaps = self
            .validator
            .check_records(block, fragment.template(), records, &scopes);
        // A block bound in an enclosing scope is re-checked on every outer iteration.
        for gap in gaps {
            if !diagnostics.iter().any(|seen| seen.same_record_gap(&gap)) {
                diagnostics.push(gap);
            }
        }

        debug!("Expanding block '{block}' with {} record(s)", records.len());
        context.enter_block(block);
        for (index, record) in records.iter().enumerate() {
            if index > 0 {
                output.push_str(fragment.separator());
            }
            context.push(Scope::Iteration {
                block: block.to_string(),
                index,
                record,
            });
            self.render_into(fragment.template(), context, output, diagnostics)?;
            context.pop();
        }
        context.leave_block();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::binding::{Binding, Record};
    use crate::error::{Error, Result};
    use crate::renderer::{Fragment, FragmentRegistry, RenderedDocument, Renderer};
    use crate::template::Template;
    use crate::validation::Diagnostic;

    fn fragment(source: &str, separator: &str) -> Fragment {
        Fragment::parse(source).with_separator(separator)
    }

    fn render_with(
        registry: &FragmentRegistry,
        source: &str,
        binding: &Binding,
    ) -> Result<RenderedDocument> {
        Renderer::new(registry).render(&Template::parse(source), binding)
    }

    fn properties(names: &[&str]) -> Vec<Record> {
        names
            .iter()
            .map(|name| {
                Record::new()
                    .with("property_name", *name)
                    .with("property_type", "str")
            })
            .collect()
    }

    #[test]
    fn expands_in_record_order_with_separator() {
        let registry = FragmentRegistry::new().with(
            "properties",
            fragment("    ${property_name}: ${property_type}", "\n"),
        );
        let records = properties(&["id", "status", "total"]);
        let binding = Binding::new().with("properties", records);
        let document = render_with(&registry, "${properties}\n", &binding).unwrap();
        assert_eq!(
            document.text(),
            "    id: str\n    status: str\n    total: str\n"
        );
        assert!(document.is_clean());
    }

    #[test]
    fn fragment_sees_enclosing_scope() {
        let registry = FragmentRegistry::new()
            .with("methods", fragment("${entity_name}.${method_name}", ", "));
        let binding = Binding::new().with("entity_name", "Order").with(
            "methods",
            vec![
                Record::new().with("method_name", "confirm"),
                Record::new().with("method_name", "cancel"),
            ],
        );
        let document = render_with(&registry, "[${methods}]", &binding).unwrap();
        assert_eq!(document.text(), "[Order.confirm, Order.cancel]");
    }

    #[test]
    fn nested_blocks_expand_from_enclosing_binding() {
        let registry = FragmentRegistry::new()
            .with("methods", fragment("${method_name}(${params})", "; "))
            .with("params", fragment("${param}", ", "));
        let binding = Binding::new()
            .with("methods", vec![Record::new().with("method_name", "rename")])
            .with(
                "params",
                vec![
                    Record::new().with("param", "self"),
                    Record::new().with("param", "name"),
                ],
            );
        let document = render_with(&registry, "${methods}", &binding).unwrap();
        assert_eq!(document.text(), "rename(self, name)");
    }

    #[test]
    fn self_referencing_fragment_is_rejected() {
        let registry = FragmentRegistry::new().with("items", fragment("${value} ${items}", "\n"));
        let records = vec![Record::new().with("value", "a")];
        let binding = Binding::new().with("items", records);
        match render_with(&registry, "${items}", &binding) {
            Err(Error::RecursiveFragment { name, scopes }) => {
                assert_eq!(name, "items");
                assert_eq!(scopes, "root > items[0]");
            }
            other => panic!("expected recursion error, got {other:?}"),
        }
    }

    #[test]
    fn inconsistent_records_produce_diagnostics() {
        let registry = FragmentRegistry::new().with(
            "properties",
            fragment("${property_name}: ${property_type}", "\n"),
        );
        let binding = Binding::new().with("property_type", "Any").with(
            "properties",
            vec![
                Record::new()
                    .with("property_name", "id")
                    .with("property_type", "UUID"),
                Record::new().with("property_name", "notes"),
            ],
        );
        let document = render_with(&registry, "${properties}", &binding).unwrap();
        assert_eq!(document.text(), "id: UUID\nnotes: Any");
        assert_eq!(document.diagnostics().len(), 1);
    }

    #[test]
    fn inherited_block_gap_is_reported_once() {
        let registry = FragmentRegistry::new()
            .with("methods", fragment("${method_name}(${params})", "; "))
            .with("params", fragment("${param}: ${kind}", ", "));
        let binding = Binding::new()
            .with("kind", "str")
            .with(
                "methods",
                vec![
                    Record::new().with("method_name", "rename"),
                    Record::new().with("method_name", "retitle"),
                ],
            )
            .with(
                "params",
                vec![
                    Record::new().with("param", "self").with("kind", "Self"),
                    Record::new().with("param", "name"),
                ],
            );
        let document = render_with(&registry, "${methods}", &binding).unwrap();

        assert_eq!(
            document.text(),
            "rename(self: Self, name: str); retitle(self: Self, name: str)"
        );
        match document.diagnostics() {
            [Diagnostic::MissingRecordField {
                block,
                field,
                iteration,
                ..
            }] => {
                assert_eq!(block, "params");
                assert_eq!(field, "kind");
                assert_eq!(*iteration, 1);
            }
            other => panic!("expected a single diagnostic, got {other:?}"),
        }
    }
}
