#[cfg(test)]
mod tests {
    use stencil::error::Error;
    use stencil::renderer::{RenderContext, Resolved, Resolver, ScopeResolver};
    use stencil::{
        render, Binding, Diagnostic, Fragment, FragmentRegistry, Record, RenderedDocument,
        Renderer, Template,
    };
    use test_log::test;

    /// Resolves like the default policy but declines one name.
    struct SkippingResolver {
        skip: &'static str,
    }

    impl Resolver for SkippingResolver {
        fn resolve<'a>(
            &self,
            name: &str,
            context: &RenderContext<'a>,
        ) -> stencil::Result<Option<Resolved<'a>>> {
            if name == self.skip {
                return Ok(None);
            }
            ScopeResolver.resolve(name, context)
        }
    }

    fn property_registry() -> FragmentRegistry {
        FragmentRegistry::new().with(
            "properties",
            Fragment::parse("${property_name}: ${property_type}").with_separator("\n"),
        )
    }

    fn render_plain(source: &str, binding: &Binding) -> stencil::Result<RenderedDocument> {
        render(&Template::parse(source), binding, &FragmentRegistry::new())
    }

    fn render_properties(source: &str, binding: &Binding) -> stencil::Result<RenderedDocument> {
        render(&Template::parse(source), binding, &property_registry())
    }

    fn property(name: &str, kind: &str) -> Record {
        Record::new()
            .with("property_name", name)
            .with("property_type", kind)
    }

    #[test]
    fn template_without_placeholders_round_trips() {
        let source = "class Order(Entity):\n    \"\"\"Costs $5 {maybe}.\"\"\"\n\tpass\n";
        let document = render_plain(source, &Binding::new()).unwrap();
        assert_eq!(document.text(), source);
        assert!(document.is_clean());
    }

    #[test]
    fn scalar_substitution() {
        let binding = Binding::new().with("name", "World");
        let document = render_plain("Hello ${name}", &binding).unwrap();
        assert_eq!(document.text(), "Hello World");
    }

    #[test]
    fn repeated_block_keeps_record_order() {
        let records = vec![property("id", "UUID"), property("status", "str")];
        let binding = Binding::new().with("properties", records);
        let document = render_properties("${properties}", &binding).unwrap();

        assert_eq!(document.text(), "id: UUID\nstatus: str");
        let id_at = document.text().find("id:").unwrap();
        let status_at = document.text().find("status:").unwrap();
        assert!(id_at < status_at);
    }

    #[test]
    fn empty_block_expands_to_nothing() {
        let binding = Binding::new().with("properties", Vec::<Record>::new());
        let document = render_properties("fields:\n${properties}\nend", &binding).unwrap();
        assert_eq!(document.text(), "fields:\n\nend");
        assert!(document.diagnostics().is_empty());
    }

    #[test]
    fn unbound_placeholder_fails_without_document() {
        match render_plain("x = ${missing}", &Binding::new()) {
            Err(Error::UnboundPlaceholder { name, scopes }) => {
                assert_eq!(name, "missing");
                assert_eq!(scopes, "root");
            }
            other => panic!("expected UnboundPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn unbound_field_inside_block_reports_iteration_scope() {
        let binding = Binding::new().with(
            "properties",
            vec![Record::new().with("property_name", "id")],
        );
        match render_properties("${properties}", &binding) {
            Err(Error::UnboundPlaceholder { name, scopes }) => {
                assert_eq!(name, "property_type");
                assert_eq!(scopes, "root > properties[0]");
            }
            other => panic!("expected UnboundPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn rerendering_is_byte_identical() {
        let template = Template::parse("class ${entity}:\n${properties}\n");
        let registry = property_registry();
        let binding = Binding::new().with("entity", "Order").with(
            "properties",
            vec![
                property("id", "UUID"),
                property("total", "Decimal"),
                property("note", "str"),
            ],
        );
        let renderer = Renderer::new(&registry);

        let first = renderer.render(&template, &binding).unwrap();
        let second = renderer.render(&template, &binding).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn skipped_placeholder_is_reported_once() {
        let registry = FragmentRegistry::new();
        let binding = Binding::new()
            .with("entity", "Order")
            .with("status", "open");
        let resolver = SkippingResolver { skip: "status" };

        let document = Renderer::new(&registry)
            .with_resolver(&resolver)
            .render(&Template::parse("${entity} is ${status}"), &binding)
            .unwrap();

        assert_eq!(document.text(), "Order is ${status}");
        assert_eq!(
            document.diagnostics(),
            &[Diagnostic::UnresolvedMarkerInOutput {
                marker: "status".into(),
                line: 1,
            }]
        );
    }

    #[test]
    fn skipped_placeholder_after_unterminated_marker_is_named() {
        let registry = FragmentRegistry::new();
        let binding = Binding::new().with("status", "open");
        let resolver = SkippingResolver { skip: "status" };

        let document = Renderer::new(&registry)
            .with_resolver(&resolver)
            .render(&Template::parse("price ${ unclosed ${status}"), &binding)
            .unwrap();

        assert_eq!(document.text(), "price ${ unclosed ${status}");
        assert_eq!(
            document.diagnostics(),
            &[Diagnostic::UnresolvedMarkerInOutput {
                marker: "status".into(),
                line: 1,
            }]
        );
    }

    #[test]
    fn template_is_shared_across_threads() {
        let template = Template::parse("Hello ${name}");
        let registry = FragmentRegistry::new();

        std::thread::scope(|scope| {
            let handles: Vec<_> = ["Ada", "Grace", "Linus"]
                .into_iter()
                .map(|name| {
                    let template = &template;
                    let registry = &registry;
                    scope.spawn(move || {
                        let binding = Binding::new().with("name", name);
                        render(template, &binding, registry).unwrap().into_text()
                    })
                })
                .collect();
            let outputs: Vec<String> = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect();
            assert_eq!(outputs, vec!["Hello Ada", "Hello Grace", "Hello Linus"]);
        });
    }

    #[test]
    fn scalar_containing_marker_is_flagged_not_expanded() {
        let binding = Binding::new().with("doc", "uses ${placeholder} syntax");
        let document = render_plain("\"\"\"${doc}\"\"\"", &binding).unwrap();
        assert_eq!(document.text(), "\"\"\"uses ${placeholder} syntax\"\"\"");
        assert_eq!(document.diagnostics().len(), 1);
    }
}
