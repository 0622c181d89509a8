use super::*;
use crate::{field::FieldKind, naming::group_key};
use proptest::prelude::*;

fn string_field(name: &str) -> FieldDefinition {
    FieldDefinition::new(name, TypeRef::named("String"))
}

fn tagged(name: &str, args: &[(&str, &str)]) -> FieldDefinition {
    let directive = args
        .iter()
        .fold(Directive::new("field"), |d, (k, v)| d.arg(*k, *v));

    string_field(name).directive(directive)
}

fn component_directive(args: Vec<(&str, Literal)>) -> Directive {
    args.into_iter()
        .fold(Directive::new("component"), |d, (k, v)| d.arg(k, v))
}

fn build(def: &TypeDefinition) -> Result<Component, MappingError> {
    let graph: TypeGraph = std::iter::once(def.clone()).collect();

    assemble(def, &graph, &EngineOptions::new("var.space_id"))
}

#[test]
fn flags_follow_component_type() {
    let cases = [
        (Some("contentType"), true, false),
        (Some("universal"), true, true),
        (Some("nestable"), false, true),
        (None, false, true),
    ];

    for (kind, is_root, is_nestable) in cases {
        let mut def = TypeDefinition::object("Page", vec![string_field("title")]);
        if let Some(kind) = kind {
            def = def.directive(component_directive(vec![(
                "type",
                Literal::Enum(kind.into()),
            )]));
        }

        let component = build(&def).unwrap();

        assert_eq!(component.is_root, is_root, "{kind:?}");
        assert_eq!(component.is_nestable, is_nestable, "{kind:?}");
    }
}

#[test]
fn display_metadata_is_resolved() {
    let def = TypeDefinition::object("BlogPost", vec![string_field("title")]).directive(
        component_directive(vec![
            ("icon", Literal::Enum("block_at".into())),
            ("color", Literal::from("#00b3b0")),
            ("displayName", Literal::from("Blog post")),
        ]),
    );

    let component = build(&def).unwrap();

    assert_eq!(component.name, "blog_post");
    assert_eq!(component.icon.as_deref(), Some("block-@"));
    assert_eq!(component.color.as_deref(), Some("#00b3b0"));
    assert_eq!(component.display_name.as_deref(), Some("Blog post"));
    assert_eq!(
        component.space_id,
        EmbeddedValue::Reference("var.space_id".into())
    );
}

#[test]
fn preview_names_a_field_or_a_template() {
    let with_preview = |preview: &str| {
        TypeDefinition::object("Hero", vec![string_field("headline")])
            .directive(component_directive(vec![("preview", Literal::from(preview))]))
    };

    let by_field = build(&with_preview("headline")).unwrap();
    assert_eq!(by_field.preview_field.as_deref(), Some("headline"));
    assert_eq!(by_field.preview_tmpl, None);

    let by_template = build(&with_preview("{{ it.headline }}")).unwrap();
    assert_eq!(by_template.preview_field, None);
    assert_eq!(by_template.preview_tmpl.as_deref(), Some("{{ it.headline }}"));

    let plain = build(&TypeDefinition::object("Hero", vec![])).unwrap();
    assert_eq!((plain.preview_field, plain.preview_tmpl), (None, None));
}

#[test]
fn tab_lists_section_key_not_members() {
    let def = TypeDefinition::object(
        "Page",
        vec![
            tagged("title", &[("tab", "Info"), ("section", "Basics")]),
            tagged("summary", &[("tab", "Info")]),
        ],
    );

    let component = build(&def).unwrap();
    let keys: Vec<_> = component.schema.keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["title", "summary", "section_basics", "tab_info"]);

    let tab = &component.schema["tab_info"];
    assert_eq!(tab.kind(), FieldKind::Tab);
    assert_eq!(tab.keys().unwrap(), ["section_basics", "summary"]);
    assert!(!tab.keys().unwrap().contains(&"title".to_string()));

    let section = &component.schema["section_basics"];
    assert_eq!(section.keys().unwrap(), ["title"]);
    assert_eq!(section.position(), 2);
    assert_eq!(tab.position(), 3);
}

#[test]
fn group_key_colliding_with_field_fails() {
    let def = TypeDefinition::object(
        "Page",
        vec![
            tagged("title", &[("section", "Basics")]),
            string_field("section_basics"),
        ],
    );

    assert_eq!(
        build(&def).unwrap_err(),
        MappingError::DuplicateFieldKey {
            component: "page".into(),
            key: "section_basics".into(),
        }
    );
}

#[test]
fn duplicate_field_names_fail() {
    let def = TypeDefinition::object("Page", vec![string_field("title"), string_field("title")]);

    assert!(matches!(
        build(&def).unwrap_err(),
        MappingError::DuplicateFieldKey { .. }
    ));
}

#[test]
fn field_errors_abort_the_component() {
    let def = TypeDefinition::object(
        "Page",
        vec![
            string_field("title"),
            FieldDefinition::new("tags", TypeRef::list_of("String")),
        ],
    );

    assert!(matches!(
        build(&def).unwrap_err(),
        MappingError::UnsupportedArrayType { .. }
    ));
}

#[test]
fn options_come_from_config() {
    let config = Config {
        space_id: "12345".into(),
        catalog: None,
    };

    let options = EngineOptions::from(config);

    assert_eq!(options.space_id, EmbeddedValue::Literal("12345".into()));
    assert!(options.integration.is_none());
}

//
// properties
//

#[derive(Clone, Debug)]
struct Shape {
    section: Option<u8>,
    tab: Option<u8>,
    required: bool,
}

fn arb_shapes() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(
        (
            prop::option::of(0u8..3),
            prop::option::of(0u8..3),
            any::<bool>(),
        )
            .prop_map(|(section, tab, required)| Shape {
                section,
                tab,
                required,
            }),
        0..12,
    )
}

fn definition(shapes: &[Shape]) -> TypeDefinition {
    let fields = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let mut ty = TypeRef::named("String");
            if shape.required {
                ty = ty.required();
            }

            let mut directive = Directive::new("field");
            if let Some(s) = shape.section {
                directive = directive.arg("section", format!("S{s}"));
            }
            if let Some(t) = shape.tab {
                directive = directive.arg("tab", format!("T{t}"));
            }

            FieldDefinition::new(format!("f{i}"), ty).directive(directive)
        })
        .collect();

    TypeDefinition::object("Generated", fields)
}

proptest! {
    #[test]
    fn positions_are_gap_free(shapes in arb_shapes()) {
        let component = build(&definition(&shapes)).unwrap();
        let positions: Vec<u32> = component.schema.values().map(ComponentField::position).collect();
        let expected: Vec<u32> = (0..).take(positions.len()).collect();

        prop_assert_eq!(positions, expected);
    }

    #[test]
    fn required_tracks_type_reference(shapes in arb_shapes()) {
        let component = build(&definition(&shapes)).unwrap();

        for (i, shape) in shapes.iter().enumerate() {
            let field = &component.schema[&format!("f{i}")];
            prop_assert_eq!(field.base().map(|b| b.required), Some(shape.required));
        }
    }

    #[test]
    fn sectioned_fields_land_in_exactly_one_section(shapes in arb_shapes()) {
        let component = build(&definition(&shapes)).unwrap();
        let sections: Vec<_> = component
            .schema
            .values()
            .filter(|f| f.kind() == FieldKind::Section)
            .collect();

        for (i, shape) in shapes.iter().enumerate() {
            let name = format!("f{i}");
            let hits = sections
                .iter()
                .filter(|s| s.keys().unwrap().contains(&name))
                .count();

            prop_assert_eq!(hits, usize::from(shape.section.is_some()));
        }

        for section in sections {
            let keys = section.keys().unwrap();
            let mut sorted = keys.to_vec();
            sorted.sort_by_key(|k| k[1..].parse::<usize>().unwrap());
            prop_assert_eq!(keys, sorted.as_slice());
        }
    }

    #[test]
    fn tabs_hold_tagged_fields_and_their_sections(shapes in arb_shapes()) {
        let component = build(&definition(&shapes)).unwrap();

        // tab -> expected members, both in discovery order
        let mut expected: Vec<(u8, Vec<String>)> = Vec::new();
        for (i, shape) in shapes.iter().enumerate() {
            let Some(tab) = shape.tab else { continue };
            let member = shape.section.map_or_else(
                || format!("f{i}"),
                |s| group_key("section", &format!("S{s}")),
            );

            let pos = match expected.iter().position(|(t, _)| *t == tab) {
                Some(pos) => pos,
                None => {
                    expected.push((tab, Vec::new()));
                    expected.len() - 1
                }
            };
            if !expected[pos].1.contains(&member) {
                expected[pos].1.push(member);
            }
        }

        let tabs: Vec<_> = component
            .schema
            .iter()
            .filter(|(_, f)| f.kind() == FieldKind::Tab)
            .map(|(k, f)| (k.clone(), f.keys().unwrap().to_vec()))
            .collect();
        let modelled: Vec<_> = expected
            .into_iter()
            .map(|(t, keys)| (group_key("tab", &format!("T{t}")), keys))
            .collect();

        prop_assert_eq!(tabs, modelled);
    }

    #[test]
    fn assembly_is_idempotent(shapes in arb_shapes()) {
        let def = definition(&shapes);
        let first = serde_json::to_string(&build(&def).unwrap()).unwrap();
        let second = serde_json::to_string(&build(&def).unwrap()).unwrap();

        prop_assert_eq!(first, second);
    }
}
