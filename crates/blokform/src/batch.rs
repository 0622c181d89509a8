use blokform_core::{Component, EngineOptions, MappingError, assemble};
use blokform_schema::node::TypeGraph;
use tracing::{debug, warn};

///
/// BatchPolicy
///
/// What to do when one type fails to map.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BatchPolicy {
    #[default]
    Abort,
    Skip,
}

///
/// BatchOutput
///

#[derive(Debug, Default)]
pub struct BatchOutput {
    pub components: Vec<Component>,

    /// Type name and error of every skipped type, in graph order.
    pub skipped: Vec<(String, MappingError)>,
}

/// Map every object type of the graph, in declaration order.
pub fn build_components(
    graph: &TypeGraph,
    options: &EngineOptions,
    policy: BatchPolicy,
) -> Result<BatchOutput, MappingError> {
    let mut output = BatchOutput::default();

    for def in graph.objects() {
        match assemble(def, graph, options) {
            Ok(component) => output.components.push(component),
            Err(err) if policy == BatchPolicy::Skip => {
                warn!(type_name = %def.name, error = %err, "skipping type");
                output.skipped.push((def.name.clone(), err));
            }
            Err(err) => return Err(err),
        }
    }

    debug!(
        components = output.components.len(),
        skipped = output.skipped.len(),
        "batch complete"
    );

    Ok(output)
}

/// Map a single named type.
pub fn build_component(
    graph: &TypeGraph,
    type_name: &str,
    options: &EngineOptions,
) -> Result<Component, MappingError> {
    let def = graph.get(type_name).ok_or_else(|| MappingError::UnknownType {
        name: type_name.to_string(),
    })?;

    assemble(def, graph, options)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use blokform_schema::prelude::*;

    fn graph() -> TypeGraph {
        [
            TypeDefinition::object(
                "Page",
                vec![FieldDefinition::new("title", TypeRef::named("String"))],
            ),
            TypeDefinition::enumeration("Color", vec![EnumMember::new("Red")]),
            TypeDefinition::object(
                "Broken",
                vec![FieldDefinition::new("tags", TypeRef::list_of("String"))],
            ),
            TypeDefinition::object("Hero", vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn abort_stops_at_first_failure() {
        let err = build_components(&graph(), &EngineOptions::new("1"), BatchPolicy::Abort)
            .unwrap_err();

        assert!(matches!(err, MappingError::UnsupportedArrayType { .. }));
    }

    #[test]
    fn skip_reports_and_continues() {
        let output =
            build_components(&graph(), &EngineOptions::new("1"), BatchPolicy::Skip).unwrap();

        let names: Vec<_> = output.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["page", "hero"]);
        assert_eq!(output.skipped.len(), 1);
        assert_eq!(output.skipped[0].0, "Broken");
    }

    #[test]
    fn unknown_type_is_reported() {
        let err = build_component(&graph(), "Missing", &EngineOptions::new("1")).unwrap_err();

        assert_eq!(
            err,
            MappingError::UnknownType {
                name: "Missing".into()
            }
        );
    }
}
