use crate::{
    error::MappingError,
    field::{ComponentField, FieldContext, classify},
    group::build_groups,
    naming::{component_name, icon_name},
    value::EmbeddedValue,
};
use blokform_config::{Config, IntegrationConfig};
use blokform_schema::prelude::*;
use indexmap::{IndexMap, map::Entry};
use serde::Serialize;
use tracing::debug;

///
/// ComponentType
///
/// The `type` argument of the component directive.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComponentType {
    ContentType,
    Nestable,
    Universal,
}

impl ComponentType {
    /// Declared type of a definition; unknown symbols count as undeclared.
    #[must_use]
    pub fn of(def: &TypeDefinition) -> Option<Self> {
        match def.directive_text(DirectiveName::Component, Arg::Type)? {
            "contentType" => Some(Self::ContentType),
            "nestable" => Some(Self::Nestable),
            "universal" => Some(Self::Universal),
            _ => None,
        }
    }

    /// Content types and universal components can be created as stories.
    #[must_use]
    pub const fn is_root(self) -> bool {
        matches!(self, Self::ContentType | Self::Universal)
    }
}

///
/// EngineOptions
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EngineOptions {
    pub space_id: EmbeddedValue,
    pub integration: Option<IntegrationConfig>,
}

impl EngineOptions {
    #[must_use]
    pub fn new(space_id: &str) -> Self {
        Self {
            space_id: EmbeddedValue::classify(space_id),
            integration: None,
        }
    }

    #[must_use]
    pub fn with_integration(mut self, integration: IntegrationConfig) -> Self {
        self.integration = Some(integration);
        self
    }
}

impl From<Config> for EngineOptions {
    fn from(config: Config) -> Self {
        Self {
            space_id: EmbeddedValue::classify(&config.space_id),
            integration: config.catalog,
        }
    }
}

///
/// Component
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Component {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    pub space_id: EmbeddedValue,
    pub is_root: bool,
    pub is_nestable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_field: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_tmpl: Option<String>,

    pub schema: IndexMap<String, ComponentField>,
}

/// Build the component for one type definition.
///
/// Declared fields take positions `0..n` in order; sections and tabs
/// continue the sequence. Two entries resolving to the same schema key
/// is an error rather than a silent overwrite.
pub fn assemble(
    def: &TypeDefinition,
    graph: &TypeGraph,
    options: &EngineOptions,
) -> Result<Component, MappingError> {
    let name = component_name(&def.name);
    let ctx = FieldContext::new(graph, options.integration.as_ref());

    let mut schema = IndexMap::new();
    let mut position = 0;

    for field in def.fields() {
        let mapped = classify(field, &ctx, position)?;
        insert_unique(&mut schema, &name, field.name.clone(), mapped)?;
        position += 1;
    }

    for (key, group) in build_groups(def, position) {
        insert_unique(&mut schema, &name, key, group)?;
    }

    let kind = ComponentType::of(def);
    let text = move |arg| def.directive_text(DirectiveName::Component, arg);

    let (preview_field, preview_tmpl) = match text(Arg::Preview) {
        Some(preview) if def.field(preview).is_some() => (Some(preview.to_string()), None),
        Some(preview) => (None, Some(preview.to_string())),
        None => (None, None),
    };

    debug!(
        component = %name,
        fields = schema.len(),
        "assembled component"
    );

    Ok(Component {
        display_name: text(Arg::DisplayName).map(ToString::to_string),
        space_id: options.space_id.clone(),
        is_root: kind.is_some_and(ComponentType::is_root),
        is_nestable: kind != Some(ComponentType::ContentType),
        icon: text(Arg::Icon).map(icon_name),
        color: text(Arg::Color).map(ToString::to_string),
        preview_field,
        preview_tmpl,
        schema,
        name,
    })
}

fn insert_unique(
    schema: &mut IndexMap<String, ComponentField>,
    component: &str,
    key: String,
    field: ComponentField,
) -> Result<(), MappingError> {
    match schema.entry(key) {
        Entry::Occupied(entry) => Err(MappingError::DuplicateFieldKey {
            component: component.to_string(),
            key: entry.key().clone(),
        }),
        Entry::Vacant(entry) => {
            entry.insert(field);
            Ok(())
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests;
