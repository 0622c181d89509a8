use crate::{
    error::MappingError,
    field::{ComponentField, FieldBase, custom, reference, scalar},
};
use blokform_config::IntegrationConfig;
use blokform_schema::prelude::*;
use tracing::debug;

///
/// WellKnown
///
/// Named types with a fixed mapping when the graph doesn't define them
/// as enum, object or union.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum WellKnown {
    Asset,
    Boolean,
    CatalogProduct,
    Date,
    DateTime,
    Link,
    Number,
    Seo,
    String,
    Table,
}

impl WellKnown {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let known = match name {
            "String" | "ID" => Self::String,
            "Boolean" => Self::Boolean,
            "Int" | "Float" => Self::Number,
            "Date" => Self::Date,
            "DateTime" => Self::DateTime,
            "Asset" => Self::Asset,
            "Link" => Self::Link,
            "Seo" => Self::Seo,
            "Table" => Self::Table,
            "CatalogProduct" => Self::CatalogProduct,
            _ => return None,
        };

        Some(known)
    }
}

///
/// FieldContext
///
/// Everything a builder may consult besides the field itself.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldContext<'a> {
    pub graph: &'a TypeGraph,
    pub integration: Option<&'a IntegrationConfig>,
}

impl<'a> FieldContext<'a> {
    #[must_use]
    pub const fn new(graph: &'a TypeGraph, integration: Option<&'a IntegrationConfig>) -> Self {
        Self { graph, integration }
    }

    /// Integration config, or the error naming the field that needed it.
    pub fn require_integration(
        &self,
        field: &FieldDefinition,
    ) -> Result<&'a IntegrationConfig, MappingError> {
        self.integration
            .ok_or_else(|| MappingError::missing_integration(&field.name))
    }
}

/// Map one declared field onto its component field at `position`.
pub fn classify(
    field: &FieldDefinition,
    ctx: &FieldContext<'_>,
    position: u32,
) -> Result<ComponentField, MappingError> {
    let base = FieldBase::from_field(field, position);
    let ty = &field.ty;
    let many = ty.is_list();

    let mapped = match ctx.graph.get(&ty.name).map(|def| &def.kind) {
        Some(TypeKind::Enum { members }) => reference::enumeration(field, base, members),
        Some(TypeKind::Object { .. }) => {
            reference::composite(field, base, ctx.graph, std::slice::from_ref(&ty.name))
        }
        Some(TypeKind::Union { members }) => {
            reference::composite(field, base, ctx.graph, members)
        }
        Some(TypeKind::Scalar) | None => {
            let known = WellKnown::from_name(&ty.name);

            match (known, many) {
                (Some(known), true) => well_known_list(field, base, known, ctx)?,
                (Some(known), false) => well_known(field, base, known, ctx)?,
                (None, true) => {
                    return Err(MappingError::unsupported_array(&field.name, &ty.name));
                }
                (None, false) => return Err(MappingError::unsupported(&field.name, &ty.name)),
            }
        }
    };

    debug!(
        field = %field.name,
        type_name = %ty.name,
        kind = %mapped.kind(),
        "classified field"
    );

    Ok(mapped)
}

fn well_known(
    field: &FieldDefinition,
    base: FieldBase,
    known: WellKnown,
    ctx: &FieldContext<'_>,
) -> Result<ComponentField, MappingError> {
    let mapped = match known {
        WellKnown::Asset => scalar::asset(field, base),
        WellKnown::Boolean => ComponentField::Boolean(scalar::plain(base)),
        WellKnown::CatalogProduct => {
            custom::catalog_product(field, base, ctx.require_integration(field)?, Some(1))
        }
        WellKnown::Date => scalar::datetime(base, true),
        WellKnown::DateTime => scalar::datetime(base, false),
        WellKnown::Link => scalar::multilink(field, base),
        WellKnown::Number => scalar::number(field, base),
        WellKnown::Seo => custom::seo(base),
        WellKnown::String => string(field, base, ctx)?,
        WellKnown::Table => ComponentField::Table(scalar::plain(base)),
    };

    Ok(mapped)
}

fn well_known_list(
    field: &FieldDefinition,
    base: FieldBase,
    known: WellKnown,
    ctx: &FieldContext<'_>,
) -> Result<ComponentField, MappingError> {
    match known {
        WellKnown::Asset => Ok(scalar::multiasset(field, base)),
        WellKnown::CatalogProduct => {
            let limit = field
                .directive_value(DirectiveName::Field, Arg::Max)
                .and_then(Literal::as_int);

            Ok(custom::catalog_product(
                field,
                base,
                ctx.require_integration(field)?,
                limit,
            ))
        }
        _ => Err(MappingError::unsupported_array(&field.name, &field.ty.name)),
    }
}

// String precedence: catalog category marker, then datasource, then format.
fn string(
    field: &FieldDefinition,
    base: FieldBase,
    ctx: &FieldContext<'_>,
) -> Result<ComponentField, MappingError> {
    let is_category = field
        .directive_value(DirectiveName::Catalog, Arg::Category)
        .and_then(Literal::as_bool)
        .unwrap_or(false);

    if is_category {
        return Ok(custom::catalog_category(
            base,
            ctx.require_integration(field)?,
        ));
    }

    if let Some(slug) = field.directive_text(DirectiveName::Field, Arg::Datasource) {
        return Ok(reference::datasource(base, slug));
    }

    Ok(scalar::text(field, base))
}
