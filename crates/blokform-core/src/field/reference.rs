use crate::{
    component::ComponentType,
    field::{
        BloksField, ComponentField, FieldBase, OptionEntry, OptionField, OptionSource, arg,
        arg_int,
    },
    naming::{component_name, display_label},
    value::unique,
};
use blokform_schema::prelude::*;

// option vs options
fn option_variant(field: &FieldDefinition, mut opt: OptionField) -> ComponentField {
    if field.ty.is_list() {
        opt.minimum = arg_int(field, Arg::Min);
        opt.maximum = arg_int(field, Arg::Max);

        ComponentField::Options(opt)
    } else {
        ComponentField::Option(opt)
    }
}

/// Enum members become the selectable options.
pub(super) fn enumeration(
    field: &FieldDefinition,
    base: FieldBase,
    members: &[EnumMember],
) -> ComponentField {
    let options = members
        .iter()
        .map(|member| OptionEntry {
            name: member
                .description
                .clone()
                .unwrap_or_else(|| display_label(&member.name)),
            value: member.name.clone(),
        })
        .collect();

    option_variant(
        field,
        OptionField {
            base,
            options,
            ..OptionField::default()
        },
    )
}

/// Single value picked from a named datasource.
pub(super) fn datasource(base: FieldBase, slug: &str) -> ComponentField {
    ComponentField::Option(OptionField {
        base,
        source: Some(OptionSource::Internal),
        datasource_slug: Some(slug.to_string()),
        ..OptionField::default()
    })
}

/// Object or union target: a story reference when every member is a
/// content type, nested bloks otherwise.
pub(super) fn composite(
    field: &FieldDefinition,
    base: FieldBase,
    graph: &TypeGraph,
    members: &[String],
) -> ComponentField {
    let content_like = !members.is_empty()
        && members.iter().all(|name| {
            graph
                .get(name)
                .and_then(ComponentType::of)
                .is_some_and(ComponentType::is_root)
        });

    let whitelist = unique(members.iter().map(|name| component_name(name)));

    if content_like {
        content_reference(field, base, whitelist)
    } else {
        bloks(field, base, whitelist)
    }
}

fn content_reference(
    field: &FieldDefinition,
    base: FieldBase,
    content_types: Vec<String>,
) -> ComponentField {
    option_variant(
        field,
        OptionField {
            base,
            source: Some(OptionSource::InternalStories),
            filter_content_type: content_types,
            folder_slug: arg(field, Arg::Folder)
                .and_then(Literal::as_text)
                .map(ToString::to_string),
            use_uuid: true,
            ..OptionField::default()
        },
    )
}

fn bloks(field: &FieldDefinition, base: FieldBase, whitelist: Vec<String>) -> ComponentField {
    let (minimum, maximum) = if field.ty.is_list() {
        (arg_int(field, Arg::Min), arg_int(field, Arg::Max))
    } else {
        (Some(i64::from(base.required)), Some(1))
    };

    ComponentField::Bloks(BloksField {
        base,
        restrict_components: true,
        component_whitelist: whitelist,
        minimum,
        maximum,
    })
}
