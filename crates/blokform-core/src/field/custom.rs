use crate::{
    field::{ComponentField, CustomField, FieldBase, arg},
    integration::{
        CATALOG_PLUGIN, CATEGORY_PLUGIN, PluginOption, SEO_PLUGIN, category_options,
        connection_options,
    },
};
use blokform_config::IntegrationConfig;
use blokform_schema::prelude::*;

/// Product browser; `limit` is appended only when known.
pub(super) fn catalog_product(
    field: &FieldDefinition,
    base: FieldBase,
    config: &IntegrationConfig,
    limit: Option<i64>,
) -> ComponentField {
    let mut options = connection_options(config);

    if let Some(limit) = limit {
        options.push(PluginOption::literal("limit", limit.to_string()));
    }

    if let Some(ct_type) = arg(field, Arg::CtType).and_then(Literal::as_text) {
        options.push(PluginOption::literal("selectOnly", ct_type));
    }

    ComponentField::Custom(CustomField {
        base,
        field_type: CATALOG_PLUGIN.to_string(),
        options,
    })
}

pub(super) fn catalog_category(base: FieldBase, config: &IntegrationConfig) -> ComponentField {
    ComponentField::Custom(CustomField {
        base,
        field_type: CATEGORY_PLUGIN.to_string(),
        options: category_options(config),
    })
}

pub(super) fn seo(base: FieldBase) -> ComponentField {
    ComponentField::Custom(CustomField {
        base,
        field_type: SEO_PLUGIN.to_string(),
        options: Vec::new(),
    })
}
