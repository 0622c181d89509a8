use crate::{
    field::{
        AssetField, ComponentField, DatetimeField, FieldBase, MultilinkField, NumberField,
        PlainField, RichTextField, TextField, TextareaField, arg, arg_int,
    },
    naming::component_name,
    value::{Number, text_list, unique},
};
use blokform_schema::prelude::*;

/// Toolbar entry that lets editors embed nested components.
pub const BLOK_TOOLBAR_ENTRY: &str = "blok";

pub(super) const fn plain(base: FieldBase) -> PlainField {
    PlainField { base }
}

pub(super) fn text(field: &FieldDefinition, base: FieldBase) -> ComponentField {
    let max_length = arg_int(field, Arg::MaxLength);
    let rtl = arg(field, Arg::Rtl)
        .and_then(Literal::as_bool)
        .unwrap_or(false);

    match arg(field, Arg::Format).and_then(Literal::as_text) {
        Some("textarea") => ComponentField::Textarea(TextareaField {
            base,
            rtl,
            max_length,
        }),
        Some("markdown") => ComponentField::Markdown(rich_text(field, base, rtl, max_length)),
        Some("richtext") => ComponentField::Richtext(rich_text(field, base, rtl, max_length)),
        _ => ComponentField::Text(TextField {
            base,
            regex: arg(field, Arg::Regex)
                .and_then(Literal::as_text)
                .map(ToString::to_string),
            max_length,
        }),
    }
}

fn rich_text(
    field: &FieldDefinition,
    base: FieldBase,
    rtl: bool,
    max_length: Option<i64>,
) -> RichTextField {
    let toolbar_arg = arg(field, Arg::Toolbar);
    let mut toolbar = text_list(toolbar_arg);

    let whitelist = unique(
        text_list(arg(field, Arg::BlokTypes))
            .iter()
            .map(|name| component_name(name)),
    );
    let restrict_components = !whitelist.is_empty();

    if restrict_components && !toolbar.iter().any(|t| t == BLOK_TOOLBAR_ENTRY) {
        toolbar.push(BLOK_TOOLBAR_ENTRY.to_string());
    }

    RichTextField {
        base,
        rtl,
        max_length,
        customize_toolbar: toolbar_arg.is_some() || restrict_components,
        toolbar,
        restrict_components,
        component_whitelist: whitelist,
    }
}

pub(super) fn number(field: &FieldDefinition, base: FieldBase) -> ComponentField {
    let number = |key| arg(field, key).and_then(Number::from_literal);

    ComponentField::Number(NumberField {
        base,
        decimals: number(Arg::Decimals),
        steps: number(Arg::Step),
        min_value: number(Arg::Min),
        max_value: number(Arg::Max),
    })
}

pub(super) const fn datetime(base: FieldBase, disable_time: bool) -> ComponentField {
    ComponentField::Datetime(DatetimeField { base, disable_time })
}

fn asset_field(field: &FieldDefinition, base: FieldBase) -> AssetField {
    AssetField {
        base,
        filetypes: text_list(arg(field, Arg::FileTypes)),
    }
}

pub(super) fn asset(field: &FieldDefinition, base: FieldBase) -> ComponentField {
    ComponentField::Asset(asset_field(field, base))
}

pub(super) fn multiasset(field: &FieldDefinition, base: FieldBase) -> ComponentField {
    ComponentField::Multiasset(asset_field(field, base))
}

pub(super) fn multilink(field: &FieldDefinition, base: FieldBase) -> ComponentField {
    let whitelist = unique(
        text_list(arg(field, Arg::ContentTypes))
            .iter()
            .map(|name| component_name(name)),
    );
    let features = text_list(arg(field, Arg::LinkFeatures));
    let has = |feature: &str| features.iter().any(|f| f == feature);

    ComponentField::Multilink(MultilinkField {
        base,
        folder_slug: arg(field, Arg::Folder)
            .and_then(Literal::as_text)
            .map(ToString::to_string),
        restrict_content_types: !whitelist.is_empty(),
        component_whitelist: whitelist,
        asset_link_type: has("asset"),
        allow_target_blank: has("newTab"),
        email_link_type: has("email"),
        show_anchor: has("anchor"),
    })
}
