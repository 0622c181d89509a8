use crate::{integration::PluginOption, value::Number};
use derive_more::Display;
use serde::Serialize;
use std::ops::Not;

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum FieldKind {
    #[display("asset")]
    Asset,
    #[display("bloks")]
    Bloks,
    #[display("boolean")]
    Boolean,
    #[display("custom")]
    Custom,
    #[display("datetime")]
    Datetime,
    #[display("markdown")]
    Markdown,
    #[display("multiasset")]
    Multiasset,
    #[display("multilink")]
    Multilink,
    #[display("number")]
    Number,
    #[display("option")]
    Option,
    #[display("options")]
    Options,
    #[display("richtext")]
    Richtext,
    #[display("section")]
    Section,
    #[display("tab")]
    Tab,
    #[display("table")]
    Table,
    #[display("text")]
    Text,
    #[display("textarea")]
    Textarea,
}

///
/// ComponentField
///
/// One entry of a component schema. Serialized with its kind under `type`
/// and the attribute names the CMS provider expects.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[remain::sorted]
pub enum ComponentField {
    Asset(AssetField),
    Bloks(BloksField),
    Boolean(PlainField),
    Custom(CustomField),
    Datetime(DatetimeField),
    Markdown(RichTextField),
    Multiasset(AssetField),
    Multilink(MultilinkField),
    Number(NumberField),
    Option(OptionField),
    Options(OptionField),
    Richtext(RichTextField),
    Section(GroupField),
    Tab(GroupField),
    Table(PlainField),
    Text(TextField),
    Textarea(TextareaField),
}

impl ComponentField {
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Asset(_) => FieldKind::Asset,
            Self::Bloks(_) => FieldKind::Bloks,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Custom(_) => FieldKind::Custom,
            Self::Datetime(_) => FieldKind::Datetime,
            Self::Markdown(_) => FieldKind::Markdown,
            Self::Multiasset(_) => FieldKind::Multiasset,
            Self::Multilink(_) => FieldKind::Multilink,
            Self::Number(_) => FieldKind::Number,
            Self::Option(_) => FieldKind::Option,
            Self::Options(_) => FieldKind::Options,
            Self::Richtext(_) => FieldKind::Richtext,
            Self::Section(_) => FieldKind::Section,
            Self::Tab(_) => FieldKind::Tab,
            Self::Table(_) => FieldKind::Table,
            Self::Text(_) => FieldKind::Text,
            Self::Textarea(_) => FieldKind::Textarea,
        }
    }

    /// Attributes shared by every value-carrying field; `None` for sections and tabs.
    #[must_use]
    pub const fn base(&self) -> Option<&FieldBase> {
        match self {
            Self::Asset(f) | Self::Multiasset(f) => Some(&f.base),
            Self::Bloks(f) => Some(&f.base),
            Self::Boolean(f) | Self::Table(f) => Some(&f.base),
            Self::Custom(f) => Some(&f.base),
            Self::Datetime(f) => Some(&f.base),
            Self::Markdown(f) | Self::Richtext(f) => Some(&f.base),
            Self::Multilink(f) => Some(&f.base),
            Self::Number(f) => Some(&f.base),
            Self::Option(f) | Self::Options(f) => Some(&f.base),
            Self::Text(f) => Some(&f.base),
            Self::Textarea(f) => Some(&f.base),
            Self::Section(_) | Self::Tab(_) => None,
        }
    }

    #[must_use]
    pub const fn position(&self) -> u32 {
        match self {
            Self::Section(g) | Self::Tab(g) => g.position,
            _ => match self.base() {
                Some(base) => base.position,
                None => 0,
            },
        }
    }

    /// Member keys of a section or tab.
    #[must_use]
    pub fn keys(&self) -> Option<&[String]> {
        match self {
            Self::Section(g) | Self::Tab(g) => Some(&g.keys),
            _ => None,
        }
    }
}

///
/// FieldBase
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FieldBase {
    pub position: u32,
    pub display_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub required: bool,
}

///
/// PlainField
/// boolean and table fields carry nothing beyond the base
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PlainField {
    #[serde(flatten)]
    pub base: FieldBase,
}

///
/// TextField
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TextField {
    #[serde(flatten)]
    pub base: FieldBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
}

///
/// TextareaField
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TextareaField {
    #[serde(flatten)]
    pub base: FieldBase,

    #[serde(skip_serializing_if = "Not::not")]
    pub rtl: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
}

///
/// RichTextField
/// shared by markdown and richtext
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RichTextField {
    #[serde(flatten)]
    pub base: FieldBase,

    #[serde(skip_serializing_if = "Not::not")]
    pub rtl: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    #[serde(skip_serializing_if = "Not::not")]
    pub customize_toolbar: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub toolbar: Vec<String>,

    #[serde(skip_serializing_if = "Not::not")]
    pub restrict_components: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub component_whitelist: Vec<String>,
}

///
/// NumberField
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NumberField {
    #[serde(flatten)]
    pub base: FieldBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Number>,
}

///
/// DatetimeField
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DatetimeField {
    #[serde(flatten)]
    pub base: FieldBase,

    pub disable_time: bool,
}

///
/// AssetField
/// shared by asset and multiasset
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AssetField {
    #[serde(flatten)]
    pub base: FieldBase,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filetypes: Vec<String>,
}

///
/// MultilinkField
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct MultilinkField {
    #[serde(flatten)]
    pub base: FieldBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_slug: Option<String>,

    #[serde(skip_serializing_if = "Not::not")]
    pub restrict_content_types: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub component_whitelist: Vec<String>,

    pub asset_link_type: bool,
    pub allow_target_blank: bool,
    pub email_link_type: bool,
    pub show_anchor: bool,
}

///
/// OptionSource
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSource {
    Internal,
    InternalStories,
}

///
/// OptionEntry
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OptionEntry {
    pub name: String,
    pub value: String,
}

///
/// OptionField
/// shared by option and options; bounds only ever appear on options
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct OptionField {
    #[serde(flatten)]
    pub base: FieldBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<OptionSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource_slug: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_content_type: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_slug: Option<String>,

    #[serde(skip_serializing_if = "Not::not")]
    pub use_uuid: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

///
/// BloksField
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BloksField {
    #[serde(flatten)]
    pub base: FieldBase,

    pub restrict_components: bool,
    pub component_whitelist: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

///
/// CustomField
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CustomField {
    #[serde(flatten)]
    pub base: FieldBase,

    pub field_type: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PluginOption>,
}

///
/// GroupField
/// synthesized section or tab
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct GroupField {
    pub position: u32,
    pub display_name: String,
    pub keys: Vec<String>,
}
