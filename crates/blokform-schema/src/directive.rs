use crate::literal::Literal;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// DirectiveName
///
/// The closed set of directives the mapping engine reads.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum DirectiveName {
    #[display("catalog")]
    Catalog,

    #[display("component")]
    Component,

    #[display("field")]
    Field,
}

///
/// Arg
///
/// Argument keys understood by the engine, rendered as they appear in the schema.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum Arg {
    #[display("blokTypes")]
    BlokTypes,

    #[display("category")]
    Category,

    #[display("color")]
    Color,

    #[display("contentTypes")]
    ContentTypes,

    #[display("ctType")]
    CtType,

    #[display("datasource")]
    Datasource,

    #[display("decimals")]
    Decimals,

    #[display("displayName")]
    DisplayName,

    #[display("fileTypes")]
    FileTypes,

    #[display("folder")]
    Folder,

    #[display("format")]
    Format,

    #[display("icon")]
    Icon,

    #[display("linkFeatures")]
    LinkFeatures,

    #[display("max")]
    Max,

    #[display("maxLength")]
    MaxLength,

    #[display("min")]
    Min,

    #[display("preview")]
    Preview,

    #[display("regex")]
    Regex,

    #[display("required")]
    Required,

    #[display("rtl")]
    Rtl,

    #[display("section")]
    Section,

    #[display("step")]
    Step,

    #[display("tab")]
    Tab,

    #[display("toolbar")]
    Toolbar,

    #[display("type")]
    Type,
}

///
/// Directive
///
/// One annotation as parsed from the schema. Names and argument keys stay
/// free-form strings here; the typed lookup happens in [`resolve`].
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<(String, Literal)>,
}

impl Directive {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument, keeping declaration order.
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Literal>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Literal> {
        self.args.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

///
/// DirectiveHolder
///
/// Anything that carries directives: type definitions and fields.
///

pub trait DirectiveHolder {
    fn directives(&self) -> &[Directive];

    fn directive_value(&self, name: DirectiveName, arg: Arg) -> Option<&Literal> {
        resolve(self, name, arg)
    }

    fn directive_text(&self, name: DirectiveName, arg: Arg) -> Option<&str> {
        self.directive_value(name, arg).and_then(Literal::as_text)
    }
}

/// Look up `arg` on the first directive named `name`.
///
/// Later directives with the same name are never consulted, even when the
/// first one lacks the argument.
pub fn resolve<H>(holder: &H, name: DirectiveName, arg: Arg) -> Option<&Literal>
where
    H: DirectiveHolder + ?Sized,
{
    let name = name.to_string();
    let key = arg.to_string();

    holder
        .directives()
        .iter()
        .find(|d| d.name == name)
        .and_then(|d| d.get(&key))
}

///
/// TESTS
///
