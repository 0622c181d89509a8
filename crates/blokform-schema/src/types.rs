use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Cardinality {
    #[default]
    One,
    Many,
}

///
/// TypeRef
///
/// A field's reference to a named type plus its modifiers.
/// `required` describes the outer reference (`[Tag]!` is a required list).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeRef {
    pub name: String,

    #[serde(default)]
    pub cardinality: Cardinality,

    #[serde(default)]
    pub required: bool,
}

impl TypeRef {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cardinality: Cardinality::One,
            required: false,
        }
    }

    #[must_use]
    pub fn list_of(name: impl Into<String>) -> Self {
        Self {
            cardinality: Cardinality::Many,
            ..Self::named(name)
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.cardinality, Cardinality::Many)
    }
}
