//! Field classification: one schema field in, one component field out.

mod classify;
mod custom;
mod kind;
mod reference;
mod scalar;

pub use classify::{FieldContext, WellKnown, classify};
pub use kind::*;

use crate::naming::display_label;
use blokform_schema::prelude::*;

impl FieldBase {
    /// Base attributes of a declared field.
    ///
    /// `required` follows the type reference unless the field directive
    /// sets it explicitly.
    #[must_use]
    pub fn from_field(field: &FieldDefinition, position: u32) -> Self {
        let display_name = field
            .directive_text(DirectiveName::Field, Arg::DisplayName)
            .map_or_else(|| display_label(&field.name), ToString::to_string);

        let required = field
            .directive_value(DirectiveName::Field, Arg::Required)
            .and_then(Literal::as_bool)
            .unwrap_or(field.ty.required);

        Self {
            position,
            display_name,
            description: field.description.clone(),
            required,
        }
    }
}

// shorthand for the field directive, which carries nearly every per-field setting
pub(crate) fn arg<'a>(field: &'a FieldDefinition, arg: Arg) -> Option<&'a Literal> {
    field.directive_value(DirectiveName::Field, arg)
}

pub(crate) fn arg_int(field: &FieldDefinition, key: Arg) -> Option<i64> {
    arg(field, key).and_then(Literal::as_int)
}

///
/// TESTS
///
