//! Field mapping engine: turns one annotated type definition into a CMS
//! component with an ordered, positioned field schema.
//!
//! ## Crate layout
//! - `field`: classification of a single field into one `ComponentField` kind.
//! - `group`: section and tab synthesis.
//! - `component`: component assembly (flags, display metadata, schema map).
//! - `integration`: option lists for catalog-backed custom fields.
//! - `value`: literal/reference values and small coercion helpers.

pub mod component;
pub mod error;
pub mod field;
pub mod group;
pub mod integration;
pub mod naming;
pub mod value;

pub use component::{Component, ComponentType, EngineOptions, assemble};
pub use error::MappingError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        component::{Component, ComponentType, EngineOptions, assemble},
        error::MappingError,
        field::{ComponentField, FieldContext, FieldKind, classify},
        group::build_groups,
        integration::{PluginOption, category_options, connection_options},
        value::EmbeddedValue,
    };
    pub use blokform_config::IntegrationConfig;
}
