//! Read-only type graph consumed by the blokform mapping engine.
//!
//! The graph is produced by an external schema parser; this crate only
//! models it and answers directive lookups against it.

pub mod directive;
pub mod literal;
pub mod node;
pub mod types;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        directive::{Arg, Directive, DirectiveHolder, DirectiveName, resolve},
        literal::Literal,
        node::*,
        types::{Cardinality, TypeRef},
    };
    pub use serde::{Deserialize, Serialize};
}
