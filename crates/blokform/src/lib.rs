//! ## Crate layout
//! - `schema`: the read-only type graph and directive lookups.
//! - `config`: run configuration and catalog connection settings.
//! - `core`: the field mapping engine and component assembly.
//! - `batch`: whole-graph assembly with an abort/skip policy.
//! - `render`: HCL output for the provisioning tool.

pub use blokform_config as config;
pub use blokform_core as core;
pub use blokform_schema as schema;

pub mod batch;
pub mod error;
pub mod render;

pub use batch::{BatchOutput, BatchPolicy, build_component, build_components};
pub use error::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Map every object type in `graph` and render the resulting resources.
pub fn generate(
    graph: &schema::node::TypeGraph,
    config: config::Config,
    policy: BatchPolicy,
) -> Result<String, Error> {
    config.validate()?;

    let options = core::EngineOptions::from(config);
    let output = build_components(graph, &options, policy)?;

    render::component_resources(&output.components)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        BatchPolicy, Error, build_component, build_components,
        config::{Config, IntegrationConfig},
        core::prelude::*,
        generate,
        render::{component_resource, component_resources},
        schema::prelude::*,
    };
}
