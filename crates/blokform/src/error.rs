use blokform_config::ConfigError;
use blokform_core::MappingError;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("failed to serialize component '{component}': {source}")]
    Serialize {
        component: String,
        source: serde_json::Error,
    },
}
