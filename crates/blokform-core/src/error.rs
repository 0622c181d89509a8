use thiserror::Error as ThisError;

///
/// MappingError
///
/// Authoring mistakes detected while mapping a type onto a component.
/// All of them are deterministic; retrying the same input fails the same way.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MappingError {
    #[error("field '{field}': unsupported type '{type_name}'")]
    UnsupportedType { field: String, type_name: String },

    #[error("field '{field}': unsupported array type '{type_name}'")]
    UnsupportedArrayType { field: String, type_name: String },

    #[error("field '{field}' requires catalog integration config, but none was supplied")]
    MissingIntegrationConfig { field: String },

    #[error("component '{component}': duplicate schema key '{key}'")]
    DuplicateFieldKey { component: String, key: String },

    #[error("type '{name}' not found in type graph")]
    UnknownType { name: String },
}

impl MappingError {
    pub(crate) fn unsupported(field: &str, type_name: &str) -> Self {
        Self::UnsupportedType {
            field: field.to_string(),
            type_name: type_name.to_string(),
        }
    }

    pub(crate) fn unsupported_array(field: &str, type_name: &str) -> Self {
        Self::UnsupportedArrayType {
            field: field.to_string(),
            type_name: type_name.to_string(),
        }
    }

    pub(crate) fn missing_integration(field: &str) -> Self {
        Self::MissingIntegrationConfig {
            field: field.to_string(),
        }
    }
}
