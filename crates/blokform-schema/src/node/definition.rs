use crate::prelude::*;

///
/// TypeKind
///
/// Shape of a named type in the graph.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[remain::sorted]
pub enum TypeKind {
    Enum { members: Vec<EnumMember> },
    Object { fields: Vec<FieldDefinition> },
    Scalar,
    Union { members: Vec<String> },
}

///
/// TypeDefinition
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TypeDefinition {
    pub name: String,

    #[serde(flatten)]
    pub kind: TypeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl TypeDefinition {
    fn with_kind(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            directives: Vec::new(),
        }
    }

    #[must_use]
    pub fn object(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self::with_kind(name, TypeKind::Object { fields })
    }

    #[must_use]
    pub fn enumeration(name: impl Into<String>, members: Vec<EnumMember>) -> Self {
        Self::with_kind(name, TypeKind::Enum { members })
    }

    #[must_use]
    pub fn union<S: Into<String>>(name: impl Into<String>, members: Vec<S>) -> Self {
        let members = members.into_iter().map(Into::into).collect();

        Self::with_kind(name, TypeKind::Union { members })
    }

    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Scalar)
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Declared fields in order; empty for anything but an object type.
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        match &self.kind {
            TypeKind::Object { fields } => fields,
            _ => &[],
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().iter().find(|f| f.name == name)
    }

    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self.kind, TypeKind::Object { .. })
    }
}

impl DirectiveHolder for TypeDefinition {
    fn directives(&self) -> &[Directive] {
        &self.directives
    }
}

///
/// EnumMember
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnumMember {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnumMember {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
