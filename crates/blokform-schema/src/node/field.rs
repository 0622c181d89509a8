use crate::prelude::*;

///
/// FieldDefinition
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl FieldDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            directives: Vec::new(),
        }
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
}

impl DirectiveHolder for FieldDefinition {
    fn directives(&self) -> &[Directive] {
        &self.directives
    }
}
