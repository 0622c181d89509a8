use crate::prelude::*;
use indexmap::IndexMap;

///
/// TypeGraph
///
/// Every named type in the schema, keyed by name in declaration order.
/// Built once by the parser and only read afterwards.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeGraph {
    types: IndexMap<String, TypeDefinition>,
}

impl TypeGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, replacing (and returning) any previous one of the same name.
    pub fn insert(&mut self, def: TypeDefinition) -> Option<TypeDefinition> {
        self.types.insert(def.name.clone(), def)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// Object types only, in declaration order.
    pub fn objects(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.iter().filter(|def| def.is_object())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDefinition> for TypeGraph {
    fn from_iter<I: IntoIterator<Item = TypeDefinition>>(iter: I) -> Self {
        let mut graph = Self::new();
        for def in iter {
            graph.insert(def);
        }

        graph
    }
}

///
/// TESTS
///
