use blokform_schema::literal::Literal;
use indexmap::IndexSet;
use serde::Serialize;
use std::hash::Hash;

///
/// EmbeddedValue
///
/// A configured string as it lands in the provisioning config: either a
/// quoted literal or a bare reference expression (`var.x`, `local.y`).
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EmbeddedValue {
    Literal(String),
    Reference(String),
}

const REFERENCE_PREFIXES: [&str; 2] = ["var.", "local."];

impl EmbeddedValue {
    /// Split configured text into literal or reference by its prefix.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if REFERENCE_PREFIXES.iter().any(|p| raw.starts_with(p)) {
            Self::Reference(raw.to_string())
        } else {
            Self::Literal(raw.to_string())
        }
    }

    #[must_use]
    pub fn literal(s: impl Into<String>) -> Self {
        Self::Literal(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Reference(s) => s,
        }
    }

    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl Default for EmbeddedValue {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

///
/// Number
///
/// Numeric attribute that keeps integers integral on the wire.
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub const fn from_literal(lit: &Literal) -> Option<Self> {
        match lit {
            Literal::Int(i) => Some(Self::Int(*i)),
            Literal::Float(f) => Some(Self::Float(*f)),
            _ => None,
        }
    }
}

/// Texts of a literal, wrapping a lone value into a one-element list.
/// Non-textual items are dropped.
#[must_use]
pub fn text_list(lit: Option<&Literal>) -> Vec<String> {
    let Some(lit) = lit else {
        return Vec::new();
    };

    lit.as_list()
        .unwrap_or(std::slice::from_ref(lit))
        .iter()
        .filter_map(Literal::as_text)
        .map(ToString::to_string)
        .collect()
}

/// Drop repeated items, keeping the first occurrence of each.
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_prefixes_are_detected() {
        assert!(EmbeddedValue::classify("var.client_id").is_reference());
        assert!(EmbeddedValue::classify("local.secret").is_reference());
        assert!(!EmbeddedValue::classify("variable").is_reference());
        assert!(!EmbeddedValue::classify("https://api.example.com").is_reference());
    }

    #[test]
    fn serializes_with_its_kind() {
        let reference = serde_json::to_value(EmbeddedValue::classify("var.x")).unwrap();
        let literal = serde_json::to_value(EmbeddedValue::classify("a${b}")).unwrap();

        assert_eq!(
            reference,
            serde_json::json!({ "kind": "reference", "value": "var.x" })
        );
        assert_eq!(
            literal,
            serde_json::json!({ "kind": "literal", "value": "a${b}" })
        );
    }

    #[test]
    fn text_list_wraps_single_values() {
        assert_eq!(text_list(Some(&Literal::from("a"))), vec!["a"]);
        assert_eq!(
            text_list(Some(&Literal::from(vec!["a", "b"]))),
            vec!["a", "b"]
        );
        assert!(text_list(None).is_empty());
        assert!(text_list(Some(&Literal::Int(1))).is_empty());
    }

    #[test]
    fn unique_keeps_first_occurrence() {
        assert_eq!(unique(vec!["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn numbers_stay_integral() {
        let int = serde_json::to_string(&Number::Int(2)).unwrap();
        let float = serde_json::to_string(&Number::Float(0.5)).unwrap();

        assert_eq!(int, "2");
        assert_eq!(float, "0.5");
    }
}
