//! HCL rendering of assembled components as `storyblok_component` resources.
//!
//! Attributes come from the JSON form of a component, where every string is a
//! literal. Reference expressions only come from typed `EmbeddedValue`s
//! (the space id and custom field plugin options), which are rendered bare.
//! Literal strings have template sequences escaped so the provisioning tool
//! never interpolates authored text.

use crate::Error;
use blokform_core::{
    Component, field::ComponentField, integration::PluginOption, value::EmbeddedValue,
};
use serde_json::Value;
use std::fmt::Write as _;

pub const RESOURCE_TYPE: &str = "storyblok_component";

const INDENT: &str = "  ";

///
/// Node
///
/// Attribute tree the writer walks.
///

#[derive(Debug)]
enum Node {
    Scalar(Value),
    Expr(String),
    List(Vec<Self>),
    Block(Vec<(String, Self)>),
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Block(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
            scalar => Self::Scalar(scalar),
        }
    }
}

impl From<&EmbeddedValue> for Node {
    fn from(value: &EmbeddedValue) -> Self {
        if value.is_reference() {
            Self::Expr(value.as_str().to_string())
        } else {
            Self::Scalar(Value::String(value.as_str().to_string()))
        }
    }
}

impl From<&PluginOption> for Node {
    fn from(option: &PluginOption) -> Self {
        Self::Block(vec![
            ("name".to_string(), Self::Scalar(Value::String(option.name.clone()))),
            ("value".to_string(), Self::from(&option.value)),
        ])
    }
}

impl Node {
    fn replace(&mut self, key: &str, node: Self) {
        if let Self::Block(entries) = self
            && let Some(slot) = entries.iter_mut().find(|(k, _)| k == key)
        {
            slot.1 = node;
        }
    }
}

/// Render one component as a resource block.
pub fn component_resource(component: &Component) -> Result<String, Error> {
    let body = component_node(component).map_err(|source| Error::Serialize {
        component: component.name.clone(),
        source,
    })?;

    let mut out = format!(
        "resource \"{RESOURCE_TYPE}\" {} {{\n",
        quote(&component.name)
    );
    if let Node::Block(entries) = &body {
        write_body(&mut out, entries, 1);
    }
    out.push_str("}\n");

    Ok(out)
}

/// Render several components, separated by blank lines.
pub fn component_resources(components: &[Component]) -> Result<String, Error> {
    let blocks = components
        .iter()
        .map(component_resource)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(blocks.join("\n"))
}

fn component_node(component: &Component) -> Result<Node, serde_json::Error> {
    let mut node = Node::from(serde_json::to_value(component)?);

    let schema = component
        .schema
        .iter()
        .map(|(key, field)| Ok((key.clone(), field_node(field)?)))
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    node.replace("space_id", Node::from(&component.space_id));
    node.replace("schema", Node::Block(schema));

    Ok(node)
}

fn field_node(field: &ComponentField) -> Result<Node, serde_json::Error> {
    let mut node = Node::from(serde_json::to_value(field)?);

    if let ComponentField::Custom(custom) = field {
        let options = custom.options.iter().map(Node::from).collect();
        node.replace("options", Node::List(options));
    }

    Ok(node)
}

fn write_body(out: &mut String, entries: &[(String, Node)], depth: usize) {
    let width = entries.iter().map(|(k, _)| key(k).len()).max().unwrap_or(0);
    let pad = INDENT.repeat(depth);

    for (k, v) in entries {
        let k = key(k);
        let _ = write!(out, "{pad}{k:<width$} = ");
        write_node(out, v, depth);
        out.push('\n');
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Scalar(Value::String(s)) => out.push_str(&quote(s)),
        Node::Scalar(scalar) => {
            let _ = write!(out, "{scalar}");
        }
        Node::Expr(expr) => out.push_str(expr),
        Node::List(items) if items.iter().all(is_inline) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_node(out, item, depth);
            }
            out.push(']');
        }
        Node::List(items) => {
            let pad = INDENT.repeat(depth + 1);
            out.push_str("[\n");
            for item in items {
                out.push_str(&pad);
                write_node(out, item, depth + 1);
                out.push_str(",\n");
            }
            let _ = write!(out, "{}]", INDENT.repeat(depth));
        }
        Node::Block(entries) if entries.is_empty() => out.push_str("{}"),
        Node::Block(entries) => {
            out.push_str("{\n");
            write_body(out, entries, depth + 1);
            let _ = write!(out, "{}}}", INDENT.repeat(depth));
        }
    }
}

const fn is_inline(node: &Node) -> bool {
    matches!(node, Node::Scalar(_) | Node::Expr(_))
}

fn key(k: &str) -> String {
    let mut chars = k.chars();
    let ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if ident { k.to_string() } else { quote(k) }
}

// quoted literal; `${` and `%{` would otherwise open a template
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut chars = s.chars().peekable();

    out.push('"');
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push('"');

    out
}

///
/// TESTS
///
