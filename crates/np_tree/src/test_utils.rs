//! A minimal JSON-like node used by the unit tests.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::structure::Structure;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Node>),
    Object(BTreeMap<String, Node>),
}

impl Structure for Node {
    type Mapping = BTreeMap<String, Node>;

    fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Node::Array(array) => Some(array),
            _ => None,
        }
    }

    fn as_mapping(&self) -> Option<&Self::Mapping> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    fn from_sequence(sequence: Vec<Self>) -> Self {
        Node::Array(sequence)
    }

    fn from_mapping(mapping: Self::Mapping) -> Self {
        Node::Object(mapping)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

pub(crate) fn array(items: impl IntoIterator<Item = Node>) -> Node {
    Node::Array(items.into_iter().collect())
}

pub(crate) fn object<'a>(entries: impl IntoIterator<Item = (&'a str, Node)>) -> Node {
    Node::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}
