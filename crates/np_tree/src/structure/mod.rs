//! The structural capability a tree type provides to be path-indexable.
//!
//! A tree node is exactly one of:
//!
//! - a **sequence**: an ordered list of child nodes;
//! - a **mapping**: string keys to child nodes, keys unique;
//! - a **leaf**: anything else. Leaves are opaque to this crate.
//!
//! [`Structure`] exposes the two container views and the two container
//! constructors. Nothing else about the node type is needed: path access
//! never inspects or builds leaves.

// -----------------------------------------------------------------------------
// Modules

mod mapping;

// -----------------------------------------------------------------------------
// Exports

pub use mapping::Mapping;

// -----------------------------------------------------------------------------
// Imports

use alloc::vec::Vec;
use core::fmt;

// -----------------------------------------------------------------------------
// StructureKind

/// The shape of a node as seen through [`Structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StructureKind {
    /// The node has a sequence view.
    Sequence,
    /// The node has a mapping view.
    Mapping,
    /// The node has neither view.
    Leaf,
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Leaf => "leaf",
        })
    }
}

// -----------------------------------------------------------------------------
// Structure

/// A tree node that can be indexed by [`PathIndex`](crate::PathIndex).
///
/// A node reporting a sequence view must not report a mapping view, and
/// the other way around.
///
/// Nodes are treated as values: every write builds a new container through
/// [`from_sequence`] or [`from_mapping`] and threads it back to the root.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use np_tree::{PathAccess, Structure, path};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Tree {
///     Leaf(i32),
///     List(Vec<Tree>),
///     Dict(BTreeMap<String, Tree>),
/// }
///
/// impl Structure for Tree {
///     type Mapping = BTreeMap<String, Tree>;
///
///     fn as_sequence(&self) -> Option<&[Self]> {
///         match self {
///             Tree::List(list) => Some(list),
///             _ => None,
///         }
///     }
///
///     fn as_mapping(&self) -> Option<&Self::Mapping> {
///         match self {
///             Tree::Dict(dict) => Some(dict),
///             _ => None,
///         }
///     }
///
///     fn from_sequence(sequence: Vec<Self>) -> Self {
///         Tree::List(sequence)
///     }
///
///     fn from_mapping(mapping: Self::Mapping) -> Self {
///         Tree::Dict(mapping)
///     }
/// }
///
/// let mut tree = Tree::Dict(BTreeMap::new());
/// tree.set_path(path!["a", "b"], Tree::Leaf(1));
/// assert_eq!(tree.get_path("a.b").as_deref(), Some(&Tree::Leaf(1)));
/// ```
///
/// [`from_sequence`]: Structure::from_sequence
/// [`from_mapping`]: Structure::from_mapping
pub trait Structure: Clone + Sized {
    /// The keyed container behind the mapping view.
    type Mapping: Mapping<Self>;

    /// Returns the children if this node is sequence-shaped.
    fn as_sequence(&self) -> Option<&[Self]>;

    /// Returns the children if this node is mapping-shaped.
    fn as_mapping(&self) -> Option<&Self::Mapping>;

    /// Builds a sequence-shaped node.
    fn from_sequence(sequence: Vec<Self>) -> Self;

    /// Builds a mapping-shaped node.
    fn from_mapping(mapping: Self::Mapping) -> Self;

    /// Takes the children out of a sequence-shaped node, or gives the node back.
    ///
    /// The default implementation clones the children. Types that own a
    /// `Vec<Self>` should override it to move the vector out.
    fn into_sequence(self) -> Result<Vec<Self>, Self> {
        if let Some(sequence) = self.as_sequence() {
            return Ok(sequence.to_vec());
        }
        Err(self)
    }

    /// Takes the children out of a mapping-shaped node, or gives the node back.
    ///
    /// The default implementation clones the mapping.
    fn into_mapping(self) -> Result<Self::Mapping, Self> {
        if let Some(mapping) = self.as_mapping() {
            return Ok(mapping.clone());
        }
        Err(self)
    }

    /// Returns the shape of this node.
    #[inline]
    fn kind(&self) -> StructureKind {
        if self.as_sequence().is_some() {
            StructureKind::Sequence
        } else if self.as_mapping().is_some() {
            StructureKind::Mapping
        } else {
            StructureKind::Leaf
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
