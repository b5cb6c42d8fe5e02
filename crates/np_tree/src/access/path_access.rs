//! Provide multi-layer path accessing support

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::mem;

use crate::access::{AccessError, IntoPath, PathIndex};
use crate::structure::Structure;

// -----------------------------------------------------------------------------
// Resolver

#[inline]
fn step<'r, T: Structure>(index: &PathIndex<'_>, current: Cow<'r, T>) -> Option<Cow<'r, T>> {
    match current {
        Cow::Borrowed(node) => index.get(node),
        Cow::Owned(node) => index.get(&node).map(|value| Cow::Owned(value.into_owned())),
    }
}

/// Reads the value at `path` below `root`.
///
/// Each step is applied to the result of the previous one; the first
/// missing step ends the walk with `None`. The empty path yields `root`.
///
/// The result borrows from `root` unless a key was broadcast over a
/// sequence on the way.
pub fn resolve_get<'r, T: Structure>(path: &[PathIndex<'_>], root: &'r T) -> Option<Cow<'r, T>> {
    path.iter()
        .try_fold(Cow::Borrowed(root), |current, index| step(index, current))
}

/// Writes `input` at `path` below `node` and returns the rebuilt node.
///
/// `None` removes the addressed element. A missing intermediate container
/// is created empty, its shape chosen by the step that leads into it: a
/// sequence for [`PathIndex::Index`], a mapping for [`PathIndex::Key`].
/// Every rebuilt child is written back into its parent, up to the root.
///
/// Steps that cannot apply are silent no-ops, see [`PathIndex::set`].
/// The empty path returns `node` as is.
pub fn resolve_set<T: Structure>(path: &[PathIndex<'_>], input: Option<T>, node: T) -> T {
    match path {
        [] => node,
        [index] => index.set(input, node),
        [index, rest @ ..] => {
            let next = match index.get(&node) {
                Some(next) => next.into_owned(),
                None => {
                    log::trace!("creating an empty {} for `{}`", kind_name(index), index);
                    index.make_empty_structure()
                }
            };
            let next = resolve_set(rest, input, next);
            index.set(Some(next), node)
        }
    }
}

#[inline]
fn kind_name(index: &PathIndex<'_>) -> &'static str {
    match index {
        PathIndex::Index(_) => "sequence",
        PathIndex::Key(_) => "mapping",
    }
}

/// Same as [`resolve_get`], but reports which step failed and why.
pub fn try_resolve_get<'r, 'a, T: Structure>(
    path: &[PathIndex<'a>],
    root: &'r T,
) -> Result<Cow<'r, T>, AccessError<'a>> {
    let mut current = Cow::Borrowed(root);
    for (offset, index) in path.iter().enumerate() {
        current = match current {
            Cow::Borrowed(node) => index.try_get(node, Some(offset))?,
            Cow::Owned(node) => Cow::Owned(index.try_get(&node, Some(offset))?.into_owned()),
        };
    }
    Ok(current)
}

/// Checks that [`resolve_set`] would write `path` into `root` without
/// hitting a silent no-op.
///
/// The walk follows [`resolve_set`], including the containers it would
/// create, and fails on the first step whose write-back could not apply.
pub fn check_resolve_set<'a, T: Structure>(
    path: &[PathIndex<'a>],
    root: &T,
) -> Result<(), AccessError<'a>> {
    let mut current = Cow::Borrowed(root);
    for (offset, index) in path.iter().enumerate() {
        index.check_set(&*current, Some(offset))?;
        current = step(index, current).unwrap_or_else(|| Cow::Owned(index.make_empty_structure()));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Trait for multi-layer accessing

/// Provide full path access methods for every [`Structure`].
///
/// The path can be anything implementing [`IntoPath`]: a dotted string,
/// a single index, a [`PathIndex`], a [`Path`](crate::Path) or a list of
/// steps.
///
/// # Examples
///
/// ```
/// use np_tree::{PathAccess, path};
/// use serde_json::json;
///
/// let mut root = json!({ "one": ["a", "b", "c"] });
///
/// assert_eq!(*root.get_path(path!["one", 1]).unwrap(), json!("b"));
/// assert!(root.get_path(path!["one", "missingKey"]).is_none());
///
/// root.set_path(path!["one", 1], json!("Z"));
/// assert_eq!(root, json!({ "one": ["a", "Z", "c"] }));
///
/// // missing containers are created on the way
/// root.set_path("user.name", json!("ada"));
/// assert_eq!(root["user"], json!({ "name": "ada" }));
///
/// root.remove_path("one");
/// assert_eq!(root, json!({ "user": { "name": "ada" } }));
/// ```
pub trait PathAccess: Structure {
    /// Returns the value specified by `path`, or `None`.
    ///
    /// See [`resolve_get`].
    #[inline]
    fn get_path<'b>(&self, path: impl IntoPath<'b>) -> Option<Cow<'_, Self>> {
        resolve_get(path.into_path().as_slice(), self)
    }

    /// Returns the value specified by `path`, or the reason it is missing.
    ///
    /// See [`try_resolve_get`].
    #[inline]
    fn try_get_path<'b>(&self, path: impl IntoPath<'b>) -> Result<Cow<'_, Self>, AccessError<'b>> {
        try_resolve_get(path.into_path().as_slice(), self)
    }

    /// Writes `value` at `path`; `None` removes the addressed element.
    ///
    /// See [`resolve_set`].
    fn set_path<'b>(&mut self, path: impl IntoPath<'b>, value: impl Into<Option<Self>>) {
        let path = path.into_path();
        if path.is_empty() {
            return;
        }
        let root = mem::replace(self, Self::from_sequence(Vec::new()));
        *self = resolve_set(path.as_slice(), value.into(), root);
    }

    /// Writes `value` at `path`, failing where [`set_path`] would do nothing.
    ///
    /// `self` is left untouched on failure.
    ///
    /// [`set_path`]: PathAccess::set_path
    fn try_set_path<'b>(
        &mut self,
        path: impl IntoPath<'b>,
        value: impl Into<Option<Self>>,
    ) -> Result<(), AccessError<'b>> {
        let path = path.into_path();
        check_resolve_set(path.as_slice(), self)?;
        if !path.is_empty() {
            let root = mem::replace(self, Self::from_sequence(Vec::new()));
            *self = resolve_set(path.as_slice(), value.into(), root);
        }
        Ok(())
    }

    /// Removes the element at `path`.
    #[inline]
    fn remove_path<'b>(&mut self, path: impl IntoPath<'b>) {
        self.set_path(path, None::<Self>);
    }

    /// Writes `value` at `path` and returns the new root.
    #[inline]
    #[must_use]
    fn with_path<'b>(self, path: impl IntoPath<'b>, value: impl Into<Option<Self>>) -> Self {
        resolve_set(path.into_path().as_slice(), value.into(), self)
    }
}

impl<T: Structure> PathAccess for T {}

// -----------------------------------------------------------------------------
// Tests
