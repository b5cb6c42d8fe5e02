//! Provide single-layer path accessing support

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::structure::{Mapping, Structure, StructureKind};

// -----------------------------------------------------------------------------
// Single layer accessor

/// A **singular** step within a path.
///
/// # Rules
///
/// - `Index(i)`: the `i`-th element of a sequence.
/// - `Key(k)`: the value bound to `k` in a mapping. Applied to a sequence, the
///   key is broadcast to every element.
///
/// Reads return `None` for a missing key, an out-of-range index or a shape
/// that does not fit; the three cases are not told apart. Writes that cannot
/// apply leave the node as it was. Use [`try_get`] and [`try_set`] to learn
/// why an access failed.
///
/// # Examples
///
/// ```
/// use np_tree::PathIndex;
/// use serde_json::json;
///
/// let node = json!({ "list": ["a", "b"] });
///
/// let list = PathIndex::from("list").get(&node).unwrap();
/// let elem = PathIndex::Index(1).get(&*list).unwrap();
/// assert_eq!(*elem, json!("b"));
///
/// // broadcast over a sequence
/// let rows = json!([{ "id": 1 }, { "id": 2 }]);
/// let ids = PathIndex::from("id").get(&rows).unwrap();
/// assert_eq!(*ids, json!([1, 2]));
/// ```
///
/// [`try_get`]: PathIndex::try_get
/// [`try_set`]: PathIndex::try_set
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathIndex<'a> {
    /// A position in a sequence.
    ///
    /// Example: the `5` of `[5]`
    Index(usize),
    /// A key in a mapping, broadcast over sequences.
    ///
    /// Example: the `id` of `.id`
    Key(Cow<'a, str>),
}

impl From<usize> for PathIndex<'_> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for PathIndex<'a> {
    #[inline]
    fn from(key: &'a str) -> Self {
        Self::Key(Cow::Borrowed(key))
    }
}

impl From<String> for PathIndex<'_> {
    #[inline]
    fn from(key: String) -> Self {
        Self::Key(Cow::Owned(key))
    }
}

impl<'a> From<Cow<'a, str>> for PathIndex<'a> {
    #[inline]
    fn from(key: Cow<'a, str>) -> Self {
        Self::Key(key)
    }
}

impl fmt::Display for PathIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Key(key) => write!(f, ".{key}"),
        }
    }
}

// -----------------------------------------------------------------------------
// Error

/// The kind of [`AccessError`], along with some kind-specific information.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessErrorKind {
    #[error("the mapping has no such key")]
    MissingKey,

    #[error("the index is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { len: usize },

    #[error("expected a {expected}, found a {actual}")]
    IncompatibleKind {
        expected: StructureKind,
        actual: StructureKind,
    },

    #[error("the key is missing from the sequence element at position {position}")]
    IncompleteBroadcast { position: usize },
}

/// An error originating from a [`PathIndex`] applied to a node.
///
/// Use the `Display` impl of this type to get information on the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError<'a> {
    kind: AccessErrorKind,
    accessor: PathIndex<'a>,
    offset: Option<usize>,
}

impl<'a> AccessError<'a> {
    #[inline]
    pub(crate) fn new(
        kind: AccessErrorKind,
        accessor: PathIndex<'a>,
        offset: Option<usize>,
    ) -> Self {
        Self {
            kind,
            accessor,
            offset,
        }
    }

    /// Returns the kind of [`AccessError`].
    #[inline]
    pub fn kind(&self) -> &AccessErrorKind {
        &self.kind
    }

    /// Returns the [`PathIndex`] that this [`AccessError`] occurred in.
    #[inline]
    pub fn accessor(&self) -> &PathIndex<'a> {
        &self.accessor
    }

    /// Returns the position of the failing step in its path,
    /// if the step was applied as part of a path.
    #[inline]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> AccessError<'static> {
        AccessError {
            kind: self.kind,
            accessor: self.accessor.into_owned(),
            offset: self.offset,
        }
    }
}

impl fmt::Display for AccessError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error accessing `{}`", self.accessor)?;
        if let Some(offset) = self.offset {
            write!(f, " (step {offset})")?;
        }
        write!(f, ": {}", self.kind)
    }
}

impl core::error::Error for AccessError<'_> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.kind)
    }
}

// -----------------------------------------------------------------------------
// Accessor implementation

impl<'a> PathIndex<'a> {
    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> PathIndex<'static> {
        match self {
            Self::Index(index) => PathIndex::Index(index),
            Self::Key(key) => PathIndex::Key(Cow::Owned(key.into_owned())),
        }
    }

    /// Reads the child addressed by this step.
    ///
    /// A plain lookup borrows from `node`. A key broadcast over a sequence
    /// builds a new sequence of the projected values, in order; it succeeds
    /// only if every element yields a value.
    pub fn get<'r, T: Structure>(&self, node: &'r T) -> Option<Cow<'r, T>> {
        match self {
            &Self::Index(index) => node.as_sequence()?.get(index).map(Cow::Borrowed),
            Self::Key(key) => {
                if let Some(value) = node.as_mapping().and_then(|map| map.get(key)) {
                    return Some(Cow::Borrowed(value));
                }
                let projected = node
                    .as_sequence()?
                    .iter()
                    .map(|elem| self.get(elem).map(Cow::into_owned))
                    .collect::<Option<Vec<T>>>()?;
                Some(Cow::Owned(T::from_sequence(projected)))
            }
        }
    }

    /// Writes `input` at this step of `parent` and returns the rebuilt node.
    ///
    /// `None` removes the addressed element: a removed sequence element
    /// shifts the ones after it.
    ///
    /// - `Index` on a non-sequence or out of bounds returns `parent` as is.
    /// - `Key` on a sequence is written into every element, each element
    ///   following its own rules.
    /// - `Key` on a leaf returns `parent` as is.
    pub fn set<T: Structure>(&self, input: Option<T>, parent: T) -> T {
        match self {
            &Self::Index(index) => match parent.into_sequence() {
                Ok(mut sequence) if index < sequence.len() => {
                    match input {
                        Some(value) => sequence[index] = value,
                        None => {
                            sequence.remove(index);
                        }
                    }
                    T::from_sequence(sequence)
                }
                Ok(sequence) => {
                    log::debug!(
                        "write to `{}` ignored: sequence has {} elements",
                        self,
                        sequence.len()
                    );
                    T::from_sequence(sequence)
                }
                Err(parent) => {
                    log::debug!("write to `{}` ignored: found a {}", self, parent.kind());
                    parent
                }
            },
            Self::Key(key) => {
                let parent = match parent.into_mapping() {
                    Ok(mut mapping) => {
                        match input {
                            Some(value) => mapping.insert(String::from(&**key), value),
                            None => {
                                mapping.remove(key);
                            }
                        }
                        return T::from_mapping(mapping);
                    }
                    Err(parent) => parent,
                };
                match parent.into_sequence() {
                    Ok(sequence) => T::from_sequence(
                        sequence
                            .into_iter()
                            .map(|elem| self.set(input.clone(), elem))
                            .collect(),
                    ),
                    Err(parent) => {
                        log::debug!("write to `{}` ignored: found a leaf", self);
                        parent
                    }
                }
            }
        }
    }

    /// Creates the empty container this step can write into:
    /// a sequence for `Index`, a mapping for `Key`.
    #[inline]
    pub fn make_empty_structure<T: Structure>(&self) -> T {
        match self {
            Self::Index(_) => T::from_sequence(Vec::new()),
            Self::Key(_) => T::from_mapping(T::Mapping::default()),
        }
    }

    /// Reads the child addressed by this step, reporting why it is missing.
    ///
    /// Succeeds exactly when [`get`](PathIndex::get) returns `Some`.
    /// `offset` is only used in the error.
    pub fn try_get<'r, T: Structure>(
        &self,
        node: &'r T,
        offset: Option<usize>,
    ) -> Result<Cow<'r, T>, AccessError<'a>> {
        let res = match self {
            &Self::Index(index) => match node.as_sequence() {
                Some(sequence) => sequence
                    .get(index)
                    .map(Cow::Borrowed)
                    .ok_or(AccessErrorKind::IndexOutOfBounds {
                        len: sequence.len(),
                    }),
                None => Err(AccessErrorKind::IncompatibleKind {
                    expected: StructureKind::Sequence,
                    actual: node.kind(),
                }),
            },
            Self::Key(key) => {
                if let Some(mapping) = node.as_mapping() {
                    mapping
                        .get(key)
                        .map(Cow::Borrowed)
                        .ok_or(AccessErrorKind::MissingKey)
                } else if let Some(sequence) = node.as_sequence() {
                    let mut projected = Vec::with_capacity(sequence.len());
                    let mut missing = None;
                    for (position, elem) in sequence.iter().enumerate() {
                        match self.get(elem) {
                            Some(value) => projected.push(value.into_owned()),
                            None => {
                                missing = Some(position);
                                break;
                            }
                        }
                    }
                    match missing {
                        Some(position) => Err(AccessErrorKind::IncompleteBroadcast { position }),
                        None => Ok(Cow::Owned(T::from_sequence(projected))),
                    }
                } else {
                    Err(AccessErrorKind::IncompatibleKind {
                        expected: StructureKind::Mapping,
                        actual: StructureKind::Leaf,
                    })
                }
            }
        };

        res.map_err(|kind| AccessError::new(kind, self.clone(), offset))
    }

    /// Checks that [`set`](PathIndex::set) would take effect on `parent`.
    ///
    /// `Index` needs an in-bounds sequence, `Key` needs a mapping or a
    /// sequence. `offset` is only used in the error.
    pub fn check_set<T: Structure>(
        &self,
        parent: &T,
        offset: Option<usize>,
    ) -> Result<(), AccessError<'a>> {
        let res = match (self, parent.kind()) {
            (&Self::Index(index), StructureKind::Sequence) => {
                let len = parent.as_sequence().map_or(0, <[T]>::len);
                if index < len {
                    Ok(())
                } else {
                    Err(AccessErrorKind::IndexOutOfBounds { len })
                }
            }
            (Self::Index(_), actual) => Err(AccessErrorKind::IncompatibleKind {
                expected: StructureKind::Sequence,
                actual,
            }),
            (Self::Key(_), StructureKind::Leaf) => Err(AccessErrorKind::IncompatibleKind {
                expected: StructureKind::Mapping,
                actual: StructureKind::Leaf,
            }),
            (Self::Key(_), _) => Ok(()),
        };

        res.map_err(|kind| AccessError::new(kind, self.clone(), offset))
    }

    /// Writes `input` at this step of `parent`, failing instead of silently
    /// ignoring a write that cannot apply.
    ///
    /// On failure `parent` is handed back alongside the error.
    pub fn try_set<T: Structure>(
        &self,
        input: Option<T>,
        parent: T,
        offset: Option<usize>,
    ) -> Result<T, (AccessError<'a>, T)> {
        match self.check_set(&parent, offset) {
            Ok(()) => Ok(self.set(input, parent)),
            Err(err) => Err((err, parent)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::format;
    use alloc::string::ToString;

    use super::{AccessErrorKind, PathIndex};
    use crate::structure::{Structure, StructureKind};
    use crate::test_utils::{Node, array, object};

    fn abc() -> Node {
        array(["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn index_get() {
        let node = abc();
        assert_eq!(PathIndex::Index(1).get(&node).as_deref(), Some(&"b".into()));
        assert_eq!(PathIndex::Index(3).get(&node), None);
        assert_eq!(PathIndex::Index(0).get(&object([("0", Node::Null)])), None);
        assert_eq!(PathIndex::Index(0).get(&Node::Null), None);
    }

    #[test]
    fn index_get_borrows() {
        let node = abc();
        assert!(matches!(PathIndex::Index(0).get(&node), Some(Cow::Borrowed(_))));
    }

    #[test]
    fn index_set_replaces_and_removes() {
        let index = PathIndex::Index(1);
        assert_eq!(
            index.set(Some("Z".into()), abc()),
            array(["a".into(), "Z".into(), "c".into()])
        );
        assert_eq!(index.set(None, abc()), array(["a".into(), "c".into()]));
    }

    #[test]
    fn index_set_is_lenient() {
        let single = array(["x".into()]);
        assert_eq!(PathIndex::Index(5).set(Some("y".into()), single.clone()), single);

        let map = object([("a", 1.0.into())]);
        assert_eq!(PathIndex::Index(0).set(Some("y".into()), map.clone()), map);
        assert_eq!(PathIndex::Index(0).set(None, Node::Null), Node::Null);
    }

    #[test]
    fn key_get() {
        let node = object([("a", 1.0.into())]);
        assert_eq!(PathIndex::from("a").get(&node).as_deref(), Some(&1.0.into()));
        assert_eq!(PathIndex::from("b").get(&node), None);
        assert_eq!(PathIndex::from("a").get(&Node::from(true)), None);
    }

    #[test]
    fn key_get_broadcasts() {
        let rows = array((0..4).map(|i| object([("a", f64::from(i).into())])));
        let got = PathIndex::from("a").get(&rows);
        assert_eq!(
            got.as_deref(),
            Some(&array([0.0.into(), 1.0.into(), 2.0.into(), 3.0.into()]))
        );
        assert!(matches!(got, Some(Cow::Owned(_))));
    }

    #[test]
    fn key_get_broadcast_is_all_or_nothing() {
        let rows = array([
            object([("a", 0.0.into())]),
            object([("b", 1.0.into())]),
            object([("a", 2.0.into())]),
        ]);
        assert_eq!(PathIndex::from("a").get(&rows), None);

        let with_leaf = array([object([("a", 0.0.into())]), Node::Null]);
        assert_eq!(PathIndex::from("a").get(&with_leaf), None);
    }

    #[test]
    fn key_get_broadcast_over_empty_sequence() {
        assert_eq!(PathIndex::from("a").get(&array([])).as_deref(), Some(&array([])));
    }

    #[test]
    fn key_get_nested_broadcast() {
        let grid = array([
            array([object([("v", 1.0.into())]), object([("v", 2.0.into())])]),
            array([object([("v", 3.0.into())])]),
        ]);
        assert_eq!(
            PathIndex::from("v").get(&grid).as_deref(),
            Some(&array([
                array([1.0.into(), 2.0.into()]),
                array([3.0.into()])
            ]))
        );
    }

    #[test]
    fn key_set_on_mapping() {
        let node = object([("a", 1.0.into()), ("b", 2.0.into())]);
        assert_eq!(
            PathIndex::from("a").set(Some("x".into()), node.clone()),
            object([("a", "x".into()), ("b", 2.0.into())])
        );
        assert_eq!(
            PathIndex::from("c").set(Some(Node::Null), node.clone()),
            object([("a", 1.0.into()), ("b", 2.0.into()), ("c", Node::Null)])
        );
        assert_eq!(
            PathIndex::from("a").set(None, node.clone()),
            object([("b", 2.0.into())])
        );
        assert_eq!(PathIndex::from("z").set(None, node.clone()), node);
    }

    #[test]
    fn key_set_broadcasts_per_element() {
        let rows = array([
            object([("a", 0.0.into())]),
            object([]),
            "leaf".into(),
            array([object([])]),
        ]);
        assert_eq!(
            PathIndex::from("a").set(Some(true.into()), rows),
            array([
                object([("a", true.into())]),
                object([("a", true.into())]),
                "leaf".into(),
                array([object([("a", true.into())])]),
            ])
        );
    }

    #[test]
    fn key_set_on_leaf_is_lenient() {
        let leaf = Node::from("leaf");
        assert_eq!(PathIndex::from("a").set(Some(Node::Null), leaf.clone()), leaf);
    }

    #[test]
    fn make_empty_structure_follows_kind() {
        assert_eq!(PathIndex::Index(3).make_empty_structure::<Node>(), array([]));
        assert_eq!(PathIndex::from("a").make_empty_structure::<Node>(), object([]));
    }

    #[test]
    fn try_get_reports_kind() {
        let node = object([("list", abc())]);

        let err = PathIndex::from("nope").try_get(&node, Some(2)).unwrap_err();
        assert_eq!(err.kind(), &AccessErrorKind::MissingKey);
        assert_eq!(err.offset(), Some(2));
        assert_eq!(err.accessor(), &PathIndex::from("nope"));

        let list = PathIndex::from("list").try_get(&node, None).unwrap();
        let err = PathIndex::Index(7).try_get(&*list, None).unwrap_err();
        assert_eq!(err.kind(), &AccessErrorKind::IndexOutOfBounds { len: 3 });

        let err = PathIndex::Index(0).try_get(&node, None).unwrap_err();
        assert_eq!(
            err.kind(),
            &AccessErrorKind::IncompatibleKind {
                expected: StructureKind::Sequence,
                actual: StructureKind::Mapping,
            }
        );

        let err = PathIndex::from("a").try_get(&Node::Null, None).unwrap_err();
        assert_eq!(
            err.kind(),
            &AccessErrorKind::IncompatibleKind {
                expected: StructureKind::Mapping,
                actual: StructureKind::Leaf,
            }
        );
    }

    #[test]
    fn try_get_reports_broadcast_gap() {
        let rows = array([object([("a", 0.0.into())]), object([])]);
        let err = PathIndex::from("a").try_get(&rows, None).unwrap_err();
        assert_eq!(err.kind(), &AccessErrorKind::IncompleteBroadcast { position: 1 });

        let full = array([object([("a", 0.0.into())])]);
        let ok = PathIndex::from("a").try_get(&full, None).unwrap();
        assert_eq!(*ok, array([0.0.into()]));
    }

    #[test]
    fn try_set_hands_parent_back() {
        let single = array(["x".into()]);
        let (err, parent) = PathIndex::Index(5)
            .try_set(Some("y".into()), single.clone(), Some(0))
            .unwrap_err();
        assert_eq!(err.kind(), &AccessErrorKind::IndexOutOfBounds { len: 1 });
        assert_eq!(parent, single);

        let (err, _) = PathIndex::from("k")
            .try_set(Some("y".into()), Node::Null, None)
            .unwrap_err();
        assert_eq!(
            err.kind(),
            &AccessErrorKind::IncompatibleKind {
                expected: StructureKind::Mapping,
                actual: StructureKind::Leaf,
            }
        );

        let set = PathIndex::Index(0).try_set(None, single, None).unwrap();
        assert_eq!(set, array([]));
    }

    #[test]
    fn display() {
        assert_eq!(PathIndex::Index(3).to_string(), "[3]");
        assert_eq!(PathIndex::from("name").to_string(), ".name");

        let err = PathIndex::from("name")
            .try_get(&Node::Null, Some(1))
            .unwrap_err();
        assert_eq!(
            format!("{err}"),
            "Error accessing `.name` (step 1): expected a mapping, found a leaf"
        );
        assert_eq!(
            format!("{}", err.into_owned().kind()),
            "expected a mapping, found a leaf"
        );
    }

    #[test]
    fn into_owned_keeps_value() {
        let key = alloc::string::String::from("k");
        let index = PathIndex::from(key.as_str());
        assert_eq!(index.clone().into_owned(), index);
    }
}
